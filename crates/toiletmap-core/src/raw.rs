// crates/toiletmap-core/src/raw.rs
use serde::Deserialize;

/// Raw GeoJSON root as shipped in `toilet_cph.json`.
///
/// Only lives for the duration of the load -> map transform.
#[derive(Debug, Deserialize)]
pub struct RawFeatureCollection {
    pub r#type: String,
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub struct RawFeature {
    pub r#type: String,
    pub geometry: RawGeometry,
    pub properties: RawProperties,
}

/// Point geometry, `[lng, lat]`.
///
/// Parsed for schema fidelity; coordinates are taken from
/// [`RawProperties`] instead.
#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    pub r#type: String,
    pub coordinates: Vec<f64>,
}

/// Raw properties of one toilet. Keys mirror the municipal dataset.
/// Unknown keys (postnummer, status, utm_x, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct RawProperties {
    #[serde(rename = "toilet_lokalitet", default)]
    pub location_name: Option<String>,
    #[serde(rename = "vejnavn_husnummer", default)]
    pub street_address: Option<String>,
    /// "Ja", "Nej" or absent.
    #[serde(rename = "handicapadgang", default)]
    pub accessibility: Option<String>,
    #[serde(rename = "aabningstid_doegn")]
    pub opening_hours: String,
    pub latitude: f64,
    pub longitude: f64,
}
