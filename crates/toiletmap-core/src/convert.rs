// crates/toiletmap-core/src/convert.rs

//! # Feature Mapper
//!
//! Raw GeoJSON -> [`ToiletRecord`]. Output order always matches input
//! order; nothing is sorted, filtered or deduplicated.

use crate::error::Result;
use crate::model::{Accessibility, ToiletRecord};
use crate::raw::{RawFeatureCollection, RawProperties};
use tracing::error;

/// Shown when neither the location name nor the address is usable.
pub const PLACEHOLDER_NAME: &str = "Ukendt toilet";

/// The affirmative value of `handicapadgang` (compared case-insensitively).
pub const ACCESSIBLE_TOKEN: &str = "Ja";

type NameCandidate = fn(&RawProperties) -> Option<&str>;

fn location_name(props: &RawProperties) -> Option<&str> {
    props.location_name.as_deref()
}

fn street_address(props: &RawProperties) -> Option<&str> {
    props.street_address.as_deref()
}

/// Name candidates in priority order. First non-blank wins.
const NAME_CANDIDATES: [NameCandidate; 2] = [location_name, street_address];

/// Resolves the display name of a toilet.
///
/// ```rust
/// use toiletmap_core::convert::{resolve_name, PLACEHOLDER_NAME};
/// use toiletmap_core::raw::RawProperties;
///
/// let props = RawProperties {
///     location_name: Some("  ".into()),
///     street_address: Some("Main St 5".into()),
///     accessibility: None,
///     opening_hours: "00-24".into(),
///     latitude: 55.68,
///     longitude: 12.57,
/// };
/// assert_eq!(resolve_name(&props), "Main St 5");
/// ```
pub fn resolve_name(props: &RawProperties) -> String {
    NAME_CANDIDATES
        .iter()
        .filter_map(|candidate| candidate(props))
        .find(|name| !name.trim().is_empty())
        .unwrap_or(PLACEHOLDER_NAME)
        .to_string()
}

pub fn parse_accessibility(value: Option<&str>) -> Accessibility {
    match value {
        Some(v) if v.eq_ignore_ascii_case(ACCESSIBLE_TOKEN) => Accessibility::Yes,
        Some(_) => Accessibility::No,
        None => Accessibility::Unknown,
    }
}

/// Flattens every feature into a record.
///
/// Latitude/longitude come from the properties, not from the geometry
/// array.
pub fn from_raw(raw: RawFeatureCollection) -> Vec<ToiletRecord> {
    raw.features
        .into_iter()
        .map(|feature| {
            let props = feature.properties;
            ToiletRecord {
                name: resolve_name(&props),
                lat: props.latitude,
                lng: props.longitude,
                accessible: parse_accessibility(props.accessibility.as_deref()),
                opening_hours: props.opening_hours,
            }
        })
        .collect()
}

/// Parses and maps a GeoJSON document.
pub fn parse_records(json: &str) -> Result<Vec<ToiletRecord>> {
    let raw: RawFeatureCollection = serde_json::from_str(json)?;
    Ok(from_raw(raw))
}

/// Like [`parse_records`], but logs the failure and reports "no data".
pub fn records_from_json(json: &str) -> Option<Vec<ToiletRecord>> {
    match parse_records(json) {
        Ok(records) => Some(records),
        Err(e) => {
            error!("Error parsing toilet dataset: {e}");
            None
        }
    }
}
