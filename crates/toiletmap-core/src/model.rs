// crates/toiletmap-core/src/model.rs
use std::fmt;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Wheelchair accessibility as reported by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Yes,
    No,
    /// The source record has no accessibility field at all.
    Unknown,
}

impl Accessibility {
    pub fn is_accessible(self) -> bool {
        matches!(self, Accessibility::Yes)
    }
}

/// A public toilet, flattened from one GeoJSON feature.
///
/// Built once per screen load and never mutated afterwards.
/// `name` is never blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ToiletRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub opening_hours: String,
    pub accessible: Accessibility,
}

impl ToiletRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Simple aggregate statistics over a loaded record list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total: usize,
    pub accessible: usize,
    pub not_accessible: usize,
    pub unknown: usize,
}

impl DatasetStats {
    pub fn from_records(records: &[ToiletRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut stats, record| {
                stats.total += 1;
                match record.accessible {
                    Accessibility::Yes => stats.accessible += 1,
                    Accessibility::No => stats.not_accessible += 1,
                    Accessibility::Unknown => stats.unknown += 1,
                }
                stats
            })
    }
}
