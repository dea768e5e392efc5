// crates/toiletmap-core/src/map.rs

//! # Map Renderer
//!
//! The map view is an external collaborator. The core only ever asks it
//! to move the camera, add markers, install a popup adapter and toggle
//! the "my location" layer; everything else belongs to the toolkit.

use crate::error::{Result, ToiletError};
use crate::model::{Accessibility, LatLng, ToiletRecord};
use crate::popup::{PopupAdapter, PopupContent, SNIPPET_DELIMITER};
use tracing::info;

pub const ACCESSIBLE_LABEL: &str = "Handicapvenlig";
pub const NOT_ACCESSIBLE_LABEL: &str = "Ikke handicapvenlig";

/// Everything needed to place one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

/// A marker as placed on a map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: usize,
    pub position: LatLng,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

/// The operations the core needs from a map view.
pub trait MapSurface {
    fn move_camera(&mut self, target: LatLng, zoom: f32);

    fn add_marker(&mut self, options: MarkerOptions) -> Marker;

    fn set_popup_adapter(&mut self, adapter: Box<dyn PopupAdapter>);

    /// Fails with [`ToiletError::Security`] when the platform refuses
    /// (e.g. permission revoked between check and use).
    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()>;
}

/// Accessibility label shown in the popup. Unknown reads as "not accessible".
pub fn accessibility_label(accessible: Accessibility) -> &'static str {
    if accessible.is_accessible() {
        ACCESSIBLE_LABEL
    } else {
        NOT_ACCESSIBLE_LABEL
    }
}

/// Marker for one record: title is the name, snippet is
/// `"<label>\n<opening hours>"`.
pub fn marker_for(record: &ToiletRecord) -> MarkerOptions {
    MarkerOptions {
        position: record.position(),
        title: Some(record.name.clone()),
        snippet: Some(format!(
            "{}{}{}",
            accessibility_label(record.accessible),
            SNIPPET_DELIMITER,
            record.opening_hours
        )),
    }
}

/// Adds one marker per record, in order. Returns the number placed.
pub fn place_markers<M: MapSurface + ?Sized>(map: &mut M, records: &[ToiletRecord]) -> usize {
    for record in records {
        map.add_marker(marker_for(record));
    }
    info!("Placed {} toilet markers", records.len());
    records.len()
}

/// In-memory map surface. Records every call so it can be inspected;
/// used by the CLI and by tests.
#[derive(Default)]
pub struct HeadlessMap {
    camera: Option<(LatLng, f32)>,
    markers: Vec<Marker>,
    adapter: Option<Box<dyn PopupAdapter>>,
    my_location: bool,
    deny_location: bool,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose platform rejects enabling the location layer.
    pub fn denying_location() -> Self {
        Self {
            deny_location: true,
            ..Self::default()
        }
    }

    pub fn camera(&self) -> Option<(LatLng, f32)> {
        self.camera
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn has_popup_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    pub fn is_my_location_enabled(&self) -> bool {
        self.my_location
    }

    /// Renders the popup of a marker the way a tap would.
    /// `None` until an adapter is installed.
    pub fn show_popup(&self, marker: &Marker) -> Option<PopupContent> {
        self.adapter.as_ref().map(|adapter| adapter.render(marker))
    }
}

impl MapSurface for HeadlessMap {
    fn move_camera(&mut self, target: LatLng, zoom: f32) {
        self.camera = Some((target, zoom));
    }

    fn add_marker(&mut self, options: MarkerOptions) -> Marker {
        let marker = Marker {
            id: self.markers.len(),
            position: options.position,
            title: options.title,
            snippet: options.snippet,
        };
        self.markers.push(marker.clone());
        marker
    }

    fn set_popup_adapter(&mut self, adapter: Box<dyn PopupAdapter>) {
        self.adapter = Some(adapter);
    }

    fn set_my_location_enabled(&mut self, enabled: bool) -> Result<()> {
        if enabled && self.deny_location {
            return Err(ToiletError::Security(
                "location permission not granted".to_string(),
            ));
        }
        self.my_location = enabled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popup::ToiletPopupAdapter;

    fn record(name: &str, accessible: Accessibility, hours: &str) -> ToiletRecord {
        ToiletRecord {
            name: name.into(),
            lat: 55.68,
            lng: 12.57,
            opening_hours: hours.into(),
            accessible,
        }
    }

    #[test]
    fn snippet_combines_label_and_hours() {
        let m = marker_for(&record("A", Accessibility::Yes, "00-24"));
        assert_eq!(m.title.as_deref(), Some("A"));
        assert_eq!(m.snippet.as_deref(), Some("Handicapvenlig\n00-24"));
        assert_eq!(m.position, LatLng::new(55.68, 12.57));
    }

    #[test]
    fn unknown_accessibility_reads_as_not_accessible() {
        assert_eq!(accessibility_label(Accessibility::No), NOT_ACCESSIBLE_LABEL);
        assert_eq!(accessibility_label(Accessibility::Unknown), NOT_ACCESSIBLE_LABEL);
    }

    #[test]
    fn one_marker_per_record_in_order() {
        let records = vec![
            record("A", Accessibility::Yes, "00-24"),
            record("B", Accessibility::No, "07-22"),
            record("A", Accessibility::Unknown, ""),
        ];
        let mut map = HeadlessMap::new();
        assert_eq!(place_markers(&mut map, &records), 3);

        let titles: Vec<_> = map.markers().iter().filter_map(|m| m.title.as_deref()).collect();
        assert_eq!(titles, ["A", "B", "A"]);
        let ids: Vec<_> = map.markers().iter().map(|m| m.id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn popup_needs_an_adapter() {
        let mut map = HeadlessMap::new();
        let marker = map.add_marker(marker_for(&record("A", Accessibility::No, "")));
        assert!(map.show_popup(&marker).is_none());

        map.set_popup_adapter(Box::new(ToiletPopupAdapter));
        let popup = map.show_popup(&marker).unwrap();
        assert_eq!(popup.visible_lines().collect::<Vec<_>>(), [NOT_ACCESSIBLE_LABEL]);
    }

    #[test]
    fn denying_surface_refuses_location_layer() {
        let mut map = HeadlessMap::denying_location();
        assert!(matches!(
            map.set_my_location_enabled(true),
            Err(ToiletError::Security(_))
        ));
        assert!(!map.is_my_location_enabled());
        assert!(map.set_my_location_enabled(false).is_ok());
    }
}
