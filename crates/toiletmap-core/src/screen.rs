// crates/toiletmap-core/src/screen.rs
use crate::loader::{load_records, AssetSource, DEFAULT_ASSET};
use crate::map::{place_markers, MapSurface};
use crate::model::LatLng;
use crate::permission::{LocationFlow, PermissionGrants, PermissionProvider, Resolution};
use crate::popup::ToiletPopupAdapter;
use tracing::{debug, warn};

/// Copenhagen city hall square.
pub const COPENHAGEN: LatLng = LatLng::new(55.6758, 12.5683);
pub const DEFAULT_ZOOM: f32 = 13.0;

/// Where the screen looks on load and which asset it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub asset: String,
    pub center: LatLng,
    pub zoom: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            asset: DEFAULT_ASSET.to_string(),
            center: COPENHAGEN,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// The single map screen. Owns the map handle from the moment the map
/// reports ready until the screen goes away.
pub struct MapScreen<M: MapSurface> {
    map: M,
    markers_placed: usize,
    location: LocationFlow,
}

impl<M: MapSurface> MapScreen<M> {
    /// Runs the whole load -> map -> render pass on a freshly ready map.
    ///
    /// A missing or malformed dataset leaves the map empty and skips the
    /// location flow.
    pub fn on_map_ready<P>(
        mut map: M,
        assets: &dyn AssetSource,
        permissions: &mut P,
        config: &ScreenConfig,
    ) -> Self
    where
        P: PermissionProvider + ?Sized,
    {
        map.move_camera(config.center, config.zoom);
        map.set_popup_adapter(Box::new(ToiletPopupAdapter));

        let mut screen = Self {
            map,
            markers_placed: 0,
            location: LocationFlow::default(),
        };

        let Some(records) = load_records(assets, &config.asset) else {
            warn!("No toilets to show; leaving the map empty");
            return screen;
        };
        screen.markers_placed = place_markers(&mut screen.map, &records);

        if screen.location.start(permissions) == Some(Resolution::Granted) {
            screen.enable_my_location();
        }
        screen
    }

    /// Delivers the user's answer to the location permission prompt.
    pub fn on_permissions_result(&mut self, grants: &PermissionGrants) {
        if self.location.complete(grants) == Some(Resolution::Granted) {
            self.enable_my_location();
        }
    }

    fn enable_my_location(&mut self) {
        // The grant may have been revoked since it was checked.
        if let Err(e) = self.map.set_my_location_enabled(true) {
            debug!("Ignoring location layer failure: {e}");
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn markers_placed(&self) -> usize {
        self.markers_placed
    }

    pub fn location_flow(&self) -> LocationFlow {
        self.location
    }

    pub fn into_map(self) -> M {
        self.map
    }
}
