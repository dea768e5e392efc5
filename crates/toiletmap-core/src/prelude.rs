//! toiletmap prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::convert::{parse_records, records_from_json};
pub use crate::error::{Result, ToiletError};
pub use crate::loader::{load_records, AssetSource, DirAssets, EmbeddedAssets, DEFAULT_ASSET};
pub use crate::map::{HeadlessMap, MapSurface, Marker, MarkerOptions};
pub use crate::model::{Accessibility, DatasetStats, LatLng, ToiletRecord};
pub use crate::permission::{
    LocationFlow, LocationPermission, PermissionGrants, PermissionProvider, Resolution,
    StaticPermissions,
};
pub use crate::popup::{PopupAdapter, PopupContent, ToiletPopupAdapter};
pub use crate::screen::{MapScreen, ScreenConfig};
