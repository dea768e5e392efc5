// crates/toiletmap-core/src/lib.rs

//! Public toilets of Copenhagen on a map.
//!
//! Loads the bundled GeoJSON feature collection, flattens it into
//! [`ToiletRecord`]s and renders one marker per record on a
//! [`MapSurface`], with a two-line popup and an optional "my location"
//! layer behind a permission prompt.
//!
//! ```rust
//! use toiletmap_core::prelude::*;
//!
//! let mut permissions = StaticPermissions::ungranted();
//! let screen = MapScreen::on_map_ready(
//!     HeadlessMap::new(),
//!     &EmbeddedAssets,
//!     &mut permissions,
//!     &ScreenConfig::default(),
//! );
//! assert!(screen.markers_placed() > 0);
//! ```

pub mod convert;
pub mod error;
pub mod loader;
pub mod map;
pub mod model;
pub mod permission;
pub mod popup;
pub mod prelude;
// Shared raw input, only used by the mapper.
#[doc(hidden)]
pub mod raw;
pub mod screen;

// Re-exports
pub use crate::error::{Result, ToiletError};
pub use crate::map::{HeadlessMap, MapSurface, Marker, MarkerOptions};
pub use crate::model::{Accessibility, DatasetStats, LatLng, ToiletRecord};
pub use crate::screen::{MapScreen, ScreenConfig};
