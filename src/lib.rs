//! toiletmap-rs
//!
//! Workspace host crate. Re-exports [`toiletmap_core`] so the demos under
//! `demos/` can be run from the workspace root:
//!
//! ```text
//! cargo run --example basic_usage
//! ```

pub use toiletmap_core::*;
