// crates/toiletmap-core/src/loader/mod.rs

//! # Dataset Loader
//!
//! Reads the bundled feature collection into memory. Failures are logged
//! and reported as "no data"; there is no retry, the asset is static.

use crate::convert::records_from_json;
use crate::error::{Result, ToiletError};
use crate::model::ToiletRecord;
use std::io;
use std::path::{Path, PathBuf};
use tracing::error;

pub mod common_io;

/// File name of the bundled Copenhagen dataset.
pub const DEFAULT_ASSET: &str = "toilet_cph.json";

/// Read-only access to bundled resources by name.
pub trait AssetSource {
    fn read_to_string(&self, name: &str) -> Result<String>;
}

/// Assets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The `data/` directory shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DirAssets {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

impl AssetSource for DirAssets {
    fn read_to_string(&self, name: &str) -> Result<String> {
        common_io::read_text(&self.root.join(name))
    }
}

// Compiled into the binary, like an APK asset.
const EMBEDDED_DATASET: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/toilet_cph.json"));

fn embedded(name: &str) -> Option<&'static str> {
    match name {
        DEFAULT_ASSET => Some(EMBEDDED_DATASET),
        _ => None,
    }
}

/// The assets baked into the crate at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn read_to_string(&self, name: &str) -> Result<String> {
        embedded(name)
            .map(str::to_string)
            .ok_or_else(|| ToiletError::ResourceRead {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such bundled asset"),
            })
    }
}

/// Reads a bundled resource, logging and returning `None` on failure.
pub fn load_asset(assets: &dyn AssetSource, name: &str) -> Option<String> {
    match assets.read_to_string(name) {
        Ok(text) => Some(text),
        Err(e) => {
            error!("Failed to load {name}: {e}");
            None
        }
    }
}

/// Load -> parse -> map in one step. `None` if either stage failed.
pub fn load_records(assets: &dyn AssetSource, name: &str) -> Option<Vec<ToiletRecord>> {
    let json = load_asset(assets, name)?;
    records_from_json(&json)
}
