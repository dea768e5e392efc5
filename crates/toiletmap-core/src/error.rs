// crates/toiletmap-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading the bundled dataset or driving the map.
///
/// None of these are fatal: the screen degrades to "feature not shown"
/// and only the logs see them.
#[derive(Debug, Error)]
pub enum ToiletError {
    /// The bundled resource is missing or unreadable.
    #[error("failed to read asset `{name}`: {source}")]
    ResourceRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or schema-mismatched JSON.
    #[error("failed to parse feature collection: {0}")]
    Parse(#[from] serde_json::Error),

    /// A platform feature was used without a live permission.
    #[error("security failure: {0}")]
    Security(String),
}

pub type Result<T> = std::result::Result<T, ToiletError>;
