// crates/toiletmap-core/src/loader/common_io.rs
use crate::error::{Result, ToiletError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// True for names the loader should gunzip (`*.gz`).
pub fn is_gzip(name: &str) -> bool {
    name.ends_with(".gz")
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// name asks for one. The caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(&path.to_string_lossy()) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Reads a whole (possibly compressed) file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    let mut stream = open_stream(path)?;
    let mut text = String::new();
    stream
        .read_to_string(&mut text)
        .map_err(|e| read_error(path, e))?;
    Ok(text)
}

fn read_error(path: &Path, source: std::io::Error) -> ToiletError {
    ToiletError::ResourceRead {
        name: path.display().to_string(),
        source,
    }
}
