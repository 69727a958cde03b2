use std::{fs, path::Path};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use tracing::{debug, error};

use crate::error::{JsonveilError, Result};

/// Read and parse a JSON document from `path`.
///
/// The file is read fully into memory in one pass; malformed JSON is
/// rejected here, before any transform runs.
///
/// # Arguments
/// * `path` - Path to the source JSON file
///
/// # Returns
/// Returns the parsed JSON value, or a `JsonveilError` naming the path on
/// failure.
pub fn read_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read input file '{}': {}", path.display(), e);
        JsonveilError::Input {
            path:   path.to_path_buf(),
            source: e,
        }
    })?;

    let value = serde_json::from_str(&text).map_err(|e| {
        error!("Input file '{}' is not valid JSON: {}", path.display(), e);
        JsonveilError::Parse {
            path:   path.to_path_buf(),
            source: e,
        }
    })?;

    debug!("Read {} bytes of JSON from '{}'", text.len(), path.display());
    Ok(value)
}

/// Serialize `value` and write it to `path`.
///
/// Output is pretty-printed with 4-space indentation, non-ASCII characters
/// are preserved literally, and the file ends with a trailing newline.
///
/// # Arguments
/// * `path` - Destination path for the JSON file
/// * `value` - The JSON value to write
///
/// # Returns
/// Returns `Ok(())` on success, or a `JsonveilError` naming the path on
/// failure.
pub fn write_document(path: &Path, value: &Value) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');

    fs::write(path, &buffer).map_err(|e| {
        error!("Failed to write output file '{}': {}", path.display(), e);
        JsonveilError::Output {
            path:   path.to_path_buf(),
            source: e,
        }
    })?;

    debug!("Wrote {} bytes of JSON to '{}'", buffer.len(), path.display());
    Ok(())
}
