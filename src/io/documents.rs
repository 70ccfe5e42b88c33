//! Document reading and score persistence.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::core::errors::{Result, TextdupError};

/// Render a score with two decimals, as written to result files.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

fn read_error(path: &Path, err: std::io::Error) -> TextdupError {
    let message = if err.kind() == ErrorKind::NotFound {
        format!("Document {} does not exist", path.display())
    } else {
        format!("Failed to read document: {}", path.display())
    };
    TextdupError::io(message, err)
}

/// Read a UTF-8 document.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "Read document");
    Ok(content)
}

/// Read a UTF-8 document on the tokio runtime.
pub async fn read_document_async(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| read_error(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "Read document");
    Ok(content)
}

/// Write `score` with two decimals and a trailing newline, replacing the file.
pub fn write_score(path: impl AsRef<Path>, score: f64) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, format!("{}\n", format_score(score))).map_err(|e| {
        TextdupError::io(
            format!("Failed to write score file: {}", path.display()),
            e,
        )
    })
}
