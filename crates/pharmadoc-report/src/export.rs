//! Download naming and text file output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;
use crate::generate::RenderedDocument;

/// Content type of every generated document.
pub const CONTENT_TYPE: &str = "text/plain";

/// File extension of every generated document.
pub const FILE_EXTENSION: &str = "txt";

/// Title used in the file name of merged output.
pub const MERGED_TITLE: &str = "Merged Documents";

/// Replace characters that are awkward in file names with `_`.
///
/// ASCII letters, digits and `-_.()` are kept; everything else, including
/// whitespace, becomes an underscore.
pub fn sanitize_component(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '(' | ')') {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Download name for a document: `<system>_<title>.txt`.
pub fn file_name(system_name: &str, title: &str) -> String {
    format!(
        "{}_{}.{FILE_EXTENSION}",
        sanitize_component(system_name),
        sanitize_component(title)
    )
}

/// Download name for merged output: `<system>_Merged_Documents.txt`.
pub fn merged_file_name(system_name: &str) -> String {
    file_name(system_name, MERGED_TITLE)
}

/// Write `document` into `output_dir`, creating the directory if needed.
///
/// Returns the path written. An existing file with the same name is replaced.
pub fn write_document(
    output_dir: &Path,
    document: &RenderedDocument,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(&document.file_name);
    fs::write(&path, document.content.as_bytes()).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        bytes = document.content.len(),
        "wrote document"
    );
    Ok(path)
}
