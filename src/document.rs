use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Number of characters of a document that are kept for the prompt. Anything
/// past this is dropped silently; there is no chunking.
pub const DOCUMENT_CHAR_BUDGET: usize = 4000;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read '{}' as UTF-8 text", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_document(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = normalize_newlines(content);
    let truncated = truncate_chars(&content, DOCUMENT_CHAR_BUDGET);
    debug!(
        path = %path.display(),
        bytes = content.len(),
        kept_bytes = truncated.len(),
        truncated = truncated.len() < content.len(),
        "loaded document"
    );
    Ok(truncated.to_string())
}

// `\r\n` and lone `\r` both become `\n`, matching text-mode reads.
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
