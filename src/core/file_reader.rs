//! Document reading
//!
//! Loads the whole text source into memory. Invalid UTF-8 is decoded lossily
//! and flagged in the metadata rather than rejected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::QueryError;
use crate::core::util::{get_mtime_ms, hash_bytes};

/// Metadata describing where a document came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Size in bytes
    pub size: u64,

    /// Modification time in milliseconds since epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime_ms: Option<i64>,

    /// xxh3 hash of the raw bytes
    pub hash: String,

    /// Whether lossy UTF-8 conversion was used
    #[serde(default)]
    pub lossy: bool,
}

/// A fully loaded text document
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
    pub meta: DocumentMeta,
}

impl Document {
    /// Build a document from bytes already in memory
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let meta = DocumentMeta {
            size: bytes.len() as u64,
            mtime_ms: None,
            hash: hash_bytes(&bytes),
            lossy: false,
        };

        let (text, lossy) = match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
        };

        Self {
            path: path.into(),
            text,
            meta: DocumentMeta { lossy, ..meta },
        }
    }
}

/// Read the document at `path`
pub fn read_document(path: &Path) -> Result<Document, QueryError> {
    let bytes = fs::read(path).map_err(|source| QueryError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document = Document::from_bytes(path, bytes);
    document.meta.mtime_ms = get_mtime_ms(path).ok();
    Ok(document)
}
