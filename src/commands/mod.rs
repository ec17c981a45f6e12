use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::BibleDocument;

pub mod crawl;
pub mod extract;
pub mod status;
pub mod verify;

/// Strict read for commands that only inspect the document.
pub(crate) fn read_document(path: &Path) -> Result<BibleDocument> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
