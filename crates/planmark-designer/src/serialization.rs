//! Serialization and deserialization of layout records.
//!
//! A layout is the only state exchanged with the storage collaborator. It is
//! encoded as camelCase JSON:
//!
//! ```text
//! {
//!   "classification": "low_voltage",
//!   "background": { "fileUrl": "...", "fileType": "pdf", "fileName": "..." },
//!   "items": [ { "id": "...", "type": "symbol", "symbolRef": {...}, "x": 10.0, "y": 10.0 } ],
//!   "snapToGrid": true,
//!   "symbolSummary": [ { "label": "Outlet", "count": 2 } ],
//!   "updatedAt": "2026-01-01T00:00:00Z"
//! }
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use planmark_core::Classification;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::PlacedItem;
use crate::summary::{summarize, SymbolCount};

/// Kind of uploaded background file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Pdf,
    Image,
}

impl BackgroundKind {
    /// Infers the kind from a file name; anything but `.pdf` is an image.
    pub fn from_file_name(file_name: &str) -> Self {
        let is_pdf = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            Self::Pdf
        } else {
            Self::Image
        }
    }
}

/// Reference to an uploaded background held by the storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub file_url: String,
    pub file_type: BackgroundKind,
    pub file_name: String,
}

impl Background {
    pub fn new(file_url: impl Into<String>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            file_url: file_url.into(),
            file_type: BackgroundKind::from_file_name(&file_name),
            file_name,
        }
    }
}

/// Persisted layout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub classification: Classification,
    pub background: Option<Background>,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub snap_to_grid: bool,
    /// Derived from `items`; recomputed on every save.
    #[serde(default)]
    pub symbol_summary: Vec<SymbolCount>,
    pub updated_at: DateTime<Utc>,
}

impl Layout {
    /// Create an empty layout
    pub fn new(classification: Classification) -> Self {
        Self {
            classification,
            background: None,
            items: Vec::new(),
            snap_to_grid: false,
            symbol_summary: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Recompute the derived symbol summary from the items
    pub fn refresh_summary(&mut self) {
        self.symbol_summary = summarize(&self.items);
    }

    /// Encode as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout")
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse layout")
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;

        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;

        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;

        Self::from_json(&content)
    }
}
