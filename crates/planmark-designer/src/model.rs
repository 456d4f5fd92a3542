//! Placed item model.
//!
//! A placed item is either a symbol instance or a free-text annotation at a
//! normalized canvas position. Symbol items carry a copy of the catalog
//! entry's display fields, never a reference into the catalog.

use planmark_core::Symbol;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::viewport::CanvasPoint;

/// Unique placed item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Display fields copied from a catalog symbol at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRef {
    pub glyph: String,
    pub label: String,
    pub category: String,
    pub code: String,
}

impl From<&Symbol> for SymbolRef {
    fn from(symbol: &Symbol) -> Self {
        Self {
            glyph: symbol.glyph.clone(),
            label: symbol.label.clone(),
            category: symbol.category.clone(),
            code: symbol.code.clone(),
        }
    }
}

/// What a placed item shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Symbol {
        #[serde(rename = "symbolRef")]
        symbol_ref: SymbolRef,
    },
    Annotation {
        text: String,
    },
}

/// A symbol or annotation positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub x: f64,
    pub y: f64,
}

impl PlacedItem {
    /// Creates a symbol item copying the symbol's display fields.
    pub fn symbol(id: ItemId, at: CanvasPoint, symbol: &Symbol) -> Self {
        Self {
            id,
            kind: ItemKind::Symbol {
                symbol_ref: SymbolRef::from(symbol),
            },
            x: at.x,
            y: at.y,
        }
    }

    /// Creates an annotation item.
    pub fn annotation(id: ItemId, at: CanvasPoint, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: ItemKind::Annotation { text: text.into() },
            x: at.x,
            y: at.y,
        }
    }

    pub fn position(&self) -> CanvasPoint {
        CanvasPoint::new(self.x, self.y)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self.kind, ItemKind::Symbol { .. })
    }

    pub fn is_annotation(&self) -> bool {
        matches!(self.kind, ItemKind::Annotation { .. })
    }

    /// The copied symbol fields, for symbol items.
    pub fn symbol_ref(&self) -> Option<&SymbolRef> {
        match &self.kind {
            ItemKind::Symbol { symbol_ref } => Some(symbol_ref),
            ItemKind::Annotation { .. } => None,
        }
    }

    /// The annotation text, for annotation items.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Annotation { text } => Some(text),
            ItemKind::Symbol { .. } => None,
        }
    }

    /// Short label for logs and lists.
    pub fn display_label(&self) -> &str {
        match &self.kind {
            ItemKind::Symbol { symbol_ref } => &symbol_ref.label,
            ItemKind::Annotation { text } => text,
        }
    }
}
