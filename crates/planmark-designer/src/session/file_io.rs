//! Layout record conversion and file I/O for the designer session.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;

use super::DesignerSession;
use crate::model::{ItemId, PlacedItem};
use crate::serialization::Layout;
use crate::viewport::clamp_percent;

impl DesignerSession {
    /// Builds the persisted record for the current state.
    pub fn to_layout(&self) -> Layout {
        let mut layout = Layout {
            classification: self.classification,
            background: self.background.clone(),
            items: self.items().to_vec(),
            snap_to_grid: self.snap_to_grid,
            symbol_summary: Vec::new(),
            updated_at: self.updated_at,
        };
        layout.refresh_summary();
        layout
    }

    /// Replaces the session state with a persisted record.
    ///
    /// History, selection and drag state are reset. The stored summary is
    /// ignored; it is always derived from the items. Items that break the
    /// placement rules are repaired: coordinates are clamped, duplicate ids
    /// get a fresh id and blank annotations are dropped.
    pub fn restore_layout(&mut self, layout: Layout) {
        let items = repair_items(layout.items);

        self.classification = layout.classification;
        self.background = layout.background;
        self.snap_to_grid = layout.snap_to_grid;
        self.history.reset(items);
        self.selected_item = None;
        self.reset_pointer();
        self.updated_at = layout.updated_at;
        self.is_modified = false;
        self.revalidate_selected_symbol();
    }

    /// Creates a session from a persisted record with default settings.
    pub fn from_layout(layout: Layout) -> Self {
        let mut session = Self::new(layout.classification);
        session.restore_layout(layout);
        session
    }

    /// Save layout to file.
    pub fn save_layout(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut layout = self.to_layout();
        layout.updated_at = Utc::now();
        layout.save_to_file(&path)?;

        self.updated_at = layout.updated_at;
        self.is_modified = false;
        tracing::info!(
            "Saved layout with {} items to {}",
            layout.items.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load layout from file.
    pub fn load_layout(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let layout = Layout::load_from_file(&path)?;
        tracing::info!(
            "Loaded layout with {} items from {}",
            layout.items.len(),
            path.as_ref().display()
        );
        self.restore_layout(layout);
        Ok(())
    }

    /// Starts an empty layout, keeping classification and settings.
    pub fn new_layout(&mut self) {
        self.background = None;
        self.history.reset(Vec::new());
        self.selected_item = None;
        self.reset_pointer();
        self.annotation_draft.clear();
        self.is_modified = false;
        self.updated_at = Utc::now();
    }
}

fn repair_items(items: Vec<PlacedItem>) -> Vec<PlacedItem> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut repaired = Vec::with_capacity(items.len());

    for mut item in items {
        if item.text().is_some_and(|text| text.trim().is_empty()) {
            tracing::warn!("Dropping annotation {} with blank text", item.id);
            continue;
        }

        let (x, y) = (clamp_percent(item.x), clamp_percent(item.y));
        if x != item.x || y != item.y {
            tracing::warn!(
                "Item {} at ({}, {}) is outside the canvas, clamping",
                item.id,
                item.x,
                item.y
            );
            item.x = x;
            item.y = y;
        }

        if !seen.insert(item.id.clone()) {
            let fresh = ItemId::generate();
            tracing::warn!("Duplicate item id {}, reassigning to {}", item.id, fresh);
            item.id = fresh;
            seen.insert(item.id.clone());
        }
        repaired.push(item);
    }
    repaired
}
