//! Placement, selection and removal for the designer session.

use planmark_core::{DesignerError, DesignerResult};

use super::{DesignerSession, DragState, PlacementMode, PointerOutcome};
use crate::item_store;
use crate::model::{ItemId, PlacedItem};
use crate::viewport::{clamp_percent, CanvasPoint, ScreenPoint, SurfaceRect};

impl DesignerSession {
    /// Handles a click on the canvas: maps the pointer and places an item.
    ///
    /// For hosts that deliver only clicks. When the host also routes
    /// `pointer_down`/`pointer_up`, the click that trails a release belongs
    /// to that interaction and is suppressed, as is any click while a press
    /// or drag is in progress.
    pub fn click(
        &mut self,
        surface: Option<&SurfaceRect>,
        pointer: ScreenPoint,
    ) -> DesignerResult<PointerOutcome> {
        if self.drag != DragState::Idle || self.pressed {
            tracing::debug!("Click suppressed during press or drag");
            return Ok(PointerOutcome::Suppressed);
        }
        if std::mem::take(&mut self.swallow_click) {
            tracing::debug!("Click suppressed after pointer release");
            return Ok(PointerOutcome::Suppressed);
        }
        let point = self.mapper.map(surface, pointer, self.snap_to_grid)?;
        self.place_at(point).map(PointerOutcome::Placed)
    }

    /// Handles a pointer press: selects the item under the pointer, or
    /// places a new item on empty canvas.
    ///
    /// Starts a pointer interaction that [`pointer_up`](Self::pointer_up)
    /// closes.
    pub fn pointer_down(
        &mut self,
        surface: Option<&SurfaceRect>,
        pointer: ScreenPoint,
    ) -> DesignerResult<PointerOutcome> {
        if self.drag != DragState::Idle {
            return Ok(PointerOutcome::Suppressed);
        }
        self.swallow_click = false;
        self.pressed = true;
        // Hit testing uses the raw position so snapping cannot jump to a neighbour
        let raw = self.mapper.map(surface, pointer, false)?;
        let hit = item_store::item_at(self.items(), raw, self.hit_radius).map(|item| item.id.clone());
        match hit {
            Some(id) => {
                self.selected_item = Some(id.clone());
                self.drag = DragState::Armed {
                    item_id: id.clone(),
                };
                Ok(PointerOutcome::Selected(id))
            }
            None => {
                let point = self.normalize(raw);
                self.place_at(point).map(PointerOutcome::Placed)
            }
        }
    }

    /// Places an item at a canvas position according to the current mode.
    ///
    /// The position is clamped, and snapped when grid snapping is on.
    pub fn place_at(&mut self, point: CanvasPoint) -> DesignerResult<ItemId> {
        if self.background.is_none() {
            return Err(DesignerError::MissingBackground);
        }
        let point = self.normalize(point);
        let id = ItemId::generate();

        let item = match self.mode {
            PlacementMode::Annotation => {
                let text = self.annotation_draft.trim();
                if text.is_empty() {
                    return Err(DesignerError::EmptyAnnotation);
                }
                PlacedItem::annotation(id.clone(), point, text)
            }
            PlacementMode::Symbol => {
                let symbol = self
                    .selected_symbol
                    .as_ref()
                    .ok_or(DesignerError::NoSymbolSelected)?;
                PlacedItem::symbol(id.clone(), point, symbol)
            }
        };

        tracing::debug!(
            "Placed {} '{}' at ({:.2}, {:.2})",
            if item.is_symbol() { "symbol" } else { "annotation" },
            item.display_label(),
            point.x,
            point.y
        );

        let next = item_store::place(self.items(), item);
        self.commit_items(next);
        if self.mode == PlacementMode::Annotation {
            self.annotation_draft.clear();
        }
        Ok(id)
    }

    /// Selects a placed item for removal. Does not affect history.
    pub fn select_item(&mut self, id: &ItemId) -> DesignerResult<()> {
        if !item_store::contains(self.items(), id) {
            return Err(DesignerError::UnknownItem { id: id.to_string() });
        }
        self.selected_item = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_item = None;
    }

    /// Removes an item by id.
    pub fn remove_item(&mut self, id: &ItemId) -> DesignerResult<()> {
        if !item_store::contains(self.items(), id) {
            return Err(DesignerError::UnknownItem { id: id.to_string() });
        }
        self.end_drag();
        let next = item_store::remove(self.items(), id);
        self.commit_items(next);
        self.revalidate_selection();
        tracing::debug!("Removed item {}", id);
        Ok(())
    }

    /// Removes the selected item. Returns false if nothing was selected.
    pub fn remove_selected(&mut self) -> bool {
        match self.selected_item.clone() {
            Some(id) => self.remove_item(&id).is_ok(),
            None => false,
        }
    }

    /// Removes every item. Returns false if the canvas was already empty.
    pub fn clear_all(&mut self) -> bool {
        if self.items().is_empty() {
            return false;
        }
        self.end_drag();
        let next = item_store::clear(self.items());
        self.commit_items(next);
        self.selected_item = None;
        tracing::debug!("Cleared all items");
        true
    }

    /// Clamps a point into range and applies grid snapping if enabled.
    pub(crate) fn normalize(&self, point: CanvasPoint) -> CanvasPoint {
        let x = clamp_percent(point.x);
        let y = clamp_percent(point.y);
        if self.snap_to_grid {
            CanvasPoint::new(self.mapper.snap(x), self.mapper.snap(y))
        } else {
            CanvasPoint::new(x, y)
        }
    }
}
