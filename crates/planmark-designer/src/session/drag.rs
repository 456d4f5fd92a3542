//! Dragging placed items.
//!
//! A drag records exactly one undo entry, when it starts. Intermediate
//! moves replace the live items without touching history. Releasing the
//! pointer anywhere drops the item at its last valid position; a drop that
//! leaves every item where it was takes the entry back.

use planmark_core::{DesignerError, DesignerResult};

use super::{DesignerSession, DragState};
use crate::item_store;
use crate::model::ItemId;
use crate::viewport::{CanvasPoint, ScreenPoint, SurfaceRect};

impl DesignerSession {
    /// Starts dragging an item, recording the pre-drag state for undo.
    pub fn begin_drag(&mut self, id: &ItemId) -> DesignerResult<()> {
        if !item_store::contains(self.items(), id) {
            return Err(DesignerError::UnknownItem { id: id.to_string() });
        }
        if matches!(&self.drag, DragState::Dragging { item_id, .. } if item_id == id) {
            return Ok(());
        }
        self.end_drag();

        let preceding = self.items().to_vec();
        self.history.record_before_change();
        self.selected_item = Some(id.clone());
        self.drag = DragState::Dragging {
            item_id: id.clone(),
            preceding,
        };
        tracing::debug!("Drag started for item {}", id);
        Ok(())
    }

    /// Moves the dragged item to the pointer position.
    ///
    /// A pressed item starts dragging on its first move. Without a press or
    /// drag this is a no-op. A missing surface leaves the item where it was.
    pub fn drag_to(&mut self, surface: Option<&SurfaceRect>, pointer: ScreenPoint) -> DesignerResult<()> {
        if self.drag == DragState::Idle {
            return Ok(());
        }
        let point = self.mapper.map(surface, pointer, self.snap_to_grid)?;
        self.drag_to_point(point)
    }

    /// Moves the dragged item to a canvas position.
    pub fn drag_to_point(&mut self, point: CanvasPoint) -> DesignerResult<()> {
        let (item_id, armed) = match &self.drag {
            DragState::Idle => return Ok(()),
            DragState::Armed { item_id } => (item_id.clone(), true),
            DragState::Dragging { item_id, .. } => (item_id.clone(), false),
        };
        if armed {
            self.begin_drag(&item_id)?;
        }

        let point = self.normalize(point);
        let next = item_store::move_item(self.items(), &item_id, point.x, point.y);
        self.history.replace_current(next);
        self.touch();
        Ok(())
    }

    /// Ends a press or drag. Returns the id of the item that was dragged.
    ///
    /// A drag dropped where it started is not an edit: its undo entry is
    /// retracted.
    pub fn end_drag(&mut self) -> Option<ItemId> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { item_id, preceding } => {
                let moved = preceding.as_slice() != self.items();
                if !moved && self.history.retract_unchanged() {
                    tracing::debug!("Drag of item {} left it in place, undo entry dropped", item_id);
                } else {
                    tracing::debug!("Drag ended for item {}", item_id);
                }
                Some(item_id)
            }
            DragState::Armed { .. } | DragState::Idle => None,
        }
    }

    /// Pointer release. Ends any press or drag like
    /// [`end_drag`](Self::end_drag), and arms suppression of the click the
    /// host delivers right after a release.
    pub fn pointer_up(&mut self) -> Option<ItemId> {
        let pressed = std::mem::take(&mut self.pressed);
        self.swallow_click = pressed || self.drag != DragState::Idle;
        self.end_drag()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}
