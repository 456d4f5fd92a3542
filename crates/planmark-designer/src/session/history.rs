//! Undo/redo for the designer session.

use super::DesignerSession;

impl DesignerSession {
    /// Undo last change. Ends any active drag first.
    pub fn undo(&mut self) -> bool {
        self.end_drag();
        let undone = self.history.undo();
        if undone {
            self.revalidate_selection();
            self.touch();
            tracing::debug!("Undo ({} left)", self.history.undo_depth());
        }
        undone
    }

    /// Redo last undone change. Ends any active drag first.
    pub fn redo(&mut self) -> bool {
        self.end_drag();
        let redone = self.history.redo();
        if redone {
            self.revalidate_selection();
            self.touch();
            tracing::debug!("Redo ({} left)", self.history.redo_depth());
        }
        redone
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Maximum depth of each history stack.
    pub fn history_limit(&self) -> usize {
        self.history.max_depth()
    }

    /// Clear history stacks
    pub fn clear_history(&mut self) {
        self.history.clear_history();
    }
}
