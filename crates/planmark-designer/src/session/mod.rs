//! Designer session: the placement, drag and undo workflow.
//!
//! This module is split into submodules:
//! - `placement`: click-to-place, selection, removal
//! - `drag`: pointer drag of placed items
//! - `history`: undo/redo
//! - `file_io`: layout records
//! - `collaborators`: background upload and export

mod collaborators;
mod drag;
mod file_io;
mod history;
mod placement;

use chrono::{DateTime, Utc};
use planmark_core::{search, Classification, DesignerError, DesignerResult, Symbol, SymbolCatalog, SymbolId};
use planmark_settings::Config;

use crate::export::PageSize;
use crate::history::{HistoryManager, DEFAULT_HISTORY_LIMIT};
use crate::model::{ItemId, PlacedItem};
use crate::serialization::Background;
use crate::summary::{summarize, SymbolCount};
use crate::viewport::CoordinateMapper;

/// Pick radius for hit testing, in percent of the canvas.
pub const DEFAULT_HIT_RADIUS: f64 = 2.0;

/// What a canvas click places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    #[default]
    Symbol,
    Annotation,
}

/// Pointer interaction state.
///
/// `Armed` is a press on an item that has not moved yet; it only selects.
/// The first move turns it into `Dragging`, which records one undo entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Armed {
        item_id: ItemId,
    },
    Dragging {
        item_id: ItemId,
        /// Items as they were before the drag began. A drop that leaves the
        /// items equal to this retracts the undo entry the drag recorded.
        preceding: Vec<PlacedItem>,
    },
}

/// Result of a pointer press or click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A new item was placed.
    Placed(ItemId),
    /// An existing item was pressed and selected.
    Selected(ItemId),
    /// The click belongs to a press, drag or release already handled by
    /// the pointer workflow and was ignored.
    Suppressed,
}

/// Designer session state.
#[derive(Debug, Clone)]
pub struct DesignerSession {
    classification: Classification,
    catalog: SymbolCatalog,
    background: Option<Background>,
    history: HistoryManager<Vec<PlacedItem>>,
    mapper: CoordinateMapper,
    snap_to_grid: bool,
    mode: PlacementMode,
    selected_symbol: Option<Symbol>,
    annotation_draft: String,
    selected_item: Option<ItemId>,
    drag: DragState,
    /// A `pointer_down` started the current pointer interaction.
    pressed: bool,
    /// The next `click` closes an interaction `pointer_up` already handled.
    swallow_click: bool,
    hit_radius: f64,
    page: PageSize,
    is_modified: bool,
    updated_at: DateTime<Utc>,
}

impl DesignerSession {
    /// Creates a session with default settings and the standard catalog.
    pub fn new(classification: Classification) -> Self {
        Self {
            classification,
            catalog: SymbolCatalog::standard(),
            background: None,
            history: HistoryManager::with_depth(Vec::new(), DEFAULT_HISTORY_LIMIT),
            mapper: CoordinateMapper::default(),
            snap_to_grid: false,
            mode: PlacementMode::Symbol,
            selected_symbol: None,
            annotation_draft: String::new(),
            selected_item: None,
            drag: DragState::Idle,
            pressed: false,
            swallow_click: false,
            hit_radius: DEFAULT_HIT_RADIUS,
            page: PageSize::default(),
            is_modified: false,
            updated_at: Utc::now(),
        }
    }

    /// Creates a session from application configuration.
    pub fn with_config(config: &Config) -> Self {
        let designer = &config.designer;
        let mut session = Self::new(designer.default_classification);
        session.history = HistoryManager::with_depth(Vec::new(), designer.history_limit);
        session.mapper = CoordinateMapper::new(designer.grid_step);
        session.snap_to_grid = designer.snap_to_grid;
        session.page = PageSize::from(&config.export);
        session
    }

    /// Replaces the symbol catalog.
    pub fn with_catalog(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = catalog;
        self.revalidate_selected_symbol();
        self
    }

    /// Items currently on the canvas, in drawing order.
    pub fn items(&self) -> &[PlacedItem] {
        self.history.current()
    }

    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        crate::item_store::find(self.items(), id)
    }

    /// Symbol counts for the current items.
    pub fn summary(&self) -> Vec<SymbolCount> {
        summarize(self.items())
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Switches the active catalog partition.
    ///
    /// Placed items keep their copied symbol fields.
    pub fn set_classification(&mut self, classification: Classification) {
        if self.classification != classification {
            self.classification = classification;
            self.revalidate_selected_symbol();
            self.touch();
        }
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// Symbols of the active classification.
    pub fn available_symbols(&self) -> &[Symbol] {
        self.catalog.symbols(self.classification)
    }

    /// Searches the active classification's symbols.
    pub fn search_symbols(&self, query: &str) -> Vec<&Symbol> {
        search(self.available_symbols(), query)
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlacementMode) {
        self.mode = mode;
    }

    /// Selects a catalog symbol for placement and switches to symbol mode.
    pub fn select_symbol(&mut self, id: &SymbolId) -> DesignerResult<()> {
        let symbol = self
            .catalog
            .find(self.classification, id)
            .cloned()
            .ok_or_else(|| DesignerError::UnknownSymbol { id: id.to_string() })?;
        self.selected_symbol = Some(symbol);
        self.mode = PlacementMode::Symbol;
        Ok(())
    }

    pub fn clear_symbol_selection(&mut self) {
        self.selected_symbol = None;
    }

    pub fn selected_symbol(&self) -> Option<&Symbol> {
        self.selected_symbol.as_ref()
    }

    pub fn set_annotation_draft(&mut self, text: impl Into<String>) {
        self.annotation_draft = text.into();
    }

    pub fn annotation_draft(&self) -> &str {
        &self.annotation_draft
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Sets the background. Does not touch placed items or history.
    pub fn set_background(&mut self, background: Background) {
        tracing::info!(
            "Background set to {} ({:?})",
            background.file_name,
            background.file_type
        );
        self.background = Some(background);
        self.touch();
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    /// Toggles grid snapping for subsequent placements and drags.
    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        if self.snap_to_grid != enabled {
            self.snap_to_grid = enabled;
            self.touch();
        }
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    pub fn set_hit_radius(&mut self, radius: f64) {
        if radius.is_finite() && radius >= 0.0 {
            self.hit_radius = radius;
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page
    }

    pub fn selected_item_id(&self) -> Option<&ItemId> {
        self.selected_item.as_ref()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Whether there are unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Forgets any in-flight pointer interaction.
    fn reset_pointer(&mut self) {
        self.drag = DragState::Idle;
        self.pressed = false;
        self.swallow_click = false;
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.updated_at = Utc::now();
    }

    /// Records the current items, then replaces them.
    fn commit_items(&mut self, items: Vec<PlacedItem>) {
        self.history.commit(items);
        self.touch();
    }

    fn revalidate_selected_symbol(&mut self) {
        let still_available = self
            .selected_symbol
            .as_ref()
            .is_some_and(|s| self.catalog.find(self.classification, &s.id).is_some());
        if !still_available {
            self.selected_symbol = None;
        }
    }

    /// Drops the item selection if the item is gone.
    fn revalidate_selection(&mut self) {
        if let Some(id) = &self.selected_item {
            if !crate::item_store::contains(self.items(), id) {
                self.selected_item = None;
            }
        }
    }
}

impl Default for DesignerSession {
    fn default() -> Self {
        Self::new(Classification::default())
    }
}
