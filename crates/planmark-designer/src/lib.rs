//! # PlanMark Designer
//!
//! This crate provides the drawing designer: a 2D surface on which symbols
//! from a catalog and free-text annotations are placed over an uploaded
//! background image or PDF, repositioned by drag, and undone or redone with
//! a bounded history.
//!
//! ## Core Components
//!
//! - **Viewport**: pointer to normalized `[0, 100]` coordinates, grid snap
//! - **Model / Item store**: placed items and pure operations over them
//! - **History**: bounded snapshot undo/redo
//! - **Summary**: symbol frequency table
//! - **Serialization**: the persisted layout record
//! - **Session**: the user-facing placement, drag and undo workflow
//! - **Upload / Export**: seams for the external collaborators
//!
//! ## Architecture
//!
//! ```text
//! pointer event
//!   └── CoordinateMapper (screen -> percent, snap)
//!         └── DesignerSession (place | drag | select)
//!               ├── item_store (new item list)
//!               └── HistoryManager (snapshot before each edit)
//!
//! summarize(items) on demand
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planmark_designer::{Background, CanvasPoint, DesignerSession};
//! use planmark_core::{Classification, SymbolId};
//!
//! let mut session = DesignerSession::new(Classification::Electrical);
//! session.set_background(Background::new("https://files/plan.pdf", "plan.pdf"));
//! session.select_symbol(&SymbolId::from("el-outlet"))?;
//! session.place_at(CanvasPoint::new(10.0, 10.0))?;
//! session.undo();
//! ```

pub mod export;
pub mod history;
pub mod item_store;
pub mod model;
pub mod serialization;
pub mod session;
pub mod summary;
pub mod upload;
pub mod viewport;

pub use export::{
    fit_to_page, CanvasExporter, ContentSize, ExportFormat, ExportRequest, PagePlacement, PageSize,
};
pub use history::{HistoryManager, DEFAULT_HISTORY_LIMIT};
pub use model::{ItemId, ItemKind, PlacedItem, SymbolRef};
pub use serialization::{Background, BackgroundKind, Layout};
pub use session::{DesignerSession, DragState, PlacementMode, PointerOutcome, DEFAULT_HIT_RADIUS};
pub use summary::{summarize, SymbolCount};
pub use upload::{BackgroundUploader, UploadFile, UploadReceipt};
pub use viewport::{CanvasPoint, CoordinateMapper, ScreenPoint, SurfaceRect, DEFAULT_GRID_STEP};
