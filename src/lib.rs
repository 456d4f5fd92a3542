//! # PlanMark
//!
//! Symbol and annotation markup for building and site plans:
//! - Classified symbol libraries (low voltage, fire alarm, security, electrical, data)
//! - Click-to-place symbols and free-text annotations over a PDF or image background
//! - Drag to reposition, snap-to-grid, bounded undo/redo
//! - Symbol frequency summary and a persisted layout record
//!
//! ## Architecture
//!
//! PlanMark is organized as a workspace with multiple crates:
//!
//! 1. **planmark-core** - Error types, classifications, symbol catalog and search
//! 2. **planmark-settings** - Configuration file handling and validation
//! 3. **planmark-designer** - Coordinate mapping, placed items, history, session, layout I/O
//! 4. **planmark** - Main binary and logging setup

pub use planmark_core::data;
pub use planmark_designer as designer;

pub use planmark_core::{
    search, Classification, DesignerError, DesignerResult, Error, Result, Symbol, SymbolCatalog,
    SymbolId,
};

pub use planmark_designer::{
    summarize, Background, BackgroundKind, BackgroundUploader, CanvasExporter, CanvasPoint,
    ContentSize, CoordinateMapper, DesignerSession, ExportFormat, HistoryManager, ItemId, ItemKind,
    Layout, PlacedItem, PlacementMode, ScreenPoint, SurfaceRect, SymbolCount, SymbolRef,
};

pub use planmark_settings::{Config, DesignerSettings, ExportSettings, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("PLANMARK_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, defaulting to `info`
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(&LoggingSettings::default())
}

/// Initialize logging from the logging section of the configuration
///
/// `RUST_LOG` takes precedence over `settings.level`. Output goes to stderr
/// so that command output on stdout stays clean. Fails if a global
/// subscriber is already installed.
pub fn init_logging_with(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid log level '{}'", settings.level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()
    };

    installed.context("Failed to install log subscriber")
}
