//! Error handling for PlanMark
//!
//! Provides the error types shared by every crate in the workspace:
//! - Designer errors (advisory, locally recoverable placement failures)
//! - A unified `Error` for file, serialization and configuration failures
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Designer error type
///
/// Every variant is advisory: the operation that produced it made no change
/// to the placed items or the undo history, and the session stays usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignerError {
    /// The canvas surface is not mounted or has no measurable area
    #[error("Canvas surface is not available")]
    NoSurface,

    /// Placement was attempted before a background was set
    #[error("Upload a background image or PDF before placing items")]
    MissingBackground,

    /// Annotation placement with a blank draft
    #[error("Annotation text must not be empty")]
    EmptyAnnotation,

    /// Symbol placement with no symbol selected
    #[error("Select a symbol before placing it")]
    NoSymbolSelected,

    /// The background upload collaborator failed
    #[error("Background upload failed: {reason}")]
    UploadFailed {
        /// The reason reported by the uploader.
        reason: String,
    },

    /// Export was requested without anything to export
    #[error("Nothing to export: {reason}")]
    ExportPreconditionFailed {
        /// Which precondition was not met.
        reason: String,
    },

    /// The referenced item is not on the canvas
    #[error("Item {id} is not on the canvas")]
    UnknownItem {
        /// The missing item id.
        id: String,
    },

    /// The referenced symbol is not in the active catalog
    #[error("Symbol {id} is not in the active catalog")]
    UnknownSymbol {
        /// The missing symbol id.
        id: String,
    },
}

impl DesignerError {
    /// Check if this error was caused by an incomplete user draft
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            DesignerError::MissingBackground
                | DesignerError::EmptyAnnotation
                | DesignerError::NoSymbolSelected
        )
    }

    /// Check if this error came from an external collaborator
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            DesignerError::UploadFailed { .. } | DesignerError::ExportPreconditionFailed { .. }
        )
    }
}

/// Main error type for PlanMark
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Designer error
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a designer error
    pub fn is_designer_error(&self) -> bool {
        matches!(self, Error::Designer(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for designer operations
pub type DesignerResult<T> = std::result::Result<T, DesignerError>;
