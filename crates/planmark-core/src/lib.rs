//! # PlanMark Core
//!
//! Core types and utilities for PlanMark.
//! Provides the error types used by every crate and the read-only symbol
//! catalog that drawings place symbols from.

pub mod data;
pub mod error;

pub use data::{search, Classification, Symbol, SymbolCatalog, SymbolId};

pub use error::{DesignerError, DesignerResult, Error, Result};
