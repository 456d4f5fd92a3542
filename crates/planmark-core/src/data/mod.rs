//! Reference data shared across PlanMark crates.

pub mod symbols;

pub use symbols::{init_standard_catalog, search, Classification, Symbol, SymbolCatalog, SymbolId};
