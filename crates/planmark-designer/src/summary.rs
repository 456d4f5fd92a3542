//! Symbol frequency summary.

use serde::{Deserialize, Serialize};

use crate::model::{ItemKind, PlacedItem};

/// Count of placed symbols sharing a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCount {
    pub label: String,
    pub count: usize,
}

impl SymbolCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts symbol items by label, most frequent first.
///
/// Annotations are ignored. Ties keep first-seen order.
pub fn summarize(items: &[PlacedItem]) -> Vec<SymbolCount> {
    let mut counts: Vec<SymbolCount> = Vec::new();
    for item in items {
        let ItemKind::Symbol { symbol_ref } = &item.kind else {
            continue;
        };
        match counts.iter_mut().find(|c| c.label == symbol_ref.label) {
            Some(entry) => entry.count += 1,
            None => counts.push(SymbolCount::new(symbol_ref.label.clone(), 1)),
        }
    }
    // sort_by is stable, which keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Total number of symbol items.
pub fn symbol_total(items: &[PlacedItem]) -> usize {
    items.iter().filter(|item| item.is_symbol()).count()
}
