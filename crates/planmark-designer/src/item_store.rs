//! Placed item store operations.
//!
//! Every operation returns a new ordered collection and leaves its input
//! untouched, so earlier snapshots held by the history stay valid.
//! Insertion order doubles as drawing order.

use crate::model::{ItemId, PlacedItem};
use crate::viewport::CanvasPoint;

/// Appends an item.
pub fn place(items: &[PlacedItem], item: PlacedItem) -> Vec<PlacedItem> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Replaces the position of the item with `id`.
///
/// Returns the input unchanged if no item matches.
pub fn move_item(items: &[PlacedItem], id: &ItemId, x: f64, y: f64) -> Vec<PlacedItem> {
    items
        .iter()
        .map(|item| {
            if &item.id == id {
                PlacedItem {
                    x,
                    y,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Removes the item with `id`.
pub fn remove(items: &[PlacedItem], id: &ItemId) -> Vec<PlacedItem> {
    items.iter().filter(|item| &item.id != id).cloned().collect()
}

/// Removes every item.
pub fn clear(_items: &[PlacedItem]) -> Vec<PlacedItem> {
    Vec::new()
}

/// Looks up an item by id.
pub fn find<'a>(items: &'a [PlacedItem], id: &ItemId) -> Option<&'a PlacedItem> {
    items.iter().find(|item| &item.id == id)
}

/// Returns true if an item with `id` is present.
pub fn contains(items: &[PlacedItem], id: &ItemId) -> bool {
    find(items, id).is_some()
}

/// Finds the top-most item within `radius` percent of `point`.
///
/// Later items are drawn above earlier ones, so the search runs backwards.
pub fn item_at<'a>(
    items: &'a [PlacedItem],
    point: CanvasPoint,
    radius: f64,
) -> Option<&'a PlacedItem> {
    items
        .iter()
        .rev()
        .find(|item| item.position().distance_to(&point) <= radius)
}
