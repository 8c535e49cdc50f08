//! Wheel option data model.

use serde::{Deserialize, Serialize};

use super::SliceColor;

/// Unique identifier for a wheel option.
pub type ItemId = u64;

/// A selectable option on the wheel.
/// Occupies one slice; slices follow list order clockwise from 12 o'clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, never reused
    pub id: ItemId,
    /// Sanitized display text
    pub label: String,
    /// Slice color, recomputed whenever the list changes
    pub color: SliceColor,
}

impl Item {
    /// Create a new option. The color is a placeholder until the
    /// registry runs color assignment over the list.
    pub fn new(id: ItemId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            color: SliceColor::default(),
        }
    }
}
