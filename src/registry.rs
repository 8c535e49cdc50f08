//! Ordered option list for the Chaos Wheel.
//!
//! The registry owns the options, hands out ids, enforces the capacity
//! limit and keeps slice colors valid. Colors are recomputed over the
//! whole list after every change, because inserting or removing an
//! option changes which slices are neighbours on the ring.

use crate::constants::MAX_ITEMS;
use crate::error::Rejected;
use crate::model::{Item, ItemId, PALETTE};
use crate::sanitizer::sanitize;

/// Assign slice colors so that no two neighbouring slices match.
///
/// Neighbours include the wrap-around pair (last, first). Each option
/// takes the first palette entry not used by its predecessor and, for
/// the last option, not used by the first one either. The result depends
/// only on the list order.
pub fn assign_colors(items: &mut [Item]) {
    let len = items.len();
    for i in 0..len {
        let prev = (i > 0).then(|| items[i - 1].color);
        let first = (i == len - 1 && len > 1).then(|| items[0].color);

        items[i].color = PALETTE
            .iter()
            .copied()
            .find(|c| Some(*c) != prev && Some(*c) != first)
            .unwrap_or(PALETTE[0]);
    }
}

/// The wheel's option list.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a registry holding the given labels.
    /// Labels that are rejected (empty after sanitizing, or past capacity)
    /// are skipped.
    pub fn with_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut registry = Self::new();
        for label in labels {
            if let Err(e) = registry.add(label.as_ref()) {
                log::warn!("Skipping initial option '{}': {}", label.as_ref(), e);
            }
        }
        registry
    }

    /// Sanitize `raw` and append it as a new option.
    pub fn add(&mut self, raw: &str) -> Result<&Item, Rejected> {
        if self.is_full() {
            log::debug!("Rejected add: wheel full");
            return Err(Rejected::CapacityExceeded { max: MAX_ITEMS });
        }

        let label = sanitize(raw);
        if label.is_empty() {
            log::debug!("Rejected add: empty label from {:?}", raw);
            return Err(Rejected::EmptyLabel);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::new(id, &label));
        assign_colors(&mut self.items);
        log::debug!("Added option {} '{}'", id, label);

        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the option with the given id and return it.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, Rejected> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(Rejected::UnknownItem(id))?;

        let removed = self.items.remove(index);
        assign_colors(&mut self.items);
        log::debug!("Removed option {} '{}'", removed.id, removed.label);
        Ok(removed)
    }

    /// Options in slice order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an option by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Labels in slice order.
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|item| item.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another option would exceed capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ITEMS
    }
}
