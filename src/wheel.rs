//! The Chaos Wheel: option list, spin state and last winner in one place.
//!
//! All mutation is refused while a spin is in flight. The engine snapshots
//! the options at spin start regardless, so the winner always matches the
//! list the angle was computed against.

use crate::config::WheelConfig;
use crate::constants::{DEFAULT_ITEMS, MIN_SPIN_ITEMS};
use crate::error::Rejected;
use crate::model::{Item, ItemId};
use crate::random::RandomSource;
use crate::registry::ItemRegistry;
use crate::spin::{SpinEngine, SpinOutcome, SpinResult};

/// Full wheel state as seen by a renderer.
#[derive(Debug, Clone)]
pub struct ChaosWheel {
    registry: ItemRegistry,
    engine: SpinEngine,
    winner: Option<String>,
}

impl Default for ChaosWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChaosWheel {
    /// A wheel with the default "Yes" / "No" options.
    pub fn new() -> Self {
        Self::with_labels(&DEFAULT_ITEMS)
    }

    /// A wheel with the given starting options.
    pub fn with_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            registry: ItemRegistry::with_labels(labels),
            engine: SpinEngine::new(),
            winner: None,
        }
    }

    pub fn from_config(config: &WheelConfig) -> Self {
        Self::with_labels(config.initial_items.as_slice())
    }

    /// Add an option from raw user text.
    pub fn add(&mut self, text: &str) -> Result<&Item, Rejected> {
        self.ensure_idle()?;
        let item = self.registry.add(text)?;
        self.winner = None;
        Ok(item)
    }

    /// Delete an option.
    pub fn remove(&mut self, id: ItemId) -> Result<Item, Rejected> {
        self.ensure_idle()?;
        let item = self.registry.remove(id)?;
        self.winner = None;
        Ok(item)
    }

    /// Start a spin. The caller animates to the returned target and then
    /// calls [`ChaosWheel::complete_spin`].
    pub fn spin(&mut self, rng: &mut dyn RandomSource) -> Result<SpinOutcome, Rejected> {
        let outcome = self.engine.spin(self.registry.items(), rng)?;
        self.winner = None;
        Ok(outcome)
    }

    /// Settle the current spin and record the winner.
    pub fn complete_spin(&mut self) -> Result<SpinResult, Rejected> {
        let result = self.engine.complete_spin()?;
        self.winner = Some(result.winner_label.clone());
        Ok(result)
    }

    pub fn items(&self) -> &[Item] {
        self.registry.items()
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    /// Degrees turned so far; the renderer's resting angle.
    pub fn cumulative_rotation(&self) -> f64 {
        self.engine.cumulative_rotation()
    }

    /// Label of the last settled spin, cleared by any change.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Instruction line shown beneath the wheel.
    pub fn status(&self) -> &'static str {
        if self.is_spinning() {
            "SPINNING..."
        } else if self.registry.len() < MIN_SPIN_ITEMS {
            "ADD AT LEAST 2 OPTIONS"
        } else {
            "CLICK THE WHEEL TO SPIN"
        }
    }

    fn ensure_idle(&self) -> Result<(), Rejected> {
        if self.is_spinning() {
            log::debug!("Rejected edit: wheel is spinning");
            return Err(Rejected::AlreadySpinning);
        }
        Ok(())
    }
}
