//! Spin state machine and winner resolution.
//!
//! The engine owns whether a spin is in progress and how far the wheel has
//! turned in total. It never animates anything itself: [`SpinEngine::spin`]
//! hands the renderer a target angle, and the renderer calls
//! [`SpinEngine::complete_spin`] once its animation reaches that angle.

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_TURN, MIN_SPIN_DEGREES, MIN_SPIN_ITEMS, SPIN_DURATION_SECS};
use crate::error::Rejected;
use crate::model::Item;
use crate::random::RandomSource;

/// Phase of the spin cycle.
#[derive(Debug, Clone, PartialEq)]
enum SpinPhase {
    /// Waiting for a spin.
    Idle,
    /// Animation in flight. Holds the labels as they were when the spin
    /// started so the winner index matches the angle math.
    Spinning {
        target_rotation: f64,
        snapshot: Vec<String>,
    },
}

impl Default for SpinPhase {
    fn default() -> Self {
        SpinPhase::Idle
    }
}

/// What the renderer needs to animate an accepted spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Absolute angle the animation must end on, in degrees
    pub target_rotation_degrees: f64,
    /// Rotation added by this spin, in degrees
    pub total_rotation_degrees: f64,
    /// How long the animation should take
    pub duration_secs: f32,
}

/// A settled spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Index of the winning slice in the spin-start list
    pub winner_index: usize,
    /// Label of the winning slice
    pub winner_label: String,
}

/// Index of the slice under the pointer after turning clockwise by
/// `rotation` degrees.
///
/// The pointer sits at 12 o'clock. Slice `i` spans
/// `[i * slice, (i + 1) * slice)` clockwise from item 0's leading edge.
/// Returns `None` when there are no slices.
pub fn winning_index(rotation: f64, slice_count: usize) -> Option<usize> {
    if slice_count == 0 {
        return None;
    }
    let slice_angle = FULL_TURN / slice_count as f64;
    let normalized = rotation.rem_euclid(FULL_TURN);
    let pointer_angle = (FULL_TURN - normalized).rem_euclid(FULL_TURN);
    let index = (pointer_angle / slice_angle).floor() as usize;
    Some(index.min(slice_count - 1))
}

/// Spin state for one wheel.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    phase: SpinPhase,
    cumulative_rotation: f64,
}

impl SpinEngine {
    /// Create an idle engine at zero rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a spin over `items`.
    pub fn spin(
        &mut self,
        items: &[Item],
        rng: &mut dyn RandomSource,
    ) -> Result<SpinOutcome, Rejected> {
        if self.is_spinning() {
            log::debug!("Rejected spin: already spinning");
            return Err(Rejected::AlreadySpinning);
        }
        if items.len() < MIN_SPIN_ITEMS {
            log::debug!("Rejected spin: only {} options", items.len());
            return Err(Rejected::InsufficientItems {
                required: MIN_SPIN_ITEMS,
                available: items.len(),
            });
        }

        let offset = rng.unit() * FULL_TURN;
        let total_rotation = MIN_SPIN_DEGREES + offset;
        let target_rotation = self.cumulative_rotation + total_rotation;

        self.phase = SpinPhase::Spinning {
            target_rotation,
            snapshot: items.iter().map(|item| item.label.clone()).collect(),
        };
        log::debug!(
            "Spin started: +{:.1}° towards {:.1}°",
            total_rotation,
            target_rotation
        );

        Ok(SpinOutcome {
            target_rotation_degrees: target_rotation,
            total_rotation_degrees: total_rotation,
            duration_secs: SPIN_DURATION_SECS,
        })
    }

    /// Settle the spin once the renderer has reached the target angle.
    pub fn complete_spin(&mut self) -> Result<SpinResult, Rejected> {
        let SpinPhase::Spinning {
            target_rotation,
            snapshot,
        } = std::mem::take(&mut self.phase)
        else {
            log::debug!("Rejected completion: not spinning");
            return Err(Rejected::NotSpinning);
        };

        self.cumulative_rotation = target_rotation;

        // A spin is only accepted with at least two options, so the
        // snapshot is never empty here.
        let winner_index = winning_index(target_rotation, snapshot.len()).unwrap_or(0);
        let winner_label = snapshot.into_iter().nth(winner_index).unwrap_or_default();
        log::info!("Wheel settled on '{}' (slice {})", winner_label, winner_index);

        Ok(SpinResult {
            winner_index,
            winner_label,
        })
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Total degrees turned by all settled spins.
    pub fn cumulative_rotation(&self) -> f64 {
        self.cumulative_rotation
    }

    /// Target angle of the spin in flight, if any.
    pub fn target_rotation(&self) -> Option<f64> {
        match &self.phase {
            SpinPhase::Spinning {
                target_rotation, ..
            } => Some(*target_rotation),
            SpinPhase::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSource, Roller};

    fn items(labels: &[&str]) -> Vec<Item> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| Item::new(i as u64, l))
            .collect()
    }

    #[test]
    fn test_winning_index_four_slices_no_offset() {
        assert_eq!(winning_index(1800.0, 4), Some(0));
    }

    #[test]
    fn test_winning_index_two_slices_quarter_offset() {
        // normalized 90, pointer 270, slice 180
        assert_eq!(winning_index(1890.0, 2), Some(1));
    }

    #[test]
    fn test_winning_index_boundaries() {
        // Rotating clockwise by 10° puts the tail of the last slice under the pointer
        assert_eq!(winning_index(10.0, 4), Some(3));
        // Exactly one slice back lands on the start of slice 3
        assert_eq!(winning_index(90.0, 4), Some(3));
        assert_eq!(winning_index(90.5, 4), Some(2));
        assert_eq!(winning_index(359.999_999, 3), Some(0));
        assert_eq!(winning_index(0.0, 0), None);
    }

    #[test]
    fn test_spin_requires_two_items() {
        let mut engine = SpinEngine::new();
        let mut rng = FixedSource::new(&[0.5]);
        assert_eq!(
            engine.spin(&items(&["solo"]), &mut rng),
            Err(Rejected::InsufficientItems {
                required: 2,
                available: 1
            })
        );
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_spin_rejected_while_spinning() {
        let mut engine = SpinEngine::new();
        let mut rng = FixedSource::new(&[0.25]);
        let list = items(&["a", "b"]);
        engine.spin(&list, &mut rng).unwrap();

        assert_eq!(engine.spin(&list, &mut rng), Err(Rejected::AlreadySpinning));
        assert_eq!(engine.cumulative_rotation(), 0.0);
        assert_eq!(engine.target_rotation(), Some(1890.0));
    }

    #[test]
    fn test_spin_outcome() {
        let mut engine = SpinEngine::new();
        let mut rng = FixedSource::new(&[0.0]);
        let outcome = engine.spin(&items(&["a", "b", "c", "d"]), &mut rng).unwrap();
        assert_eq!(outcome.target_rotation_degrees, 1800.0);
        assert_eq!(outcome.total_rotation_degrees, 1800.0);
        assert_eq!(outcome.duration_secs, SPIN_DURATION_SECS);

        let result = engine.complete_spin().unwrap();
        assert_eq!(result.winner_index, 0);
        assert_eq!(result.winner_label, "a");
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_complete_without_spin() {
        let mut engine = SpinEngine::new();
        assert_eq!(engine.complete_spin(), Err(Rejected::NotSpinning));
    }

    #[test]
    fn test_rotation_is_cumulative() {
        let mut engine = SpinEngine::new();
        let mut rng = FixedSource::new(&[0.25, 0.0]);
        let list = items(&["a", "b"]);

        engine.spin(&list, &mut rng).unwrap();
        let result = engine.complete_spin().unwrap();
        assert_eq!(result.winner_label, "b");
        let after_first = engine.cumulative_rotation();
        assert_eq!(after_first, 1890.0);

        let outcome = engine.spin(&list, &mut rng).unwrap();
        assert_eq!(outcome.target_rotation_degrees, 3690.0);
        engine.complete_spin().unwrap();
        assert!(engine.cumulative_rotation() > after_first);
    }

    #[test]
    fn test_winner_uses_spin_start_snapshot() {
        let mut engine = SpinEngine::new();
        let mut rng = FixedSource::new(&[0.25]);
        let mut list = items(&["a", "b"]);
        engine.spin(&list, &mut rng).unwrap();

        list.remove(1);
        list.push(Item::new(9, "late"));

        let result = engine.complete_spin().unwrap();
        assert_eq!(result.winner_label, "b");
    }

    #[test]
    fn test_random_spins_stay_in_range() {
        let mut engine = SpinEngine::new();
        let mut rng = Roller::from_seed(3);
        let list = items(&["a", "b", "c"]);
        let mut last = 0.0;
        for _ in 0..50 {
            let outcome = engine.spin(&list, &mut rng).unwrap();
            assert!(outcome.total_rotation_degrees >= MIN_SPIN_DEGREES);
            assert!(outcome.total_rotation_degrees < MIN_SPIN_DEGREES + FULL_TURN);
            let result = engine.complete_spin().unwrap();
            assert!(result.winner_index < list.len());
            assert!(engine.cumulative_rotation() > last);
            last = engine.cumulative_rotation();
        }
    }
}
