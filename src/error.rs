//! Rejection reasons for Chaos Kit operations.
//!
//! No operation in this crate is fatal. A rejected call leaves all state
//! untouched and reports why through [`Rejected`].

use thiserror::Error;

use crate::model::ItemId;

/// Reasons an operation was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The wheel already holds the maximum number of options
    #[error("Wheel is full ({max} options)")]
    CapacityExceeded {
        /// The capacity that was hit
        max: usize,
    },

    /// Sanitizing the input left nothing to use as a label
    #[error("Label is empty after sanitizing")]
    EmptyLabel,

    /// Not enough options to spin
    #[error("Need at least {required} options to spin, have {available}")]
    InsufficientItems {
        /// Minimum number of options required
        required: usize,
        /// Number of options on the wheel
        available: usize,
    },

    /// A spin is in progress
    #[error("Wheel is already spinning")]
    AlreadySpinning,

    /// Completion was signalled with no spin in progress
    #[error("Wheel is not spinning")]
    NotSpinning,

    /// No option with the given id exists
    #[error("No option with id {0}")]
    UnknownItem(ItemId),

    /// A die roll is in progress
    #[error("Die is already rolling")]
    AlreadyRolling,

    /// Settle was signalled with no roll in progress
    #[error("Die is not rolling")]
    NotRolling,

    /// The magic ball is being shaken
    #[error("Magic ball is already shaking")]
    AlreadyShaking,

    /// Reveal was signalled with no shake in progress
    #[error("Magic ball is not shaking")]
    NotShaking,
}

impl Rejected {
    /// Stable reason code for this rejection.
    pub fn code(&self) -> &'static str {
        match self {
            Rejected::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Rejected::EmptyLabel => "EMPTY_LABEL",
            Rejected::InsufficientItems { .. } => "INSUFFICIENT_ITEMS",
            Rejected::AlreadySpinning => "ALREADY_SPINNING",
            Rejected::NotSpinning => "NOT_SPINNING",
            Rejected::UnknownItem(_) => "UNKNOWN_ITEM",
            Rejected::AlreadyRolling => "ALREADY_ROLLING",
            Rejected::NotRolling => "NOT_ROLLING",
            Rejected::AlreadyShaking => "ALREADY_SHAKING",
            Rejected::NotShaking => "NOT_SHAKING",
        }
    }
}
