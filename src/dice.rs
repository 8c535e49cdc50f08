//! Die roller.
//!
//! Same two-step cycle as the wheel: [`DiceRoller::roll`] starts the
//! animation and [`DiceRoller::settle`] draws the face once it ends.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ROLL_DURATION_SECS;
use crate::error::Rejected;
use crate::random::RandomSource;

/// Supported dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    D4,
    #[default]
    D6,
    D8,
    D10,
}

impl DieType {
    /// Number of faces.
    pub fn sides(&self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
        }
    }

    /// Get all dice in display order.
    pub fn all() -> &'static [DieType] {
        &[DieType::D4, DieType::D6, DieType::D8, DieType::D10]
    }

    /// Die with the given number of faces, if supported.
    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.sides() == sides)
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Die selection, roll flag and last result.
#[derive(Debug, Clone, Default)]
pub struct DiceRoller {
    die: DieType,
    rolling: bool,
    result: Option<u32>,
}

impl DiceRoller {
    pub fn new(die: DieType) -> Self {
        Self {
            die,
            ..Default::default()
        }
    }

    /// Switch dice. Clears the previous result.
    pub fn select(&mut self, die: DieType) -> Result<(), Rejected> {
        if self.rolling {
            return Err(Rejected::AlreadyRolling);
        }
        self.die = die;
        self.result = None;
        Ok(())
    }

    /// Start rolling. Returns the animation duration in seconds.
    pub fn roll(&mut self) -> Result<f32, Rejected> {
        if self.rolling {
            log::debug!("Rejected roll: already rolling");
            return Err(Rejected::AlreadyRolling);
        }
        self.rolling = true;
        self.result = None;
        log::debug!("Rolling {}", self.die);
        Ok(ROLL_DURATION_SECS)
    }

    /// Land the die on a random face.
    pub fn settle(&mut self, rng: &mut dyn RandomSource) -> Result<u32, Rejected> {
        if !self.rolling {
            return Err(Rejected::NotRolling);
        }
        let value = rng.range_inclusive(1, self.die.sides());
        self.rolling = false;
        self.result = Some(value);
        log::info!("{} landed on {}", self.die, value);
        Ok(value)
    }

    pub fn die(&self) -> DieType {
        self.die
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn result(&self) -> Option<u32> {
        self.result
    }

    /// Instruction line shown beneath the die.
    pub fn status(&self) -> &'static str {
        if self.rolling {
            "ROLLING..."
        } else {
            "CLICK THE DICE TO ROLL"
        }
    }
}
