//! Global constants for the Chaos Kit tools

/// Maximum number of options the wheel will hold
pub const MAX_ITEMS: usize = 10;

/// Minimum number of options required before the wheel can spin
pub const MIN_SPIN_ITEMS: usize = 2;

/// Maximum length of an option label, in characters
pub const MAX_LABEL_LEN: usize = 20;

/// Characters stripped from user input before it becomes a label
pub const BLOCKED_CHARS: [char; 5] = ['<', '>', '{', '}', ';'];

/// Degrees in one full turn of the wheel
pub const FULL_TURN: f64 = 360.0;

/// Rotation every spin covers before the random remainder (five full turns)
pub const MIN_SPIN_DEGREES: f64 = 5.0 * FULL_TURN;

/// Duration of the wheel animation in seconds
pub const SPIN_DURATION_SECS: f32 = 4.0;

/// Duration of the dice roll animation in seconds
pub const ROLL_DURATION_SECS: f32 = 1.0;

/// Duration of the magic ball shake in seconds
pub const SHAKE_DURATION_SECS: f32 = 1.5;

/// Largest accepted animation speed multiplier
pub const MAX_ANIMATION_SPEED: f32 = 10.0;

/// Options a fresh wheel starts with
pub const DEFAULT_ITEMS: [&str; 2] = ["Yes", "No"];
