//! Chaos Kit - casual decision randomizers
//!
//! State logic for a spinning-wheel chooser, a die roller and a magic ball
//! oracle. Rendering is left to a front-end, which drives each tool through
//! a start call (`spin`, `roll`, `shake`) and a completion call once its
//! animation ends.

pub mod config;
pub mod constants;
pub mod dice;
pub mod error;
pub mod message;
pub mod model;
pub mod oracle;
pub mod random;
pub mod registry;
pub mod sanitizer;
pub mod spin;
pub mod wheel;

mod app;


pub use app::{ChaosApp, Flow};
pub use config::AppConfig;
pub use error::Rejected;
pub use registry::{ItemRegistry, assign_colors};
pub use sanitizer::sanitize;
pub use spin::{SpinEngine, SpinOutcome, SpinResult};
pub use wheel::ChaosWheel;
