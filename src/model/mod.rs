//! Data models for the Chaos Wheel.

mod color;
mod item;

pub use color::{PALETTE, SliceColor};
pub use item::{Item, ItemId};
