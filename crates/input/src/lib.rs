//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events onto the per-tick control intents and provides
//! the bounded-wait sampler the game loop polls once per tick. Intents are
//! edge-triggered: whatever was held last tick is gone unless the key arrives
//! again this tick.

pub mod map;
pub mod sampler;

pub use harvester_types as types;

pub use map::{map_key, should_quit};
pub use sampler::{InputSampler, TickInput};
