//! Simulation boundary.
//!
//! The game simulation proper lives outside this workspace. This crate holds
//! the seam the front end drives it through: construct with the detected
//! terminal dimensions, advance once per tick, fetch an owned render snapshot.
//!
//! [`demo::DemoScene`] is a built-in stand-in so the binary runs with nothing
//! external linked.

pub mod demo;

pub use harvester_types as types;

pub use demo::DemoScene;

use crate::types::{GlyphGrid, Intents};

/// Contract between the front end and the simulation it presents.
///
/// The driver calls [`advance`](Simulation::advance) exactly once per tick
/// with the fixed timestep and that tick's intent flags, then
/// [`current_frame`](Simulation::current_frame) for the render data.
pub trait Simulation {
    /// Advance the simulation by `dt` seconds under the given held intents.
    fn advance(&mut self, dt: f32, intents: Intents);

    /// Owned snapshot of the current frame.
    ///
    /// Returned by value each tick; callers must not hold it past the tick.
    /// An empty grid is valid and means "render the blank backdrop".
    fn current_frame(&self) -> GlyphGrid;
}
