//! Game loop driver.
//!
//! Single-threaded fixed-cadence loop: sample input, advance the simulation,
//! fetch the frame snapshot, paint, sleep. Nothing here is concurrent and no
//! tick is cancellable once started; quit takes effect at the top of the next
//! iteration.

pub mod driver;

pub use harvester_types as types;

pub use driver::{GameLoop, LoopState};
