//! Harvester terminal front end (workspace facade crate).
//!
//! This package keeps a stable `harvester_tui::{engine,input,sim,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use harvester_engine as engine;
pub use harvester_input as input;
pub use harvester_sim as sim;
pub use harvester_term as term;
pub use harvester_types as types;
