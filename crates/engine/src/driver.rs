//! Fixed-cadence loop over the simulation boundary.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use harvester_input::{InputSampler, TickInput};
use harvester_sim::Simulation;
use harvester_term::{TerminalRenderer, Viewport};

use crate::types::{FIXED_DT, TICK};

/// Loop lifecycle. There is no pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Drives a [`Simulation`] at a nominal 60 ticks per second.
pub struct GameLoop<S: Simulation> {
    sim: S,
    sampler: InputSampler,
    viewport: Viewport,
    tick: Duration,
}

impl<S: Simulation> GameLoop<S> {
    pub fn new(sim: S, viewport: Viewport) -> Self {
        Self {
            sim,
            sampler: InputSampler::new(),
            viewport,
            tick: TICK,
        }
    }

    /// Apply one tick's sampled input: quit wins, otherwise the simulation
    /// advances by the fixed delta under that tick's intents.
    ///
    /// Split out from [`run`](GameLoop::run) so the transition is testable
    /// without a terminal.
    pub fn step(&mut self, input: TickInput) -> LoopState {
        if input.quit {
            return LoopState::Terminated;
        }
        self.sim.advance(FIXED_DT, input.intents);
        LoopState::Running
    }

    /// Run until a quit key is sampled.
    ///
    /// The sleep is a fixed tick period, not adaptive: a slow frame stretches
    /// the tick rather than being compensated for.
    pub fn run(&mut self, renderer: &mut TerminalRenderer) -> Result<()> {
        info!(
            "loop started at {}x{}",
            self.viewport.cols, self.viewport.rows
        );

        loop {
            let input = self.sampler.sample();
            if self.step(input) == LoopState::Terminated {
                info!("quit requested");
                return Ok(());
            }

            // owned snapshot, dropped at the end of the tick
            let frame = self.sim.current_frame();
            renderer.draw(&frame, self.viewport)?;

            thread::sleep(self.tick);
        }
    }
}
