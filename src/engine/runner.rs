//! Timer-driven auto-run
//!
//! [`AutoRun`] is the cancellable handle returned when a simulation starts
//! playing. It owns no thread: the event loop calls [`AutoRun::tick`] on every
//! iteration and the handle decides whether a step is due.
//!
//! # Back-pressure
//!
//! A tick never steps while the simulation still has a motion in flight, so a
//! slow animation delays the next step instead of overlapping with it.

use super::errors::StepError;
use super::simulation::Simulation;
use super::stepper::StepEvent;
use super::view::StateView;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AutoRun {
    interval: Duration,
    last_step: Option<Instant>,
    active: bool,
}

impl AutoRun {
    /// Start playing; the first tick steps immediately
    pub fn start(interval: Duration) -> Self {
        debug!(interval_ms = interval.as_millis() as u64, "auto-run started");
        AutoRun {
            interval,
            last_step: None,
            active: true,
        }
    }

    /// An idle handle that never steps until resumed
    pub fn idle(interval: Duration) -> Self {
        AutoRun {
            interval,
            last_step: None,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop scheduling steps. A motion already in flight is left to finish.
    pub fn cancel(&mut self) {
        if self.active {
            debug!("auto-run cancelled");
        }
        self.active = false;
    }

    /// Resume playing; the next tick steps immediately
    pub fn resume(&mut self) {
        self.active = true;
        self.last_step = None;
    }

    /// Step `sim` if a step is due at `now`
    ///
    /// Returns `None` when nothing happened. The handle cancels itself once
    /// the simulation is terminal or a step fails.
    pub fn tick(
        &mut self,
        sim: &mut dyn Simulation,
        now: Instant,
    ) -> Option<Result<StepEvent<StateView>, StepError>> {
        if !self.active || sim.in_flight().is_some() {
            return None;
        }
        if sim.is_terminal() {
            self.cancel();
            return None;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }

        self.last_step = Some(now);
        let result = sim.step();
        match &result {
            Ok(event) if event.terminal => {
                info!(simulation = sim.name(), steps = sim.steps_taken(), "run complete");
                self.cancel();
            }
            Ok(_) => {}
            Err(_) => self.cancel(),
        }
        Some(result)
    }
}
