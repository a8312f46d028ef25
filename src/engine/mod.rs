//! Step-indexed algorithm engine
//!
//! This module provides the generic driver shared by every lab:
//! - [`stepper`]: the [`Algorithm`] trait and the [`Stepper`] that drives it
//! - [`history`]: pre-step snapshots for undo
//! - [`trace`]: the human-readable step log
//! - [`animation`]: motions and tweens for the two-phase step protocol
//! - [`runner`]: the timer-driven [`AutoRun`] handle
//! - [`simulation`]: the object-safe [`Simulation`] facade
//! - [`view`]: the presentation-neutral [`StateView`]
//! - [`errors`]: the [`StepError`] taxonomy
//!
//! # Execution Model
//!
//! A stepper owns one state. Each step snapshots the state onto the history,
//! runs the pure transition function, appends the resulting message to the
//! trace and replaces the state. Undo pops the snapshot and truncates the
//! trace, so the trace and history always have the same length.

pub mod animation;
pub mod errors;
pub mod history;
pub mod runner;
pub mod simulation;
pub mod stepper;
pub mod trace;
pub mod view;

pub use animation::{Motion, Tween};
pub use errors::StepError;
pub use runner::AutoRun;
pub use simulation::Simulation;
pub use stepper::{Algorithm, StepEvent, Stepper, Transition};
pub use view::{Cell, Mark, StateView, ViewLayout};
