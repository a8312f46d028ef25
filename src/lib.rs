//! # Introduction
//!
//! dsa-lab walks through classic algorithms and data structures one state at
//! a time. Every lesson is a pure transition function driven by a generic
//! stepper that records a snapshot before each step, so any run can be
//! stepped forward, undone, auto-played and exported as a numbered log.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Algorithm::init → Stepper ⇄ History/TraceLog → StateView → TUI
//! ```
//!
//! 1. [`algorithms`]: one transition function per lesson, plus input
//!    construction (manual parsing and random generation).
//! 2. [`engine`]: the [`engine::Stepper`] with undo history, the trace log,
//!    the two-phase animation protocol and the [`engine::AutoRun`] handle.
//! 3. [`lab`]: builds a boxed [`engine::Simulation`] for a lab kind from
//!    configuration and user input.
//! 4. [`config`]: TOML configuration for intervals and capacities.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Lessons
//!
//! Sorting: bubble sort, selection sort. Searching: linear, binary.
//! Stacks: bracket validation, infix to postfix, stack operations.
//! Queues: linear and circular. Trees: breadth-first and depth-limited search.

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod lab;
pub mod ui;
