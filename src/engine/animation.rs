//! Motions and tweens for the two-phase step protocol
//!
//! A transition may describe the visual change it causes as a [`Motion`].
//! The stepper holds that motion as "in flight" until the presentation layer
//! calls `settle()`, and a [`Tween`] tracks how far along the visual
//! interpolation is.

use std::time::{Duration, Instant};

/// Visual change produced by a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Motion {
    /// Two cells exchange positions
    Swap { from: usize, to: usize },
    /// A value slides onto a stack
    Push(String),
    /// A value leaves a stack
    Pop(String),
    /// A value enters a queue slot
    Enqueue { slot: usize },
    /// A value leaves a queue slot
    Dequeue { slot: usize },
    /// A graph node is highlighted as visited
    Visit(usize),
}

impl Motion {
    /// Cell indices the motion touches, for highlighting
    pub fn cells(&self) -> Vec<usize> {
        match self {
            Motion::Swap { from, to } => vec![*from, *to],
            Motion::Enqueue { slot } | Motion::Dequeue { slot } => vec![*slot],
            Motion::Visit(node) => vec![*node],
            Motion::Push(_) | Motion::Pop(_) => Vec::new(),
        }
    }
}

/// Time-bounded interpolation of a single motion
#[derive(Debug, Clone)]
pub struct Tween {
    pub motion: Motion,
    started: Instant,
    duration: Duration,
}

impl Tween {
    pub fn new(motion: Motion, started: Instant, duration: Duration) -> Self {
        Tween {
            motion,
            started,
            duration,
        }
    }

    /// Fraction of the tween completed at `now`, clamped to `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
