//! Step trace log
//!
//! The trace is the ordered, human-readable record of every applied step.
//! Each [`StepRecord`] also keeps the state the step produced so a viewer can
//! scrub through it without replaying the algorithm.

/// One applied step
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord<S> {
    pub message: String,
    pub state_after: S,
}

/// Append-only (except for undo truncation) list of step records
#[derive(Debug, Clone)]
pub struct TraceLog<S> {
    records: Vec<StepRecord<S>>,
}

impl<S> TraceLog<S> {
    pub fn new() -> Self {
        TraceLog {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, message: String, state_after: S) {
        self.records.push(StepRecord {
            message,
            state_after,
        });
    }

    /// Drop every record past `len`
    pub fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StepRecord<S>] {
        &self.records
    }

    pub fn last(&self) -> Option<&StepRecord<S>> {
        self.records.last()
    }

    /// Messages in execution order
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.message.as_str())
    }

    /// Render the log as numbered lines, one per step, for copying out
    pub fn export(&self) -> String {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| format!("Step {}: {}", i + 1, r.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<S> Default for TraceLog<S> {
    fn default() -> Self {
        Self::new()
    }
}
