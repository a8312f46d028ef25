// History snapshots for stepping backward

/// A full copy of the state taken immediately before a step was applied,
/// together with the trace length at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<S> {
    pub state: S,
    pub log_len: usize,
}

/// Undo stack of pre-step snapshots
///
/// Holds exactly one entry per applied step that has not been undone.
#[derive(Debug, Clone)]
pub struct History<S> {
    entries: Vec<HistoryEntry<S>>,
}

impl<S> History<S> {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Record the state as it was before a step
    pub fn push(&mut self, state: S, log_len: usize) {
        self.entries.push(HistoryEntry { state, log_len });
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<HistoryEntry<S>> {
        self.entries.pop()
    }

    /// Get a snapshot by step index (0 = before the first step)
    pub fn get(&self, index: usize) -> Option<&HistoryEntry<S>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}
