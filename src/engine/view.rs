//! Presentation-neutral description of an algorithm state
//!
//! Every algorithm projects its state into a [`StateView`]: a row of cells
//! with highlight marks, named pointers into that row, and a few free-form
//! lines (output, result, warnings). Renderers only ever see this type.

/// How the cells should be arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLayout {
    /// Vertical bars scaled by value (sorting)
    Bars,
    /// A row of boxes with indices (searching, queues)
    Row,
    /// A bottom-up stack; the last cell is the top
    Stack,
    /// Tree nodes listed in index order with their depth
    Tree,
}

/// Highlight applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Normal,
    /// Under comparison or being probed
    Active,
    /// Part of a pending or running swap
    Swapping,
    /// Final position known
    Settled,
    /// The element searched for
    Found,
    /// Ruled out of the search space
    Discarded,
    /// Already visited by a traversal
    Visited,
    /// Waiting in a traversal frontier
    Queued,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub label: String,
    /// Numeric magnitude for bar layouts
    pub value: Option<i64>,
    pub mark: Mark,
    /// Nesting level (tree depth), 0 elsewhere
    pub depth: usize,
}

impl Cell {
    pub fn new(label: impl Into<String>, mark: Mark) -> Self {
        Cell {
            label: label.into(),
            value: None,
            mark,
            depth: 0,
        }
    }

    pub fn number(value: i64, mark: Mark) -> Self {
        Cell {
            label: value.to_string(),
            value: Some(value),
            mark,
            depth: 0,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// Named index into the cell row ("low", "mid", "front", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub name: &'static str,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateView {
    pub title: String,
    pub layout: ViewLayout,
    pub cells: Vec<Cell>,
    pub pointers: Vec<Pointer>,
    /// Extra labelled lines shown under the cells
    pub notes: Vec<(String, String)>,
}

impl StateView {
    pub fn new(title: impl Into<String>, layout: ViewLayout) -> Self {
        StateView {
            title: title.into(),
            layout,
            cells: Vec::new(),
            pointers: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.cells.extend(cells);
        self
    }

    pub fn pointer(mut self, name: &'static str, index: usize) -> Self {
        self.pointers.push(Pointer { name, index });
        self
    }

    pub fn note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.push((key.into(), value.into()));
        self
    }

    /// Pointers aimed at a given cell
    pub fn pointers_at(&self, index: usize) -> impl Iterator<Item = &Pointer> + '_ {
        self.pointers.iter().filter(move |p| p.index == index)
    }

    pub fn note_value(&self, key: &str) -> Option<&str> {
        self.notes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
