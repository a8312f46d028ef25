//! Graph traversal over a rooted tree
//!
//! Two searches share one state shape and differ only in their frontier:
//! - [`BreadthFirst`] treats it as a FIFO queue
//! - [`DepthLimited`] treats it as a LIFO stack and refuses to push children
//!   deeper than the limit. Without a limit it is a plain depth-first search.
//!
//! The tree is built once at reset and shared between snapshots through an
//! `Rc`, so undo history only copies the cursors.

use crate::engine::{
    Algorithm, Cell, Mark, Motion, StateView, StepError, Transition, ViewLayout,
};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Node labels, parent→child edges and the search parameters. Node 0 is the
/// root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInput {
    pub labels: Vec<String>,
    pub edges: Vec<(usize, usize)>,
    pub target: String,
    pub depth_limit: Option<usize>,
}

/// Validated tree with precomputed depths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub labels: Vec<String>,
    pub children: Vec<Vec<usize>>,
    pub depth: Vec<usize>,
    by_label: FxHashMap<String, usize>,
}

impl Tree {
    pub fn build(labels: Vec<String>, edges: &[(usize, usize)]) -> Result<Self, StepError> {
        let n = labels.len();
        if n == 0 {
            return Err(StepError::invalid_input("tree needs at least one node"));
        }

        let mut children = vec![Vec::new(); n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        for &(p, c) in edges {
            if p >= n || c >= n {
                return Err(StepError::invalid_input(format!(
                    "edge {} -> {} refers to a missing node",
                    p, c
                )));
            }
            if c == 0 {
                return Err(StepError::invalid_input("the root cannot be a child"));
            }
            if parent[c].replace(p).is_some() {
                return Err(StepError::invalid_input(format!(
                    "node '{}' has more than one parent",
                    labels[c]
                )));
            }
            children[p].push(c);
        }

        let mut depth = vec![usize::MAX; n];
        depth[0] = 0;
        let mut queue = VecDeque::from([0]);
        while let Some(node) = queue.pop_front() {
            for &child in &children[node] {
                depth[child] = depth[node] + 1;
                queue.push_back(child);
            }
        }
        if let Some(orphan) = depth.iter().position(|&d| d == usize::MAX) {
            return Err(StepError::invalid_input(format!(
                "node '{}' is not reachable from the root",
                labels[orphan]
            )));
        }

        let mut by_label = FxHashMap::default();
        for (i, label) in labels.iter().enumerate() {
            by_label.entry(label.clone()).or_insert(i);
        }

        Ok(Tree {
            labels,
            children,
            depth,
            by_label,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// First node carrying `label`
    pub fn find(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    Searching,
    Found { node: usize, depth: usize },
    NotFound,
    /// The target exists, but only below the depth limit
    Cutoff { limit: usize },
}

impl TraversalOutcome {
    pub fn is_done(&self) -> bool {
        !matches!(self, TraversalOutcome::Searching)
    }
}

impl fmt::Display for TraversalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOutcome::Searching => write!(f, "Searching"),
            TraversalOutcome::Found { node, depth } => {
                write!(f, "Found node {} at depth {}", node, depth)
            }
            TraversalOutcome::NotFound => write!(f, "Not found"),
            TraversalOutcome::Cutoff { limit } => write!(f, "Cutoff at depth limit {}", limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    pub tree: Rc<Tree>,
    pub target: String,
    pub depth_limit: Option<usize>,
    pub frontier: VecDeque<usize>,
    pub visit_order: Vec<usize>,
    pub visited: Vec<bool>,
    pub current: Option<usize>,
    pub outcome: TraversalOutcome,
}

impl TraversalState {
    fn new(input: TreeInput) -> Result<Self, StepError> {
        let tree = Tree::build(input.labels, &input.edges)?;
        let n = tree.len();
        Ok(TraversalState {
            tree: Rc::new(tree),
            target: input.target,
            depth_limit: input.depth_limit,
            frontier: VecDeque::from([0]),
            visit_order: Vec::new(),
            visited: vec![false; n],
            current: None,
            outcome: TraversalOutcome::Searching,
        })
    }

    fn label(&self, node: usize) -> &str {
        &self.tree.labels[node]
    }

    /// Mark `node` visited; true if it is the target
    fn visit(&mut self, node: usize) -> bool {
        self.visited[node] = true;
        self.visit_order.push(node);
        self.current = Some(node);
        if self.tree.labels[node] == self.target {
            self.outcome = TraversalOutcome::Found {
                node,
                depth: self.tree.depth[node],
            };
            return true;
        }
        false
    }

    /// Settle the outcome once the frontier runs dry
    fn finish_if_exhausted(&mut self, message: &mut String) {
        if self.outcome.is_done() || !self.frontier.is_empty() {
            return;
        }
        self.current = None;
        let deeper = self.tree.find(&self.target).map(|n| self.tree.depth[n]);
        match (self.depth_limit, deeper) {
            (Some(limit), Some(depth)) if depth > limit => {
                self.outcome = TraversalOutcome::Cutoff { limit };
                message.push_str(&format!(
                    ". Cutoff failure: {} not found within depth limit {}.",
                    self.target, limit
                ));
            }
            _ => {
                self.outcome = TraversalOutcome::NotFound;
                message.push_str(&format!(". {} not found.", self.target));
            }
        }
    }
}

fn join_labels<'a>(state: &TraversalState, nodes: impl Iterator<Item = &'a usize>) -> String {
    nodes
        .map(|&n| state.label(n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn traversal_view(name: &str, state: &TraversalState) -> StateView {
    let cells = (0..state.tree.len()).map(|node| {
        let mark = match state.outcome {
            TraversalOutcome::Found { node: f, .. } if f == node => Mark::Found,
            _ if state.current == Some(node) => Mark::Active,
            _ if state.visited[node] => Mark::Visited,
            _ if state.frontier.contains(&node) => Mark::Queued,
            _ => Mark::Normal,
        };
        Cell::new(state.label(node), mark).with_depth(state.tree.depth[node])
    });

    let mut view = StateView::new(name, ViewLayout::Tree)
        .cells(cells)
        .note("Target", state.target.clone())
        .note("Frontier", join_labels(state, state.frontier.iter()))
        .note("Visit order", join_labels(state, state.visit_order.iter()))
        .note("Result", state.outcome.to_string());
    if let Some(limit) = state.depth_limit {
        view = view.note("Depth limit", limit.to_string());
    }
    view
}

#[derive(Debug)]
pub struct BreadthFirst;

impl Algorithm for BreadthFirst {
    const NAME: &'static str = "Breadth-First Search";
    type Input = TreeInput;
    type State = TraversalState;
    type Op = ();

    fn init(input: TreeInput) -> Result<TraversalState, StepError> {
        TraversalState::new(input)
    }

    fn is_terminal(state: &TraversalState) -> bool {
        state.outcome.is_done()
    }

    fn transition(
        state: &TraversalState,
        _: &(),
    ) -> Result<Transition<TraversalState>, StepError> {
        let mut next = state.clone();
        let Some(node) = next.frontier.pop_front() else {
            let mut message = String::from("Frontier is empty");
            next.finish_if_exhausted(&mut message);
            return Ok(Transition::new(next, message));
        };

        if next.visited[node] {
            let mut message = format!("Skipping {} (already visited)", next.label(node));
            next.finish_if_exhausted(&mut message);
            return Ok(Transition::new(next, message));
        }

        if next.visit(node) {
            let message = format!("Found: {}", next.target);
            return Ok(Transition::new(next, message).with_motion(Motion::Visit(node)));
        }

        let mut message = format!("Visiting {}", next.label(node));
        let tree = Rc::clone(&next.tree);
        for &child in &tree.children[node] {
            if !next.visited[child] {
                next.frontier.push_back(child);
            }
        }
        next.finish_if_exhausted(&mut message);
        Ok(Transition::new(next, message).with_motion(Motion::Visit(node)))
    }

    fn auto_op(_: &TraversalState) -> Option<()> {
        Some(())
    }

    fn view(state: &TraversalState) -> StateView {
        traversal_view(Self::NAME, state)
    }
}

#[derive(Debug)]
pub struct DepthLimited;

impl Algorithm for DepthLimited {
    const NAME: &'static str = "Depth-Limited Search";
    type Input = TreeInput;
    type State = TraversalState;
    type Op = ();

    fn init(input: TreeInput) -> Result<TraversalState, StepError> {
        TraversalState::new(input)
    }

    fn is_terminal(state: &TraversalState) -> bool {
        state.outcome.is_done()
    }

    fn transition(
        state: &TraversalState,
        _: &(),
    ) -> Result<Transition<TraversalState>, StepError> {
        let mut next = state.clone();
        let Some(node) = next.frontier.pop_back() else {
            let mut message = String::from("Stack is empty");
            next.finish_if_exhausted(&mut message);
            return Ok(Transition::new(next, message));
        };

        let depth = next.tree.depth[node];
        let within = |d: usize| next.depth_limit.map_or(true, |limit| d <= limit);

        if !within(depth) {
            let mut message = format!(
                "Skipping {} (Depth {} > Limit {})",
                next.label(node),
                depth,
                next.depth_limit.unwrap_or_default()
            );
            next.current = None;
            next.finish_if_exhausted(&mut message);
            return Ok(Transition::new(next, message));
        }

        if next.visited[node] {
            let mut message = format!("Skipping {} (already visited)", next.label(node));
            next.finish_if_exhausted(&mut message);
            return Ok(Transition::new(next, message));
        }

        if next.visit(node) {
            let message = format!("Found: {} at depth {}", next.target, depth);
            return Ok(Transition::new(next, message).with_motion(Motion::Visit(node)));
        }

        let mut message = format!("Visiting {} (Depth: {})", next.label(node), depth);
        let tree = Rc::clone(&next.tree);
        // reversed so the leftmost child is popped first
        for &child in tree.children[node].iter().rev() {
            if next.visited[child] {
                continue;
            }
            if next.depth_limit.map_or(true, |limit| depth < limit) {
                next.frontier.push_back(child);
            } else {
                message.push_str(&format!(
                    "; not adding {} (Depth {}): exceeds limit {}",
                    tree.labels[child],
                    depth + 1,
                    next.depth_limit.unwrap_or_default()
                ));
            }
        }
        next.finish_if_exhausted(&mut message);
        Ok(Transition::new(next, message).with_motion(Motion::Visit(node)))
    }

    fn auto_op(_: &TraversalState) -> Option<()> {
        Some(())
    }

    fn view(state: &TraversalState) -> StateView {
        traversal_view(Self::NAME, state)
    }
}
