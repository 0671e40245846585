use super::*;

/// Frontier of discovered but unexpanded nodes, ordered by ascending
/// `path_cost`.
///
/// Kept as a list re-sorted on every insertion. The sort is stable, so nodes
/// with equal cost pop in insertion order; replacements must preserve this
/// tie-break.
#[derive(Default)]
pub struct OpenList {
    elements: Vec<Rc<Node>>,
}

impl OpenList {
    pub fn new() -> OpenList {
        OpenList {
            elements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn push(&mut self, node: Rc<Node>) {
        self.elements.push(node);
        self.elements.sort_by_key(|node| node.path_cost);
    }

    /// Removes and returns the cheapest node.
    ///
    /// Panics when empty; callers must check `is_empty` first.
    pub fn pop(&mut self) -> Rc<Node> {
        assert!(!self.elements.is_empty(), "pop from an empty open list");
        self.elements.remove(0)
    }

    /// Index of an entry with the same state. Costs are ignored; this is a
    /// same-state lookup, not a same-node lookup.
    pub fn find(&self, node: &Node) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| element.state == node.state)
    }

    /// Replaces the entry at `index` when the candidate is strictly cheaper.
    pub fn replace_if_better(&mut self, index: usize, candidate: Rc<Node>) {
        if index < self.elements.len() && candidate.path_cost < self.elements[index].path_cost {
            self.elements[index] = candidate;
            self.elements.sort_by_key(|node| node.path_cost);
        }
    }
}

/// Already-expanded states, keyed by their canonical encoding.
///
/// Membership testing only; entries are never removed during a run.
#[derive(Default)]
pub struct ClosedSet {
    keys: HashSet<String>,
}

impl ClosedSet {
    pub fn new() -> ClosedSet {
        ClosedSet {
            keys: HashSet::new(),
        }
    }

    pub fn insert(&mut self, state: &State) {
        self.keys.insert(state.encode());
    }

    pub fn contains(&self, state: &State) -> bool {
        self.keys.contains(&state.encode())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
