use super::*;

/// A node in the search graph: a state plus how it was reached.
///
/// Nodes are immutable once built. A child holds an `Rc` reference to its
/// parent (never the other way around), so the chain back to the root stays
/// alive for path reconstruction as long as the node itself is reachable.
#[derive(Clone, Debug)]
pub struct Node {
    pub state: State,
    pub parent: Option<Rc<Node>>,
    /// Move that produced this state; `None` for the root.
    pub action: Option<Action>,
    /// f-score: accumulated cost plus heuristic estimate. Orders the open
    /// list.
    pub path_cost: Cost,
    /// g-score: accumulated cost alone.
    pub depth: Cost,
    /// Last move direction of each pair that has moved on this path.
    pub directions: HashMap<PairIndex, Direction>,
}

impl Node {
    /// Root node. Both cost fields start at `initial_cost` rather than zero;
    /// the offset carries into every descendant through the step cost.
    pub fn root(state: State, initial_cost: Cost) -> Node {
        Node {
            state,
            parent: None,
            action: None,
            path_cost: initial_cost,
            depth: initial_cost,
            directions: HashMap::new(),
        }
    }

    /// Builds the successor of this node under the given action.
    pub fn child(self: &Rc<Node>, problem: &Problem, action: Action) -> Node {
        let direction = Direction::between(&self.state.lines[action.pair].head, &action.dest);
        let state = problem.apply(&self.state, &action);

        let mut directions = self.directions.clone();
        if let Some(direction) = direction {
            directions.insert(action.pair, direction);
        }

        let depth = problem.step_cost(self, action.pair, direction);
        let path_cost = depth + problem.estimate(&state);
        Node {
            state,
            parent: Some(Rc::clone(self)),
            action: Some(action),
            path_cost,
            depth,
            directions,
        }
    }

    /// Chain from the root to this node, root first.
    pub fn path(self: &Rc<Node>) -> Vec<Rc<Node>> {
        let mut chain = Vec::new();
        let mut node = Some(Rc::clone(self));
        while let Some(current) = node {
            chain.push(Rc::clone(&current));
            node = current.parent.clone();
        }
        chain.reverse();
        chain
    }
}
