//! Integration tests
//!
//! Exercise complete search runs, from puzzle description to node stream.

use super::*;
use crate::io::MatchProblem;

const PARALLEL_LINES_4: &str = include_str!("../../../problems/parallel4.json");
const SINGLE_TURN_3: &str = include_str!("../../../problems/turns3.yaml");
const CROSSING_PAIRS_2: &str = include_str!("../../../problems/cross2.json");

fn collect_nodes(items: &[StreamItem]) -> Vec<Rc<Node>> {
    items
        .iter()
        .filter_map(|item| match item {
            StreamItem::Node(node) => Some(Rc::clone(node)),
            StreamItem::End => None,
        })
        .collect()
}

fn assert_sentinel_contract(items: &[StreamItem]) {
    let sentinels = items
        .iter()
        .filter(|item| matches!(item, StreamItem::End))
        .count();
    assert_eq!(sentinels, 1);
    assert!(matches!(items.last(), Some(StreamItem::End)));
}

#[test]
fn two_by_two_single_pair() {
    let problem = Problem::new(2, vec![(Cell(0, 0), Cell(1, 1))], Config::default());
    let items: Vec<StreamItem> = search(&problem).collect();
    assert_sentinel_contract(&items);

    // Root plus the two one-step frontier states, then the goal twice.
    let nodes = collect_nodes(&items);
    assert_eq!(nodes.len(), 5);
    assert!(Rc::ptr_eq(&nodes[3], &nodes[4]));
    assert!(problem.is_goal(&nodes[4].state));
    assert_eq!(nodes[4].path_cost, 2);

    // One of the two minimal 2-step solutions.
    let moves = problem.solution(&nodes[4]);
    assert_eq!(moves.len(), 2);
    assert!(moves[0].dest == Cell(1, 0) || moves[0].dest == Cell(0, 1));
    assert_eq!(moves[1].dest, Cell(1, 1));
}

#[test]
fn all_heuristics_find_the_short_diagonal() {
    for heuristic in [
        Heuristic::Null,
        Heuristic::ManhattanSum,
        Heuristic::ManhattanObstacles,
    ] {
        let config = Config {
            heuristic,
            ..Config::default()
        };
        let problem = Problem::new(2, vec![(Cell(0, 0), Cell(1, 1))], config);
        assert_eq!(solve(&problem).cost, Some(2), "heuristic {}", heuristic);
    }
}

#[test]
fn manhattan_sum_is_exact_without_obstacles() {
    // A single unobstructed pair costs exactly its Manhattan distance.
    let problem = Problem::new(5, vec![(Cell(0, 0), Cell(4, 4))], Config::default());
    let report = solve(&problem);
    assert_eq!(report.cost, Some(8));
    assert_eq!(report.moves.as_ref().map(Vec::len), Some(8));
}

#[test]
fn turn_penalty_accounting() {
    let parsed: MatchProblem = serde_yaml::from_str(SINGLE_TURN_3).unwrap();
    assert_eq!(parsed.cost_mode, CostMode::TurnPenalty);

    // Two steps with one direction change: 2 + 2.
    let problem = parsed.clone().prepare().unwrap();
    assert_eq!(solve(&problem).cost, Some(4));

    // The same puzzle in plain mode costs the bare path length.
    let mut plain = parsed;
    plain.cost_mode = CostMode::Plain;
    assert_eq!(solve(&plain.prepare().unwrap()).cost, Some(2));
}

#[test]
fn parallel_lines_solved_round_robin() {
    let parsed: MatchProblem = serde_json::from_str(PARALLEL_LINES_4).unwrap();
    let problem = parsed.prepare().unwrap();
    let items: Vec<StreamItem> = search(&problem).collect();
    assert_sentinel_contract(&items);

    let nodes = collect_nodes(&items);
    let goal = nodes.last().unwrap();
    assert!(problem.is_goal(&goal.state));
    assert_eq!(goal.path_cost, 6);

    // Pairs take turns: exactly one pair is movable per state.
    let moves = problem.solution(goal);
    let pairs: Vec<PairIndex> = moves.iter().map(|action| action.pair).collect();
    assert_eq!(pairs, vec![0, 1, 0, 1, 0, 1]);
}

#[test]
fn popped_costs_are_non_decreasing() {
    let parsed: MatchProblem = serde_json::from_str(PARALLEL_LINES_4).unwrap();
    let problem = parsed.prepare().unwrap();
    let nodes = collect_nodes(&search(&problem).collect::<Vec<_>>());
    for window in nodes.windows(2) {
        assert!(window[0].path_cost <= window[1].path_cost);
    }
}

#[test]
fn expanded_states_are_never_yielded_twice() {
    let parsed: MatchProblem = serde_json::from_str(PARALLEL_LINES_4).unwrap();
    let problem = parsed.prepare().unwrap();
    let nodes = collect_nodes(&search(&problem).collect::<Vec<_>>());

    // Drop the duplicated goal yield; everything else must be distinct.
    let mut encodings: Vec<String> = nodes[..nodes.len() - 1]
        .iter()
        .map(|node| node.state.encode())
        .collect();
    let before = encodings.len();
    encodings.sort();
    encodings.dedup();
    assert_eq!(encodings.len(), before);
}

#[test]
fn no_pair_ever_revisits_a_claimed_cell() {
    let parsed: MatchProblem = serde_json::from_str(PARALLEL_LINES_4).unwrap();
    let problem = parsed.prepare().unwrap();
    let nodes = collect_nodes(&search(&problem).collect::<Vec<_>>());

    for node in &nodes {
        let (parent, action) = match (&node.parent, node.action) {
            (Some(parent), Some(action)) => (parent, action),
            _ => continue,
        };
        let dest = action.dest;
        let target = parent.state.lines[action.pair].target;
        assert!(parent.state.grid[(dest.0, dest.1)] == 0 || dest == target);
    }
}

#[test]
fn crossing_pairs_exhaust_without_solution() {
    // All four cells are endpoint-claimed from the start; the active pair has
    // no legal move, so only the root is ever expanded.
    let parsed: MatchProblem = serde_json::from_str(CROSSING_PAIRS_2).unwrap();
    let problem = parsed.clone().prepare().unwrap();
    let items: Vec<StreamItem> = search(&problem).collect();
    assert_sentinel_contract(&items);

    let nodes = collect_nodes(&items);
    assert_eq!(nodes.len(), 1);
    assert!(!problem.is_goal(&nodes[0].state));

    let report = solve(&parsed.prepare().unwrap());
    assert_eq!(report.steps, 1);
    assert_eq!(report.cost, None);
    assert_eq!(report.moves, None);
}

#[test]
fn initial_cost_seed_propagates() {
    let config = Config {
        initial_cost: 5,
        ..Config::default()
    };
    let problem = Problem::new(2, vec![(Cell(0, 0), Cell(1, 1))], config);
    let items: Vec<StreamItem> = search(&problem).collect();
    let nodes = collect_nodes(&items);

    // The root carries the seed without a heuristic term, and every
    // descendant inherits the offset.
    assert_eq!(nodes[0].path_cost, 5);
    assert_eq!(nodes[0].depth, 5);
    assert_eq!(nodes.last().unwrap().path_cost, 7);
}

#[test]
fn solve_reports_steps_and_moves() {
    let problem = Problem::new(2, vec![(Cell(0, 0), Cell(1, 1))], Config::default());
    let report = solve(&problem);
    // Five yields: root, two frontier states, the goal twice.
    assert_eq!(report.steps, 5);
    assert_eq!(report.cost, Some(2));
    assert_eq!(report.moves.as_ref().map(Vec::len), Some(2));
}
