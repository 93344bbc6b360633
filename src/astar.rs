//! Generic A* engine (§4.7): best-first search over the implicit world-state
//! graph (§4.5), keyed by canonical node identity (§6), with reopening on
//! improvement since the heuristic bank (§4.8) is admissible but not
//! guaranteed consistent.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::graph::successors;
use crate::world::World;

/// A successful search's statistics (§4.7: "reconstructed action path, cost
/// `g`, and the number of distinct nodes seen").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub plan: String,
    pub cost: u64,
    pub nodes_seen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(SearchResult),
    Timeout,
    Failure,
}

struct NodeRecord {
    world: World,
    parent: Option<usize>,
    action: Option<char>,
    g: u64,
}

fn reconstruct(arena: &[NodeRecord], goal_idx: usize, nodes_seen: usize) -> SearchResult {
    let mut actions = Vec::new();
    let mut cursor = goal_idx;
    while let Some(parent) = arena[cursor].parent {
        actions.push(arena[cursor].action.expect("non-root node always has an action"));
        cursor = parent;
    }
    actions.reverse();
    SearchResult { plan: actions.into_iter().collect(), cost: arena[goal_idx].g, nodes_seen }
}

/// Runs A* from `start` until `goal` is satisfied, the frontier empties, or
/// `timeout` elapses. `heuristic` is memoized per node identity (§4.8).
pub fn search(
    start: World,
    goal: impl Fn(&World) -> bool,
    heuristic: impl Fn(&World) -> u64,
    timeout: Duration,
    max_nodes: Option<usize>,
) -> Outcome {
    let deadline = Instant::now() + timeout;

    let mut arena: Vec<NodeRecord> = Vec::new();
    let mut best_f: HashMap<String, u64> = HashMap::new();
    let mut h_cache: HashMap<String, u64> = HashMap::new();
    let mut seen: HashSet<String> = HashSet::new();
    // Min-heap on `(f, insertion order, arena index)`; §5 notes tie-break
    // order among equal-`f` entries is unspecified, so insertion order is
    // only used to make the heap deterministic, not to encode priority.
    let mut frontier: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();
    let mut next_seq = 0u64;

    let start_id = start.canonical_id();
    let h0 = *h_cache.entry(start_id.clone()).or_insert_with(|| heuristic(&start));
    seen.insert(start_id.clone());
    best_f.insert(start_id, h0);
    arena.push(NodeRecord { world: start, parent: None, action: None, g: 0 });
    frontier.push(Reverse((h0, next_seq, 0)));
    next_seq += 1;

    while let Some(Reverse((f, _seq, idx))) = frontier.pop() {
        if Instant::now() >= deadline {
            return Outcome::Timeout;
        }

        let node_id = arena[idx].world.canonical_id();
        if best_f.get(&node_id).is_some_and(|&bf| f > bf) {
            continue; // superseded by a cheaper re-opening of the same node
        }

        if goal(&arena[idx].world) {
            return Outcome::Success(reconstruct(&arena, idx, seen.len()));
        }

        let g = arena[idx].g;
        for edge in successors(&arena[idx].world) {
            if Instant::now() >= deadline {
                return Outcome::Timeout;
            }

            let child_id = edge.child.canonical_id();
            seen.insert(child_id.clone());
            if max_nodes.is_some_and(|cap| seen.len() > cap) {
                return Outcome::Failure;
            }
            let g2 = g + 1;
            let h2 = *h_cache.entry(child_id.clone()).or_insert_with(|| heuristic(&edge.child));
            let f2 = g2 + h2;

            let should_enqueue = best_f.get(&child_id).is_none_or(|&bf| f2 < bf);
            if should_enqueue {
                best_f.insert(child_id, f2);
                arena.push(NodeRecord { world: edge.child, parent: Some(idx), action: Some(edge.action), g: g2 });
                frontier.push(Reverse((f2, next_seq, arena.len() - 1)));
                next_seq += 1;
            }
        }
    }

    Outcome::Failure
}
