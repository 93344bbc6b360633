//! The implicit world-state graph (§4.5): every [`World`] is a node: its
//! canonical id (§6) is the identity the search keys on, and its
//! successors are the at-most-four single arm actions `{l,r,p,d}`, each at
//! unit cost.

use crate::physics::{Relation, legal};
use crate::resolver::thing_of;
use crate::world::{FLOOR, World};

/// One outgoing edge: the action character and the world it leads to. Every
/// edge costs 1 (§4.5), so the A* engine doesn't need a separate cost field
/// — it treats `successors` as yielding `(action, child, 1)`.
pub struct Edge {
    pub action: char,
    pub child: World,
}

/// All legal successors of `world`, per §4.5's four action rules.
pub fn successors(world: &World) -> Vec<Edge> {
    let mut out = Vec::with_capacity(4);

    if world.arm() > 0 {
        out.push(Edge { action: 'l', child: world.moved_arm(-1) });
    }
    if world.arm() + 1 < world.stacks().len() {
        out.push(Edge { action: 'r', child: world.moved_arm(1) });
    }
    if let Some(child) = world.picked() {
        out.push(Edge { action: 'p', child });
    }
    if can_drop(world) {
        out.push(Edge { action: 'd', child: world.dropped().expect("can_drop implies holding") });
    }

    out
}

/// `legalDrop` from §4.5: `holding ≠ null` and the held object may legally
/// land `ontop` of whatever currently tops the arm's column, or the floor
/// if that column is empty.
fn can_drop(world: &World) -> bool {
    let Some(held) = world.holding() else { return false };
    let held_thing = thing_of(world, held);
    let (target_id, target_thing) = match world.top_of(world.arm()) {
        Some(top) => (top.to_string(), thing_of(world, top)),
        None => (FLOOR.to_string(), crate::world::Thing::Floor),
    };
    legal(Relation::OnTop, held, held_thing, &target_id, target_thing).is_ok()
}
