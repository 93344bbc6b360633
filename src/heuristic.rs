//! The admissible heuristic bank (§4.8): a per-relation lower bound on the
//! number of actions remaining to satisfy a literal, combined over a DNF as
//! `min over conjunctions (max over literals)`.

use crate::formula::{Conjunction, DnfFormula, Literal};
use crate::physics::Relation;
use crate::world::{FLOOR, World};

/// One relation argument, reduced to the facts every per-relation formula
/// needs: its effective column (the arm's column when held), how many
/// objects sit on top of it (zero when held or floor), and whether it is
/// held or the floor sentinel.
#[derive(Copy, Clone, Debug)]
struct Arg {
    col: i64,
    on_top: u64,
    held: bool,
    floor: bool,
}

fn arg_of(world: &World, id: &str) -> Arg {
    if id == FLOOR {
        return Arg { col: -1, on_top: 0, held: false, floor: true };
    }
    if world.holding() == Some(id) {
        return Arg { col: world.arm() as i64, on_top: 0, held: true, floor: false };
    }
    let pos = world.position_of(id).expect("literal argument must be a world id");
    Arg { col: pos.col as i64, on_top: world.count_on_top(id), held: false, floor: false }
}

fn abs_diff(a: i64, b: i64) -> u64 {
    (a - b).unsigned_abs()
}

/// `holding(a)`: §4.8's unary bound.
fn holding_cost(a: &Arg, arm: i64) -> u64 {
    4 * a.on_top + abs_diff(arm, a.col) + 1
}

/// `ontop`/`inside`: identical positional and cost shape, differing only at
/// the physics layer (§4.1 rule 7 restricts `inside` to boxes). §4.8's
/// bound, covering the floor and held-argument special cases in order.
fn ontop_cost(a: &Arg, b: &Arg, arm: i64) -> u64 {
    if b.floor {
        return if a.held { 1 } else { 4 * a.on_top + abs_diff(arm, a.col) + 3 };
    }
    if a.held {
        return 4 * b.on_top + abs_diff(arm, b.col) + 1;
    }
    if b.held {
        return 4 * a.on_top + abs_diff(arm, a.col) + 4;
    }
    if a.col == b.col {
        4 * a.on_top.max(b.on_top) + abs_diff(arm, a.col) + 3
    } else {
        4 * (a.on_top + b.on_top) + abs_diff(arm, a.col) + abs_diff(a.col, b.col) + 2
    }
}

/// `above`: mirrors `ontop`'s floor/held branches; the "both on stacks"
/// case additionally carries the column gap since, unlike `ontop`, `a` need
/// not land directly above `b`.
fn above_cost(a: &Arg, b: &Arg, arm: i64) -> u64 {
    if b.floor {
        return if a.held { 1 } else { 0 };
    }
    if a.held {
        return 4 * b.on_top + abs_diff(arm, b.col) + 1;
    }
    if b.held {
        return 4 * a.on_top + abs_diff(arm, a.col) + 4;
    }
    4 * a.on_top + abs_diff(a.col, b.col) + abs_diff(arm, a.col) + 3
}

/// `under(a,b)` holds of the same layout `above(b,a)` does (same column,
/// opposite row inequality), and the floor never appears as either argument
/// of `under` (§4.1 rule 2), so the bound is simply `above`'s with the
/// arguments swapped — this also reproduces §4.8's explicit
/// `4·nB + dAB + |arm−colB| + 3` formula exactly in the both-stacked case.
fn under_cost(a: &Arg, b: &Arg, arm: i64) -> u64 {
    above_cost(b, a, arm)
}

fn leftof_rightof_cost(relation: Relation, a: &Arg, b: &Arg, arm: i64) -> u64 {
    if !a.held && !b.held {
        let d_r = abs_diff(arm, a.col).min(abs_diff(arm, b.col));
        let d_ab = abs_diff(a.col, b.col);
        return 4 * a.on_top.min(b.on_top) + d_r + d_ab + 3;
    }
    let (held_is_a, other) = if a.held { (true, b) } else { (false, a) };
    let dist = abs_diff(arm, other.col);
    let already_on_correct_side = match (relation, held_is_a) {
        (Relation::LeftOf, true) => arm < other.col,
        (Relation::LeftOf, false) => other.col < arm,
        (Relation::RightOf, true) => arm > other.col,
        (Relation::RightOf, false) => other.col > arm,
        _ => unreachable!("leftof_rightof_cost only called for LeftOf/RightOf"),
    };
    if already_on_correct_side { 1 } else { dist + 2 }
}

fn beside_cost(a: &Arg, b: &Arg, arm: i64) -> u64 {
    if !a.held && !b.held {
        let d_r = abs_diff(arm, a.col).min(abs_diff(arm, b.col));
        let extra = if a.col != b.col { abs_diff(a.col, b.col) } else { 3 };
        return 4 * a.on_top.min(b.on_top) + d_r + extra + 1;
    }
    let other = if a.held { b } else { a };
    abs_diff(arm, other.col)
}

/// Admissible lower bound on the number of actions remaining to satisfy a
/// single literal, short-circuiting to 0 when it already holds (§4.8: "the
/// implementation must short-circuit binary literals whose positional
/// predicate already holds to guarantee h(goal) = 0").
pub fn literal_cost(lit: &Literal, world: &World) -> u64 {
    if lit.holds(world) {
        return 0;
    }
    let arm = world.arm() as i64;
    match lit {
        Literal::Holding(a) => holding_cost(&arg_of(world, a), arm),
        Literal::Relation { relation, a, b } => {
            let a = arg_of(world, a);
            let b = arg_of(world, b);
            match relation {
                Relation::OnTop | Relation::Inside => ontop_cost(&a, &b, arm),
                Relation::Above => above_cost(&a, &b, arm),
                Relation::Under => under_cost(&a, &b, arm),
                Relation::LeftOf | Relation::RightOf => leftof_rightof_cost(*relation, &a, &b, arm),
                Relation::Beside => beside_cost(&a, &b, arm),
            }
        }
    }
}

/// `max` over a conjunction's literals: every literal must hold, so the
/// conjunction's cost is bounded by its most expensive literal.
pub fn conjunction_cost(conjunction: &Conjunction, world: &World) -> u64 {
    conjunction.0.iter().map(|lit| literal_cost(lit, world)).max().unwrap_or(0)
}

/// `min` over a DNF's conjunctions: any single disjunct suffices, so the
/// planner is free to pick the cheapest. An empty DNF is unsatisfiable
/// (§3), so its cost is defined as infinite rather than zero.
pub fn dnf_cost(dnf: &DnfFormula, world: &World) -> u64 {
    dnf.0.iter().map(|conjunction| conjunction_cost(conjunction, world)).min().unwrap_or(u64::MAX)
}
