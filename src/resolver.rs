//! Reference resolution: maps an [`ObjectDescription`] to the set of world
//! object ids that satisfy it (§4.2), and the `positional` predicate used
//! both here and by the planner's goal test (§4.6).
//!
//! Recursive resolution is memoized keyed by the structural identity
//! (pointer address) of the description node, since the same
//! sub-description can be reached through multiple parent paths within one
//! command.

use std::collections::{BTreeSet, HashMap};

use crate::description::{ComplexObject, FormSpec, ObjectDescription, Quantifier, RelativeObject, SetOperator, SimpleObject};
use crate::physics::{Relation, legal};
use crate::world::{FLOOR, ObjectId, Position, Thing, World};

/// Memoizes `resolve_object` for the lifetime of a single interpret call.
/// Keyed by the address of the description node rather than its contents:
/// nodes are never mutated or reallocated while a command is being
/// interpreted, so the address is a stable, cheap structural identity.
#[derive(Default)]
pub struct ResolveCache(HashMap<*const ObjectDescription, BTreeSet<ObjectId>>);

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn resolve_object(desc: &ObjectDescription, world: &World, cache: &mut ResolveCache) -> BTreeSet<ObjectId> {
    let key = desc as *const ObjectDescription;
    if let Some(hit) = cache.0.get(&key) {
        return hit.clone();
    }

    let result = match desc {
        ObjectDescription::Simple(simple) => resolve_simple(simple, world),
        ObjectDescription::Relative(rel) => resolve_relative(rel, world, cache),
        ObjectDescription::Complex(complex) => resolve_complex(complex, world, cache),
    };

    cache.0.insert(key, result.clone());
    result
}

fn resolve_simple(simple: &SimpleObject, world: &World) -> BTreeSet<ObjectId> {
    if simple.form == FormSpec::Floor {
        return BTreeSet::from([FLOOR.to_string()]);
    }

    world
        .ids_in_play()
        .filter(|id| {
            let Some(attrs) = world.attributes(id) else { return false };
            let form_ok = match simple.form {
                FormSpec::Any => true,
                FormSpec::Floor => false,
                FormSpec::Exact(f) => attrs.form == f,
            };
            let size_ok = simple.size.is_none_or(|s| s == attrs.size);
            let color_ok = simple.color.is_none_or(|c| c == attrs.color);
            form_ok && size_ok && color_ok
        })
        .map(ObjectId::from)
        .collect()
}

pub(crate) fn thing_of<'a>(world: &'a World, id: &str) -> Thing<'a> {
    if id == FLOOR {
        Thing::Floor
    } else {
        Thing::Object(world.attributes(id).expect("resolved id must be in the catalogue"))
    }
}

fn resolve_relative(rel: &RelativeObject, world: &World, cache: &mut ResolveCache) -> BTreeSet<ObjectId> {
    let candidates = resolve_object(&rel.object, world, cache);
    let targets = resolve_object(&rel.location.entity.object, world, cache);
    let relation = rel.location.relation;
    let quantifier = rel.location.entity.quantifier;

    let witnesses = |a: &str, b: &str| {
        legal(relation, a, thing_of(world, a), b, thing_of(world, b)).is_ok() && positional(relation, world, a, b)
    };

    candidates
        .into_iter()
        .filter(|a| match quantifier {
            Quantifier::All => targets.iter().all(|b| witnesses(a, b)),
            Quantifier::The | Quantifier::Any => targets.iter().any(|b| witnesses(a, b)),
        })
        .collect()
}

fn resolve_complex(complex: &ComplexObject, world: &World, cache: &mut ResolveCache) -> BTreeSet<ObjectId> {
    let a = resolve_object(&complex.object1, world, cache);
    let b = resolve_object(&complex.object2, world, cache);
    match complex.operator {
        SetOperator::Or => a.union(&b).cloned().collect(),
        SetOperator::Except => a.difference(&b).cloned().collect(),
    }
}

/// Is `R(a, b)` true of the current stack layout, independent of physical
/// legality? Floor coordinates (`col = -1, row = -1`) are treated as lying
/// directly below every column, per §4.2.
pub fn positional(relation: Relation, world: &World, a: &str, b: &str) -> bool {
    use Relation::*;

    let Some(pa) = world.position_of(a) else { return false };
    let Some(pb) = world.position_of(b) else { return false };

    match relation {
        OnTop | Inside => {
            if pb == Position::FLOOR { pa.row == 0 } else { pa.col == pb.col && pa.row == pb.row + 1 }
        }
        Above => {
            if pb == Position::FLOOR { pa != Position::FLOOR } else { pa.col == pb.col && pa.row > pb.row }
        }
        Under => pa.col == pb.col && pa.row < pb.row,
        LeftOf => pa.col < pb.col,
        RightOf => pa.col > pb.col,
        Beside => (pa.col - pb.col).abs() == 1,
    }
}
