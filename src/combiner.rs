//! The quantifier combiner (§4.3): expands a resolved subject set, a
//! resolved object/destination set, their quantifiers, and a relation into
//! a DNF over `R(a,b)` literals.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::description::Quantifier;
use crate::error::{InterpretError, join_distinct};
use crate::formula::{Conjunction, DnfFormula, Literal};
use crate::physics::{Relation, legal};
use crate::resolver::thing_of;
use crate::world::{FLOOR, ObjectId, World};

/// True iff `b` is *exactly* `{"floor"}` — the one case in which the
/// ontop/inside "all" pre-checks relax (§9's floor exception: "many balls
/// on the floor" is a legal single conjunction even though `|B| = 1` here,
/// not `|B| > 1`; the exception in the table is about `B[0]`, i.e. whether
/// the *destination set itself* denotes the floor).
fn is_floor_only(set: &BTreeSet<ObjectId>) -> bool {
    set.len() == 1 && set.iter().next().map(String::as_str) == Some(FLOOR)
}

/// Combine two resolved sets under their quantifiers and a relation into a
/// DNF, per the table and four cases of §4.3.
pub fn combine(
    a: &BTreeSet<ObjectId>,
    qa: Quantifier,
    b: &BTreeSet<ObjectId>,
    qb: Quantifier,
    relation: Relation,
    world: &World,
) -> Result<DnfFormula, InterpretError> {
    if a.is_empty() {
        return Err(InterpretError::NoMatchingObject);
    }
    if b.is_empty() {
        return Err(InterpretError::NoMatchingDestination);
    }
    if qa == Quantifier::The && a.len() > 1 {
        return Err(InterpretError::AmbiguousObject);
    }
    if qb == Quantifier::The && b.len() > 1 {
        return Err(InterpretError::AmbiguousDestination);
    }

    let b_denotes_floor = is_floor_only(b);
    if matches!(relation, Relation::OnTop | Relation::Inside) && qb == Quantifier::All && b.len() > 1 && !b_denotes_floor
    {
        return Err(InterpretError::TooManyDestinations(relation));
    }
    if matches!(relation, Relation::OnTop | Relation::Inside) && qa == Quantifier::All && a.len() > 1 && !b_denotes_floor
    {
        return Err(InterpretError::TooManySubjects(relation));
    }

    let check = |ai: &str, bi: &str| legal(relation, ai, thing_of(world, ai), bi, thing_of(world, bi));
    let literal = |ai: &str, bi: &str| Literal::Relation { relation, a: ai.to_string(), b: bi.to_string() };

    let mut violations = Vec::new();
    let mut conjunctions = Vec::new();

    match (qa, qb) {
        (Quantifier::All, Quantifier::All) => {
            let mut lits = Vec::new();
            let mut all_legal = true;
            for (ai, bi) in a.iter().cartesian_product(b) {
                match check(ai, bi) {
                    Ok(()) => lits.push(literal(ai, bi)),
                    Err(v) => {
                        violations.push(v.0);
                        all_legal = false;
                    }
                }
            }
            if all_legal {
                conjunctions.push(Conjunction(lits));
            }
        }
        (Quantifier::All, _) => {
            // One conjunction per `b`, each requiring every `a` to relate to it.
            for bi in b {
                let mut lits = Vec::new();
                let mut all_legal = true;
                for ai in a {
                    match check(ai, bi) {
                        Ok(()) => lits.push(literal(ai, bi)),
                        Err(v) => {
                            violations.push(v.0);
                            all_legal = false;
                        }
                    }
                }
                if all_legal {
                    conjunctions.push(Conjunction(lits));
                }
            }
        }
        (_, Quantifier::All) => {
            // Symmetric: one conjunction per `a`, each requiring every `b`.
            for ai in a {
                let mut lits = Vec::new();
                let mut all_legal = true;
                for bi in b {
                    match check(ai, bi) {
                        Ok(()) => lits.push(literal(ai, bi)),
                        Err(v) => {
                            violations.push(v.0);
                            all_legal = false;
                        }
                    }
                }
                if all_legal {
                    conjunctions.push(Conjunction(lits));
                }
            }
        }
        _ => {
            // Neither is "all": one conjunction per legal pair, the
            // classic wide existential disjunction.
            for (ai, bi) in a.iter().cartesian_product(b) {
                match check(ai, bi) {
                    Ok(()) => conjunctions.push(Conjunction(vec![literal(ai, bi)])),
                    Err(v) => violations.push(v.0),
                }
            }
        }
    }

    if conjunctions.is_empty() {
        return Err(InterpretError::Physics(join_distinct(violations, "; ")));
    }

    Ok(DnfFormula(conjunctions))
}
