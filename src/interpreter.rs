//! The command interpreter (§4.4) and the interpreter's batch entry point
//! (§6): dispatches `Take`/`Drop`/`Move` to the reference resolver and
//! quantifier combiner, then filters a batch of parses down to the ones
//! that produced a usable goal.

use std::collections::BTreeSet;

use log::{info, warn};

use crate::combiner::combine;
use crate::command::Command;
use crate::description::{Entity, Location, Quantifier};
use crate::error::{InterpretError, join_distinct};
use crate::formula::{Conjunction, DnfFormula, Literal};
use crate::resolver::{ResolveCache, resolve_object};
use crate::world::{FLOOR, World};

/// One parser-produced command tree plus whatever opaque payload the caller
/// wants carried through to its planned counterpart (§6: "the same parses
/// ... each augmented with its DNF interpretation"). The core never reads
/// `extra`; it only threads it through.
#[derive(Clone, Debug)]
pub struct Parse<T> {
    pub command: Command,
    pub extra: T,
}

/// A parse that survived interpretation, with its goal attached.
#[derive(Clone, Debug)]
pub struct Interpreted<T> {
    pub command: Command,
    pub extra: T,
    pub dnf: DnfFormula,
}

/// Interprets a single command tree against `world`, producing its DNF goal
/// or the reason it couldn't (§4.4).
pub fn interpret_command(command: &Command, world: &World) -> Result<DnfFormula, InterpretError> {
    let mut cache = ResolveCache::new();
    match command {
        Command::Take(entity) => interpret_take(entity, world, &mut cache),
        Command::Drop(location) => interpret_drop(location, world, &mut cache),
        Command::Move(entity, location) => interpret_move(entity, location, world, &mut cache),
    }
}

fn interpret_take(entity: &Entity, world: &World, cache: &mut ResolveCache) -> Result<DnfFormula, InterpretError> {
    let candidates = resolve_object(&entity.object, world, cache);
    if candidates.is_empty() {
        return Err(InterpretError::NoMatchingObject);
    }
    if candidates.contains(FLOOR) {
        return Err(InterpretError::CannotTakeFloor);
    }
    if matches!(entity.quantifier, Quantifier::The | Quantifier::All) && candidates.len() != 1 {
        return Err(InterpretError::AmbiguousTake);
    }
    Ok(candidates.into_iter().map(|id| Conjunction(vec![Literal::Holding(id)])).collect())
}

fn interpret_drop(location: &Location, world: &World, cache: &mut ResolveCache) -> Result<DnfFormula, InterpretError> {
    let Some(held) = world.holding() else { return Err(InterpretError::NotHolding) };
    let subject: BTreeSet<_> = BTreeSet::from([held.to_string()]);
    let targets = resolve_object(&location.entity.object, world, cache);
    combine(&subject, Quantifier::Any, &targets, location.entity.quantifier, location.relation, world)
}

fn interpret_move(
    entity: &Entity,
    location: &Location,
    world: &World,
    cache: &mut ResolveCache,
) -> Result<DnfFormula, InterpretError> {
    let subjects = resolve_object(&entity.object, world, cache);
    let targets = resolve_object(&location.entity.object, world, cache);
    combine(&subjects, entity.quantifier, &targets, location.entity.quantifier, location.relation, world)
}

/// The interpreter's batch entry point (§6): interprets every parse
/// independently, keeps only those yielding a satisfiable DNF, and raises a
/// single joined error only when none survive.
pub fn interpret_all<T>(parses: Vec<Parse<T>>, world: &World) -> Result<Vec<Interpreted<T>>, InterpretError> {
    let mut survivors = Vec::new();
    let mut messages = Vec::new();

    for parse in parses {
        match interpret_command(&parse.command, world) {
            Ok(dnf) if dnf.is_satisfiable() => {
                info!(target: "interpreter", "parse accepted: {} disjunct(s)", dnf.0.len());
                survivors.push(Interpreted { command: parse.command, extra: parse.extra, dnf });
            }
            Ok(_) => {
                warn!(target: "interpreter", "parse produced an empty (unsatisfiable) DNF");
                messages.push("Couldn't find any matching object".to_string());
            }
            Err(err) => {
                warn!(target: "interpreter", "parse rejected: {err}");
                messages.push(err.to_string());
            }
        }
    }

    if survivors.is_empty() {
        return Err(InterpretError::Joined(join_distinct(messages, " ; ")));
    }

    Ok(survivors)
}
