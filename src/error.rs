//! The two error classes of §4.9/§7, both surfaced as short human-readable
//! strings: a handful of named terminal outcomes plus a catch-all that
//! carries an already-formatted message (physical-law violations, joined
//! multi-parse failures).

use thiserror::Error;

use crate::physics::Relation;

/// Everything that can stop the interpreter (§4.2–§4.4) from producing a
/// non-empty DNF for a single parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("Couldn't find any matching object")]
    NoMatchingObject,
    #[error("Couldn't find any matching destination")]
    NoMatchingDestination,
    #[error("Too many matching objects for 'the'")]
    AmbiguousObject,
    #[error("Too many matching destinations for 'the'")]
    AmbiguousDestination,
    #[error("Things can only be {0} exactly one object")]
    TooManyDestinations(Relation),
    #[error("Only 1 thing can be {0} another object")]
    TooManySubjects(Relation),
    #[error("I cannot take the floor")]
    CannotTakeFloor,
    #[error("You can only take one object at a time")]
    AmbiguousTake,
    #[error("The arm isn't holding anything")]
    NotHolding,
    /// A de-duplicated, `"; "`-joined set of physical-law violations — the
    /// combiner's fallback when no `(a,b)` pair in the cross product is
    /// legal (§4.3).
    #[error("{0}")]
    Physics(String),
    /// The batch entry point's fallback when every parse in a request
    /// failed (§6): the distinct per-parse messages joined with `" ; "`.
    #[error("{0}")]
    Joined(String),
}

/// Terminal planner outcomes (§4.7/§7). The search never returns a partial
/// plan, so there is nothing between "found a plan" and these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("timeout")]
    Timeout,
    #[error("failure")]
    Failure,
    /// The batch entry point's fallback when every parse's plan failed.
    #[error("{0}")]
    Joined(String),
}

/// De-duplicates and joins error messages with `"; "`, matching §4.3's
/// "de-duplicated before joining" instruction for physical-law violations
/// and §6/§7's joined multi-parse messages.
pub(crate) fn join_distinct(messages: impl IntoIterator<Item = String>, sep: &str) -> String {
    let mut seen = Vec::new();
    for msg in messages {
        if !seen.contains(&msg) {
            seen.push(msg);
        }
    }
    seen.join(sep)
}
