//! Interpreter and A* motion planner for the Shrdlite blocks-world robot.
//!
//! This crate is the reasoning core only: it consumes parsed command trees
//! and a world snapshot and produces a DNF goal formula (the interpreter,
//! §4.2–§4.4) and, from that formula, a minimal arm-action plan (the
//! planner, §4.5–§4.8). The grammar/parser, the CLI/web shell, and the
//! concrete world catalogues are external collaborators and ship no binary
//! here — see [`interpreter::interpret_all`] and [`planner::plan_all`] for
//! the two entry points an embedder calls in sequence.

pub mod astar;
pub mod combiner;
pub mod command;
pub mod config;
pub mod description;
pub mod error;
pub mod formula;
pub mod graph;
pub mod heuristic;
pub mod interpreter;
pub mod physics;
pub mod planner;
pub mod resolver;
pub mod world;

pub use command::Command;
pub use config::{Config, PlannerConfig};
pub use error::{InterpretError, PlanError};
pub use formula::{Conjunction, DnfFormula, Literal};
pub use interpreter::{Interpreted, Parse, interpret_all, interpret_command};
pub use planner::{Planned, plan_all, plan_for_dnf};
pub use world::World;

/// Convenience glue chaining the two entry points of §6 (`interpret_all`
/// then `plan_all`) into a single call, the way the teacher's `main.rs`
/// chains its own multi-stage pipeline (encode, solve, validate) into one
/// `anyhow::Result` rather than leaving every caller to juggle two distinct
/// typed errors by hand. Embedders that want the typed `InterpretError`/
/// `PlanError` distinction should call the two stages directly instead.
pub fn run<T>(parses: Vec<Parse<T>>, world: &World, config: &PlannerConfig) -> anyhow::Result<Vec<Planned<T>>> {
    use anyhow::Context;

    let interpreted = interpret_all(parses, world).context("interpretation failed")?;
    let planned = plan_all(interpreted, world, config).context("planning failed")?;
    Ok(planned)
}
