//! The planner's batch entry point (§6): turns each interpreted parse's DNF
//! goal into an action string, using the A* engine (§4.7) over the world
//! state graph (§4.5) with the heuristic bank (§4.8) and the goal test of
//! §4.6 (already implemented by [`DnfFormula::holds`]).

use log::{info, warn};

use crate::astar::{self, Outcome};
use crate::config::PlannerConfig;
use crate::error::{PlanError, join_distinct};
use crate::formula::DnfFormula;
use crate::heuristic::dnf_cost;
use crate::interpreter::Interpreted;
use crate::world::World;

/// The sentinel for a goal already true in the start world (§6): the
/// search still runs, but its path is empty.
pub const ALREADY_TRUE: &str = "The interpretation is already true!";

/// A parse with a complete plan attached.
#[derive(Clone, Debug)]
pub struct Planned<T> {
    pub command: crate::command::Command,
    pub extra: T,
    pub dnf: DnfFormula,
    pub plan: String,
}

/// Plans a single DNF goal from `world`, per §4.6/§4.7.
pub fn plan_for_dnf(dnf: &DnfFormula, world: &World, config: &PlannerConfig) -> Result<String, PlanError> {
    let outcome = astar::search(
        world.clone(),
        |state| dnf.holds(state),
        |state| dnf_cost(dnf, state),
        config.timeout(),
        config.max_nodes,
    );

    match outcome {
        Outcome::Success(result) => {
            info!(
                target: "planner",
                "found a plan of length {} after seeing {} nodes",
                result.cost, result.nodes_seen
            );
            Ok(if result.plan.is_empty() { ALREADY_TRUE.to_string() } else { result.plan })
        }
        Outcome::Timeout => {
            warn!(target: "planner", "search timed out after {:?}", config.timeout());
            Err(PlanError::Timeout)
        }
        Outcome::Failure => {
            warn!(target: "planner", "frontier exhausted without reaching the goal");
            Err(PlanError::Failure)
        }
    }
}

/// The planner's batch entry point (§6): plans every interpreted parse
/// independently, keeps only the ones that found a plan, and raises a
/// single joined error only when none did.
pub fn plan_all<T>(
    interpreted: Vec<Interpreted<T>>,
    world: &World,
    config: &PlannerConfig,
) -> Result<Vec<Planned<T>>, PlanError> {
    let mut survivors = Vec::new();
    let mut messages = Vec::new();

    for parse in interpreted {
        match plan_for_dnf(&parse.dnf, world, config) {
            Ok(plan) => {
                survivors.push(Planned { command: parse.command, extra: parse.extra, dnf: parse.dnf, plan });
            }
            Err(err) => messages.push(err.to_string()),
        }
    }

    if survivors.is_empty() {
        return Err(PlanError::Joined(join_distinct(messages, " ; ")));
    }

    Ok(survivors)
}
