//! The three command shapes the parser hands to the interpreter (§3).

use serde::{Deserialize, Serialize};

use crate::description::{Entity, Location};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Take(Entity),
    Drop(Location),
    Move(Entity, Location),
}
