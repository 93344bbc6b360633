//! DNF goal formulas: `±R(a, b?)` literals grouped into conjunctions,
//! conjunctions grouped into a disjunction. Produced by the interpreter
//! (§4.3/§4.4), consumed by the planner's goal test (§4.6).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::physics::Relation;
use crate::world::{ObjectId, World};

/// A single relational atom. Every literal the interpreter ever produces is
/// affirmative — nothing in §4.3/§4.4 negates a relation — so unlike the
/// general `±R(a, b?)` notation there is no explicit sign here.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Literal {
    Holding(ObjectId),
    Relation { relation: Relation, a: ObjectId, b: ObjectId },
}

impl Literal {
    /// The `positional`/`holding` test from §4.2/§4.6: is this literal true
    /// in `world` right now, independent of physical-law legality?
    pub fn holds(&self, world: &World) -> bool {
        match self {
            Literal::Holding(a) => world.holding() == Some(a.as_str()),
            Literal::Relation { relation, a, b } => crate::resolver::positional(*relation, world, a, b),
        }
    }

    /// Every object id this literal mentions. Callers use this to check
    /// that each one exists in the catalogue or is `"floor"`.
    pub fn referenced_ids(&self) -> impl Iterator<Item = &str> {
        match self {
            Literal::Holding(a) => vec![a.as_str()].into_iter(),
            Literal::Relation { a, b, .. } => vec![a.as_str(), b.as_str()].into_iter(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Holding(a) => write!(f, "holding({a})"),
            Literal::Relation { relation, a, b } => write!(f, "{relation}({a},{b})"),
        }
    }
}

/// Ordered list of literals interpreted as a logical AND. Kept as a `Vec`
/// rather than a `BTreeSet` to preserve the resolver's argument order for
/// readability, but equality/idempotence (§8 invariant 5) compares
/// conjunctions as a set of literals via [`Conjunction::literal_set`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Conjunction(pub Vec<Literal>);

impl Conjunction {
    pub fn literal_set(&self) -> BTreeSet<Literal> {
        self.0.iter().cloned().collect()
    }

    pub fn holds(&self, world: &World) -> bool {
        self.0.iter().all(|lit| lit.holds(world))
    }
}

impl FromIterator<Literal> for Conjunction {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Conjunction(iter.into_iter().collect())
    }
}

/// Ordered list of conjunctions interpreted as a logical OR. An empty DNF is
/// unsatisfiable.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DnfFormula(pub Vec<Conjunction>);

impl DnfFormula {
    pub fn is_satisfiable(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn holds(&self, world: &World) -> bool {
        self.0.iter().any(|c| c.holds(world))
    }

    /// Set-of-conjunctions equality, used by the idempotence property (§8
    /// invariant 5): two DNFs are equal if each conjunction's literal set
    /// matches some conjunction's literal set in the other, regardless of
    /// conjunction or literal order.
    pub fn semantically_eq(&self, other: &DnfFormula) -> bool {
        let lhs: BTreeSet<BTreeSet<Literal>> = self.0.iter().map(Conjunction::literal_set).collect();
        let rhs: BTreeSet<BTreeSet<Literal>> = other.0.iter().map(Conjunction::literal_set).collect();
        lhs == rhs
    }
}

impl FromIterator<Conjunction> for DnfFormula {
    fn from_iter<I: IntoIterator<Item = Conjunction>>(iter: I) -> Self {
        DnfFormula(iter.into_iter().collect())
    }
}
