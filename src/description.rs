//! Object description trees, as produced by the (external) parser. Visited
//! by case, not by a class hierarchy — the variants are a plain sum type,
//! never a trait object.

use serde::{Deserialize, Serialize};

use crate::physics::Relation;
use crate::world::{Color, Form, Size};

/// `form ∈ {brick, plank, ball, pyramid, box, table, floor, anyform}` as it
/// appears in a [`SimpleObject`] — the wildcard and floor spellings have no
/// equivalent in [`Form`], which only names real catalogue forms.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FormSpec {
    Any,
    Floor,
    Exact(Form),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimpleObject {
    pub form: FormSpec,
    pub size: Option<Size>,
    pub color: Option<Color>,
}

impl SimpleObject {
    pub fn any() -> Self {
        SimpleObject { form: FormSpec::Any, size: None, color: None }
    }

    pub fn floor() -> Self {
        SimpleObject { form: FormSpec::Floor, size: None, color: None }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Quantifier {
    The,
    Any,
    All,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub quantifier: Quantifier,
    pub object: ObjectDescription,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub relation: Relation,
    pub entity: Entity,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SetOperator {
    Or,
    Except,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RelativeObject {
    pub object: ObjectDescription,
    pub location: Location,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ComplexObject {
    pub object1: ObjectDescription,
    pub object2: ObjectDescription,
    pub operator: SetOperator,
}

/// The tagged sum: `Simple | Relative | Complex`, matching §3 exactly. The
/// recursive variants box their payload only to give the enum a finite
/// size; the shape itself is a plain sum type, never a trait object.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ObjectDescription {
    Simple(SimpleObject),
    Relative(Box<RelativeObject>),
    Complex(Box<ComplexObject>),
}

impl ObjectDescription {
    pub fn relative(object: ObjectDescription, location: Location) -> Self {
        ObjectDescription::Relative(Box::new(RelativeObject { object, location }))
    }

    pub fn complex(object1: ObjectDescription, object2: ObjectDescription, operator: SetOperator) -> Self {
        ObjectDescription::Complex(Box::new(ComplexObject { object1, object2, operator }))
    }
}
