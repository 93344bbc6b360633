//! Pure physical-law predicate: may object `a` enter `relation` with object
//! `b`? Evaluated over object descriptions (form/size), never world
//! position.

use crate::world::{Form, Size, Thing};

/// A human-readable violation message, as demanded by §4.1/§7 (errors are
/// short strings, not structured data — the combiner de-duplicates and
/// joins them as plain text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation(pub String);

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn violation(msg: impl Into<String>) -> Violation {
    Violation(msg.into())
}

/// Checks relation `R(a, b)` against the fixed rule order from §4.1.
///
/// `a_id`/`b_id` are used only for the identity check (rule 3); `"floor"`
/// must be passed as the id whenever `a`/`b` is [`Thing::Floor`].
pub fn legal(relation: Relation, a_id: &str, a: Thing<'_>, b_id: &str, b: Thing<'_>) -> Result<(), Violation> {
    use Relation::*;

    // Rule 1: the floor can never be the subject of a relation.
    if a.is_floor() {
        return Err(violation("I cannot take the floor"));
    }

    // Rule 2: only ontop/above make sense with the floor as the target.
    if b.is_floor() && matches!(relation, Under | LeftOf | RightOf | Beside | Inside) {
        return Err(violation(format!("Nothing can be {relation:?} the floor")));
    }

    // Rule 3: an object cannot relate to itself.
    if a_id == b_id {
        return Err(violation("An object cannot relate to itself"));
    }

    // Rule 4: balls roll — they cannot sit ontop of anything but the floor.
    if a.form() == Some(Form::Ball) && relation == OnTop && !b.is_floor() {
        return Err(violation("Balls roll off of things, they can only be ontop the floor"));
    }

    // Rule 5: balls support nothing.
    if a.form() == Some(Form::Ball) && relation == Under {
        return Err(violation("Balls cannot support anything"));
    }

    // Rule 6: nothing rests on a ball.
    if b.form() == Some(Form::Ball) && matches!(relation, OnTop | Above) {
        return Err(violation("Nothing can be ontop of a ball"));
    }

    // Rule 7: only boxes have an interior.
    if relation == Inside && b.form() != Some(Form::Box) {
        return Err(violation("Only boxes have an inside"));
    }

    // Rule 8: box contents go "inside", not "ontop".
    if relation == OnTop && b.form() == Some(Form::Box) {
        return Err(violation("Things go inside boxes, not ontop of them"));
    }

    // Rule 9: same-size boxes/pyramids/planks don't fit inside a box.
    if matches!(a.form(), Some(Form::Pyramid | Form::Plank | Form::Box))
        && b.form() == Some(Form::Box)
        && relation == Inside
        && a.size() == b.size()
    {
        return Err(violation("Too bulky to fit inside a box of the same size"));
    }

    // Rule 10: boxes are unstable ontop of pyramids/bricks of comparable size.
    if a.form() == Some(Form::Box) && relation == OnTop && matches!(b.form(), Some(Form::Pyramid | Form::Brick)) {
        let both_small = a.size() == Some(Size::Small) && b.size() == Some(Size::Small);
        let both_large_on_pyramid =
            a.size() == Some(Size::Large) && b.size() == Some(Size::Large) && b.form() == Some(Form::Pyramid);
        if both_small || both_large_on_pyramid {
            return Err(violation("A box cannot rest stably there"));
        }
    }

    // Rule 11: a large object cannot be supported by a small one.
    if matches!(relation, Inside | OnTop) && a.size() == Some(Size::Large) && b.size() == Some(Size::Small) {
        return Err(violation("A large object cannot rest on something small"));
    }

    Ok(())
}

/// `legal()` specialised to the planner's drop action (§4.5): the relation
/// is always `ontop`, and the target is either the stack's current top or
/// the floor.
pub fn legal_drop(a_id: &str, a: Thing<'_>, target_id: &str, target: Thing<'_>) -> Result<(), Violation> {
    legal(Relation::OnTop, a_id, a, target_id, target)
}

/// The seven spatial relations a literal may assert, plus `holding` (kept
/// as a separate [`crate::formula::Literal`] variant since it is unary).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, enum_iterator::Sequence, enum_map::Enum)]
pub enum Relation {
    OnTop,
    Inside,
    Above,
    Under,
    LeftOf,
    RightOf,
    Beside,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Relation::OnTop => "ontop",
            Relation::Inside => "inside",
            Relation::Above => "above",
            Relation::Under => "under",
            Relation::LeftOf => "leftof",
            Relation::RightOf => "rightof",
            Relation::Beside => "beside",
        };
        f.write_str(s)
    }
}
