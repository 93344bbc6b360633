//! The world snapshot: stacks, arm position, held object, and the object
//! catalogue — an immutable value wrapping a positional structure, with
//! small accessor methods rather than public fields.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use derive_more::IsVariant;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Object ids are opaque, globally-unique (within one snapshot) strings.
pub type ObjectId = String;

/// The reserved pseudo-object id. Never present in `World::objects`.
pub const FLOOR: &str = "floor";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Sequence, IsVariant)]
#[derive(Serialize, Deserialize)]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Sequence)]
#[derive(Serialize, Deserialize)]
pub enum Size {
    Small,
    Large,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Sequence)]
#[derive(Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Blue,
    Green,
    Yellow,
    White,
}

/// Catalogue entry for a real (non-floor) object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub form: Form,
    pub size: Size,
    pub color: Color,
}

/// A reference to a relation's argument: either a real object's attributes
/// or the floor sentinel. Keeps `legal()` in `physics.rs` from needing two
/// call signatures for "normal object" vs "the floor".
#[derive(Copy, Clone, Debug)]
pub enum Thing<'a> {
    Floor,
    Object(&'a Attributes),
}

impl Thing<'_> {
    pub fn is_floor(self) -> bool {
        matches!(self, Thing::Floor)
    }

    pub fn form(self) -> Option<Form> {
        match self {
            Thing::Floor => None,
            Thing::Object(attrs) => Some(attrs.form),
        }
    }

    pub fn size(self) -> Option<Size> {
        match self {
            Thing::Floor => None,
            Thing::Object(attrs) => Some(attrs.size),
        }
    }
}

/// Stack-coordinate position of an object. The floor is a sentinel position
/// that compares as "directly below every column" for `ontop`/`above`
/// purposes (see `positional` in `resolver.rs`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub col: isize,
    pub row: isize,
}

impl Position {
    pub const FLOOR: Position = Position { col: -1, row: -1 };
}

// `canonical_id`/`positional` reason about coordinates as a plain `(isize,
// isize)` pair; catch it at compile time if `Position` ever grows a field.
static_assertions::assert_eq_size!(Position, (isize, isize));

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Immutable world snapshot. Cloned functionally on every planner expansion
/// (§5: "world snapshots are value-like and are freshly cloned per expanded
/// successor"). Per §5's memory discipline ("the catalogue ... [is]
/// immutable and shared"), `objects` is held behind an `Rc` so that cloning
/// a node for a successor only deep-copies the stacks, not the catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    stacks: Vec<Vec<ObjectId>>,
    arm: usize,
    holding: Option<ObjectId>,
    objects: Rc<HashMap<ObjectId, Attributes>>,
}

impl World {
    pub fn new(
        stacks: Vec<Vec<ObjectId>>,
        arm: usize,
        holding: Option<ObjectId>,
        objects: HashMap<ObjectId, Attributes>,
    ) -> Self {
        debug_assert!(arm < stacks.len(), "arm column out of range");
        World { stacks, arm, holding, objects: Rc::new(objects) }
    }

    pub fn stacks(&self) -> &[Vec<ObjectId>] {
        &self.stacks
    }

    pub fn stack(&self, col: usize) -> &[ObjectId] {
        &self.stacks[col]
    }

    pub fn arm(&self) -> usize {
        self.arm
    }

    pub fn holding(&self) -> Option<&str> {
        self.holding.as_deref()
    }

    pub fn objects(&self) -> &HashMap<ObjectId, Attributes> {
        &self.objects
    }

    pub fn attributes(&self, id: &str) -> Option<&Attributes> {
        self.objects.get(id)
    }

    /// Every id currently in play: on some stack, or held.
    pub fn ids_in_play(&self) -> impl Iterator<Item = &str> {
        self.stacks.iter().flatten().map(String::as_str).chain(self.holding.as_deref())
    }

    /// `(col, row)` of `id`, or `Position::FLOOR` for the floor sentinel, or
    /// `None` if `id` is held or absent from every stack.
    pub fn position_of(&self, id: &str) -> Option<Position> {
        if id == FLOOR {
            return Some(Position::FLOOR);
        }
        for (col, stack) in self.stacks.iter().enumerate() {
            if let Some(row) = stack.iter().position(|x| x == id) {
                return Some(Position { col: col as isize, row: row as isize });
            }
        }
        None
    }

    /// Count of objects stacked above `id` within its own column. Zero if
    /// `id` is topmost, held, or the floor.
    pub fn count_on_top(&self, id: &str) -> usize {
        let Some(pos) = self.position_of(id) else { return 0 };
        if pos == Position::FLOOR {
            return 0;
        }
        let stack = &self.stacks[pos.col as usize];
        stack.len() - (pos.row as usize + 1)
    }

    /// The id on top of column `col`, if any. `None` for an empty stack.
    pub fn top_of(&self, col: usize) -> Option<&str> {
        self.stacks[col].last().map(String::as_str)
    }

    /// Move the arm one column left (`delta = -1`) or right (`delta = 1`).
    /// Caller is responsible for range-checking (§4.5's `l`/`r` legality).
    pub fn moved_arm(&self, delta: isize) -> World {
        let mut w = self.clone();
        w.arm = (w.arm as isize + delta) as usize;
        w
    }

    /// The `p` action (§4.5): move the top of the arm's column into
    /// `holding`. `None` if the arm is already holding something or the
    /// column is empty.
    pub fn picked(&self) -> Option<World> {
        if self.holding.is_some() || self.stacks[self.arm].is_empty() {
            return None;
        }
        let mut w = self.clone();
        let top = w.stacks[w.arm].pop().expect("checked non-empty above");
        w.holding = Some(top);
        Some(w)
    }

    /// The `d` action (§4.5): push `holding` onto the arm's column. Caller
    /// must have already checked `legal_drop`. `None` if nothing is held.
    pub fn dropped(&self) -> Option<World> {
        let held = self.holding.clone()?;
        let mut w = self.clone();
        w.arm_column_mut().push(held);
        w.holding = None;
        Some(w)
    }

    fn arm_column_mut(&mut self) -> &mut Vec<ObjectId> {
        let arm = self.arm;
        &mut self.stacks[arm]
    }

    /// The canonical node identity from §4.5/§6:
    /// `"<arm>,<holdingOrNull>,[[id,id],[…],…]"`. This is the single
    /// chokepoint for revisit detection in the planner — equal strings must
    /// mean equal world configurations.
    pub fn canonical_id(&self) -> String {
        let holding = self.holding.as_deref().unwrap_or("null");
        let mut out = format!("{},{},[", self.arm, holding);
        for (i, stack) in self.stacks.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('[');
            for (j, id) in stack.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                out.push_str(id);
            }
            out.push(']');
        }
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_world() -> World {
        let mut objects = HashMap::new();
        objects.insert(
            "a".to_string(),
            Attributes { form: Form::Ball, size: Size::Small, color: Color::White },
        );
        objects.insert(
            "b".to_string(),
            Attributes { form: Form::Box, size: Size::Large, color: Color::Blue },
        );
        World::new(vec![vec!["b".to_string(), "a".to_string()], vec![]], 0, None, objects)
    }

    #[test]
    fn canonical_id_round_trips_equal_worlds() {
        let w1 = sample_world();
        let w2 = sample_world();
        assert_eq!(w1.canonical_id(), w2.canonical_id());
    }

    #[test]
    fn canonical_id_differs_on_arm() {
        let w1 = sample_world();
        let mut w2 = sample_world();
        w2.arm = 1;
        assert_ne!(w1.canonical_id(), w2.canonical_id());
    }

    #[test]
    fn position_and_count_on_top() {
        let w = sample_world();
        assert_eq!(w.position_of("b"), Some(Position { col: 0, row: 0 }));
        assert_eq!(w.position_of("a"), Some(Position { col: 0, row: 1 }));
        assert_eq!(w.position_of(FLOOR), Some(Position::FLOOR));
        assert_eq!(w.count_on_top("b"), 1);
        assert_eq!(w.count_on_top("a"), 0);
    }

    #[test]
    fn pick_then_drop_round_trips() {
        let w = sample_world();
        let picked = w.picked().expect("stack has a top");
        assert_eq!(picked.holding(), Some("a"));
        assert_eq!(picked.stack(0), ["b"]);
        assert!(picked.picked().is_none(), "already holding something");

        let dropped = picked.dropped().expect("holding something");
        assert_eq!(dropped.holding(), None);
        assert_eq!(dropped.stack(0), ["b", "a"]);
        assert_eq!(dropped, w);
    }

    #[test]
    fn pick_on_empty_column_is_none() {
        let w = sample_world();
        assert!(w.moved_arm(1).picked().is_none());
    }

    #[test]
    fn moved_arm_changes_column() {
        let w = sample_world();
        assert_eq!(w.moved_arm(1).arm(), 1);
    }
}
