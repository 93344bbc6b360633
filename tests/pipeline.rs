//! Whole interpret-then-plan pipeline tests against the world fixtures of
//! `common`, covering §8's concrete scenarios and boundary behaviors.

mod common;

use assertables::{assert_ge, assert_gt};
use shrdlite_core::description::{Entity, FormSpec, Location, ObjectDescription, Quantifier, SimpleObject};
use shrdlite_core::physics::Relation;
use shrdlite_core::world::{Color, Form, Size};
use shrdlite_core::{Command, InterpretError, Parse, PlannerConfig, interpret_all, interpret_command, plan_all};

fn simple(form: FormSpec, size: Option<Size>, color: Option<Color>) -> ObjectDescription {
    ObjectDescription::Simple(SimpleObject { form, size, color })
}

fn entity(quantifier: Quantifier, object: ObjectDescription) -> Entity {
    Entity { quantifier, object }
}

/// Scenario #1: "take a blue object" in the small world should resolve to
/// exactly the two blue objects.
#[test]
fn take_a_blue_object() {
    let world = common::small_world();
    let cmd = Command::Take(entity(Quantifier::Any, simple(FormSpec::Any, None, Some(Color::Blue))));
    let dnf = interpret_command(&cmd, &world).unwrap();
    assert_eq!(dnf.0.len(), 2);
}

/// Scenario #2: "put a ball in a box" should yield one disjunct per legal
/// (ball, box) pair, pruning the ones physics rejects — here, the single
/// large-ball-into-small-box pairing (rule 11).
#[test]
fn put_a_ball_in_a_box() {
    let world = common::small_world();
    let cmd = Command::Move(
        entity(Quantifier::Any, simple(FormSpec::Exact(Form::Ball), None, None)),
        Location { relation: Relation::Inside, entity: entity(Quantifier::Any, simple(FormSpec::Exact(Form::Box), None, None)) },
    );
    let dnf = interpret_command(&cmd, &world).unwrap();
    assert_eq!(dnf.0.len(), 5);
}

/// Scenario #3: "take a white object beside a blue object" should isolate
/// the single white ball next to the blue box.
#[test]
fn take_a_white_object_beside_a_blue_object() {
    let world = common::small_world();
    let white_beside_blue = ObjectDescription::relative(
        simple(FormSpec::Any, None, Some(Color::White)),
        Location { relation: Relation::Beside, entity: entity(Quantifier::Any, simple(FormSpec::Any, None, Some(Color::Blue))) },
    );
    let cmd = Command::Take(entity(Quantifier::Any, white_beside_blue));
    let dnf = interpret_command(&cmd, &world).unwrap();
    assert_eq!(dnf.0.len(), 1);
}

/// Scenario #4: "put all balls on the floor" is a single conjunction over
/// both balls, not a disjunction.
#[test]
fn put_all_balls_on_the_floor() {
    let world = common::small_world();
    let cmd = Command::Move(
        entity(Quantifier::All, simple(FormSpec::Exact(Form::Ball), None, None)),
        Location { relation: Relation::OnTop, entity: entity(Quantifier::The, simple(FormSpec::Floor, None, None)) },
    );
    let dnf = interpret_command(&cmd, &world).unwrap();
    assert_eq!(dnf.0.len(), 1);
    assert_eq!(dnf.0[0].0.len(), 2);
}

/// Scenario #5: "put a large box on a large pyramid" in the medium world
/// is a physical-law violation (rule 10: unstable).
#[test]
fn put_a_large_box_on_a_large_pyramid_is_a_physics_error() {
    let world = common::medium_world();
    let cmd = Command::Move(
        entity(Quantifier::The, simple(FormSpec::Exact(Form::Box), Some(Size::Large), None)),
        Location {
            relation: Relation::OnTop,
            entity: entity(Quantifier::The, simple(FormSpec::Exact(Form::Pyramid), Some(Size::Large), None)),
        },
    );
    assert!(matches!(interpret_command(&cmd, &world).unwrap_err(), InterpretError::Physics(_)));
}

/// Scenario #6: interpreting then planning "take a blue object" yields an
/// action string whose length is the search cost, ending with one of the
/// two blue objects held.
#[test]
fn take_a_blue_object_then_plan() {
    common::init_logging();
    let world = common::small_world();
    let cmd = Command::Take(entity(Quantifier::Any, simple(FormSpec::Any, None, Some(Color::Blue))));

    let interpreted = interpret_all(vec![Parse { command: cmd, extra: () }], &world).unwrap();
    let planned = plan_all(interpreted, &world, &PlannerConfig::default()).unwrap();

    assert_eq!(planned.len(), 1);
    let plan = &planned[0].plan;
    assert!(plan.chars().all(|c| "lrpd".contains(c)));
    assert_ge!(plan.len(), 1);

    let mut state = world.clone();
    for action in plan.chars() {
        state = match action {
            'l' => state.moved_arm(-1),
            'r' => state.moved_arm(1),
            'p' => state.picked().unwrap(),
            'd' => state.dropped().unwrap(),
            _ => unreachable!(),
        };
    }
    assert!(planned[0].dnf.holds(&state));
}

#[test]
fn take_the_floor_is_an_error() {
    let world = common::small_world();
    let cmd = Command::Take(entity(Quantifier::The, simple(FormSpec::Floor, None, None)));
    assert_eq!(interpret_command(&cmd, &world).unwrap_err(), InterpretError::CannotTakeFloor);
}

#[test]
fn put_a_large_box_in_a_small_box_is_an_error() {
    let world = common::medium_world();
    let cmd = Command::Move(
        entity(Quantifier::The, simple(FormSpec::Exact(Form::Box), Some(Size::Large), None)),
        Location {
            relation: Relation::Inside,
            entity: entity(Quantifier::The, simple(FormSpec::Exact(Form::Box), Some(Size::Small), None)),
        },
    );
    assert!(matches!(interpret_command(&cmd, &world).unwrap_err(), InterpretError::Physics(_)));
}

#[test]
fn dropping_with_nothing_held_is_an_error() {
    let world = common::small_world();
    let cmd = Command::Drop(Location { relation: Relation::OnTop, entity: entity(Quantifier::The, simple(FormSpec::Floor, None, None)) });
    assert_eq!(interpret_command(&cmd, &world).unwrap_err(), InterpretError::NotHolding);
}

#[test]
fn the_with_two_referents_is_ambiguous_one_referent_succeeds() {
    let world = common::small_world();
    let ambiguous = Command::Take(entity(Quantifier::The, simple(FormSpec::Exact(Form::Ball), None, None)));
    assert_eq!(interpret_command(&ambiguous, &world).unwrap_err(), InterpretError::AmbiguousTake);

    let unique = Command::Take(entity(Quantifier::The, simple(FormSpec::Exact(Form::Table), None, None)));
    assert!(interpret_command(&unique, &world).is_ok());
}

/// A world snapshot round-trips through JSON unchanged (§3: embedders
/// persist or replay a snapshot without the core knowing the storage
/// format).
#[test]
fn world_snapshot_round_trips_through_json() {
    let world = common::small_world();
    let json = serde_json::to_string(&world).expect("World derives Serialize");
    let restored: shrdlite_core::World = serde_json::from_str(&json).expect("World derives Deserialize");
    assert_eq!(world, restored);
}

/// The `run` convenience entry point (glue over `interpret_all`/`plan_all`)
/// succeeds end to end and fails with a readable message when every parse
/// is rejected.
#[test]
fn run_chains_interpretation_and_planning() {
    let world = common::small_world();
    let cmd = Command::Take(entity(Quantifier::Any, simple(FormSpec::Any, None, Some(Color::Blue))));
    let planned = shrdlite_core::run(vec![Parse { command: cmd, extra: () }], &world, &PlannerConfig::default())
        .expect("a blue object exists and is reachable in one pick");
    assert_eq!(planned.len(), 1);

    let bad = Command::Take(entity(Quantifier::The, simple(FormSpec::Floor, None, None)));
    let err = shrdlite_core::run(vec![Parse { command: bad, extra: () }], &world, &PlannerConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("interpretation failed"));
}

/// Every literal a successful interpretation produces refers to a real
/// catalogue id or the floor sentinel.
#[test]
fn every_literal_references_a_real_id_or_the_floor() {
    let world = common::small_world();
    let cmd = Command::Move(
        entity(Quantifier::Any, simple(FormSpec::Exact(Form::Ball), None, None)),
        Location { relation: Relation::Inside, entity: entity(Quantifier::Any, simple(FormSpec::Exact(Form::Box), None, None)) },
    );
    let dnf = interpret_command(&cmd, &world).unwrap();
    assert_gt!(dnf.0.len(), 0);
    for conjunction in &dnf.0 {
        for literal in &conjunction.0 {
            for id in literal.referenced_ids() {
                assert!(id == "floor" || world.objects().contains_key(id));
            }
        }
    }
}
