//! Minimal stand-ins for the "small"/"medium" world catalogues §8's
//! concrete scenarios reference. The real catalogues are an external
//! collaborator, so these are built directly as Rust values for test
//! purposes only — they are not part of the public API.

use std::collections::HashMap;

use shrdlite_core::world::{Attributes, Color, Form, Size, World};

/// Installs a logger so `cargo test -- --nocapture` surfaces the
/// `target: "interpreter"`/`target: "planner"` records described in §4.10.
/// Safe to call from every test: subsequent calls after the first are
/// no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Five columns: a large blue table, a small blue box, a large white ball
/// stacked on a small black ball, and two more large boxes (red, green) —
/// enough boxes and balls to exercise §8 scenario 2's five-way disjunction.
pub fn small_world() -> World {
    let mut objects = HashMap::new();
    objects.insert("LargeBlueTable".to_string(), Attributes { form: Form::Table, size: Size::Large, color: Color::Blue });
    objects.insert("SmallBlueBox".to_string(), Attributes { form: Form::Box, size: Size::Small, color: Color::Blue });
    objects.insert("LargeWhiteBall".to_string(), Attributes { form: Form::Ball, size: Size::Large, color: Color::White });
    objects.insert("SmallBlackBall".to_string(), Attributes { form: Form::Ball, size: Size::Small, color: Color::Black });
    objects.insert("LargeRedBox".to_string(), Attributes { form: Form::Box, size: Size::Large, color: Color::Red });
    objects.insert("LargeGreenBox".to_string(), Attributes { form: Form::Box, size: Size::Large, color: Color::Green });

    World::new(
        vec![
            vec!["LargeBlueTable".to_string()],
            vec!["SmallBlueBox".to_string()],
            vec!["LargeWhiteBall".to_string(), "SmallBlackBall".to_string()],
            vec!["LargeRedBox".to_string()],
            vec!["LargeGreenBox".to_string()],
        ],
        0,
        None,
        objects,
    )
}

/// Enough boxes, pyramids, and planks to exercise every physics rule at
/// once, spread over five columns.
pub fn medium_world() -> World {
    let mut objects = HashMap::new();
    objects.insert("LargeBox".to_string(), Attributes { form: Form::Box, size: Size::Large, color: Color::Red });
    objects.insert("LargePyramid".to_string(), Attributes { form: Form::Pyramid, size: Size::Large, color: Color::Green });
    objects.insert("SmallBox".to_string(), Attributes { form: Form::Box, size: Size::Small, color: Color::Yellow });
    objects.insert("SmallPyramid".to_string(), Attributes { form: Form::Pyramid, size: Size::Small, color: Color::Black });
    objects.insert("LargePlank".to_string(), Attributes { form: Form::Plank, size: Size::Large, color: Color::White });
    objects.insert("SmallBrick".to_string(), Attributes { form: Form::Brick, size: Size::Small, color: Color::Red });

    World::new(
        vec![
            vec!["LargeBox".to_string()],
            vec!["LargePyramid".to_string()],
            vec!["SmallBox".to_string()],
            vec!["SmallPyramid".to_string()],
            vec!["LargePlank".to_string(), "SmallBrick".to_string()],
        ],
        0,
        None,
        objects,
    )
}
