// Host-side tests for the drag state machine.

use glam::DVec2;
use knob_core::*;

fn percent_config() -> KnobConfig {
    KnobConfig {
        min: 0.0,
        max: 100.0,
        initial: Some(50.0),
        ..Default::default()
    }
}

fn setup(cfg: &KnobConfig) -> (DragController, ValueModel) {
    (DragController::new(cfg), cfg.value_model())
}

fn start(source: DragSource, x: f64, y: f64) -> Gesture {
    Gesture::Start {
        source,
        pos: DVec2::new(x, y),
        center: DVec2::new(20.0, 20.0),
    }
}

fn move_to(source: DragSource, x: f64, y: f64) -> Gesture {
    Gesture::Move {
        source,
        pos: DVec2::new(x, y),
        primary_held: true,
    }
}

#[test]
fn vertical_drag_maps_pixels_through_resistance() {
    let (mut drag, mut model) = setup(&percent_config());
    // 100 base resistance over a 100-wide range: 3px per unit
    assert_eq!(
        drag.handle(start(DragSource::Mouse, 0.0, 100.0), &mut model),
        Outcome::Started { superseded: false }
    );
    assert_eq!(model.value(), 50.0);

    let out = drag.handle(move_to(DragSource::Mouse, 0.0, 70.0), &mut model);
    assert_eq!(out, Outcome::Updated { value: 60.0 });

    let out = drag.handle(
        Gesture::End {
            source: DragSource::Mouse,
            pos: DVec2::new(0.0, 70.0),
        },
        &mut model,
    );
    assert_eq!(out, Outcome::Finalized { value: 60.0 });
    assert!(!drag.is_dragging());
}

#[test]
fn two_pixels_per_unit_reaches_sixty_five() {
    let cfg = KnobConfig {
        drag_resistance: 200.0 / 3.0,
        ..percent_config()
    };
    let (mut drag, mut model) = setup(&cfg);
    drag.handle(start(DragSource::Mouse, 0.0, 100.0), &mut model);
    drag.handle(move_to(DragSource::Mouse, 0.0, 70.0), &mut model);
    assert!((model.value() - 65.0).abs() < 1e-9);
}

#[test]
fn drag_is_relative_to_gesture_start_and_clamped() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Mouse, 0.0, 500.0), &mut model);
    drag.handle(move_to(DragSource::Mouse, 0.0, 0.0), &mut model);
    assert_eq!(model.value(), 100.0);
    drag.handle(move_to(DragSource::Mouse, 0.0, 1000.0), &mut model);
    assert_eq!(model.value(), 0.0);
    // back to the origin restores the base value
    drag.handle(move_to(DragSource::Mouse, 0.0, 500.0), &mut model);
    assert_eq!(model.value(), 50.0);
}

#[test]
fn horizontal_drag_increases_to_the_right() {
    let cfg = KnobConfig {
        drag_mode: DragMode::Horizontal,
        ..percent_config()
    };
    let (mut drag, mut model) = setup(&cfg);
    drag.handle(start(DragSource::Mouse, 100.0, 0.0), &mut model);
    drag.handle(move_to(DragSource::Mouse, 130.0, 0.0), &mut model);
    assert_eq!(model.value(), 60.0);
    // vertical motion is irrelevant
    drag.handle(move_to(DragSource::Mouse, 130.0, -300.0), &mut model);
    assert_eq!(model.value(), 60.0);
}

#[test]
fn angular_bearing_examples() {
    let c = DVec2::new(20.0, 20.0);
    assert!(bearing(c, DVec2::new(20.0, 0.0)).abs() < 1e-12);
    assert!((bearing(c, DVec2::new(40.0, 20.0)) - 0.25).abs() < 1e-12);
    assert!((bearing(c, DVec2::new(20.0, 40.0)) - 0.5).abs() < 1e-12);
    assert!((bearing(c, DVec2::new(0.0, 20.0)) - 0.75).abs() < 1e-12);
}

#[test]
fn angular_mode_sets_absolute_value() {
    let cfg = KnobConfig {
        drag_mode: DragMode::Angular { center: None },
        ..Default::default()
    };
    let (mut drag, mut model) = setup(&cfg);
    drag.handle(start(DragSource::Mouse, 30.0, 5.0), &mut model);
    assert_eq!(model.value(), 0.5);

    drag.handle(move_to(DragSource::Mouse, 20.0, 0.0), &mut model);
    assert!(model.value().abs() < 1e-12);

    drag.handle(move_to(DragSource::Mouse, 20.0, 40.0), &mut model);
    assert!((model.value() - 0.5).abs() < 1e-12);
}

#[test]
fn angular_pointer_on_center_keeps_value() {
    let cfg = KnobConfig {
        drag_mode: DragMode::Angular { center: None },
        ..Default::default()
    };
    let (mut drag, mut model) = setup(&cfg);
    drag.handle(start(DragSource::Mouse, 20.0, 0.0), &mut model);
    drag.handle(move_to(DragSource::Mouse, 40.0, 20.0), &mut model);
    assert!((model.value() - 0.25).abs() < 1e-12);
    drag.handle(move_to(DragSource::Mouse, 20.0, 20.0), &mut model);
    assert!((model.value() - 0.25).abs() < 1e-12);
}

#[test]
fn angular_smoothing_damps_large_jumps_only() {
    let cfg = KnobConfig {
        drag_mode: DragMode::Angular { center: None },
        smoothing: Some(Smoothing {
            threshold: 0.25,
            factor: 0.2,
        }),
        ..Default::default()
    };
    let (mut drag, mut model) = setup(&cfg);
    drag.handle(start(DragSource::Mouse, 20.0, 40.0), &mut model);

    // 0.5 -> 0.0 is a jump of 0.5: only a fifth of it is applied
    drag.handle(move_to(DragSource::Mouse, 20.0, 0.0), &mut model);
    assert!((model.value() - 0.4).abs() < 1e-12);

    // 0.4 -> 0.25 is under the threshold: applied in full
    drag.handle(move_to(DragSource::Mouse, 40.0, 20.0), &mut model);
    assert!((model.value() - 0.25).abs() < 1e-12);
}

#[test]
fn mouse_move_without_primary_button_finalizes() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Mouse, 0.0, 100.0), &mut model);
    let out = drag.handle(
        Gesture::Move {
            source: DragSource::Mouse,
            pos: DVec2::new(0.0, 94.0),
            primary_held: false,
        },
        &mut model,
    );
    assert_eq!(out, Outcome::Finalized { value: 52.0 });
    assert!(!drag.is_dragging());
}

#[test]
fn foreign_touches_never_mutate() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Touch(1), 0.0, 100.0), &mut model);
    let before = *drag.state();

    let ignored = [
        move_to(DragSource::Touch(2), 0.0, 0.0),
        Gesture::End {
            source: DragSource::Touch(2),
            pos: DVec2::new(0.0, 0.0),
        },
        Gesture::Cancel {
            source: DragSource::Touch(2),
        },
        move_to(DragSource::Mouse, 0.0, 0.0),
    ];
    for g in ignored {
        assert_eq!(drag.handle(g, &mut model), Outcome::Ignored);
        assert_eq!(model.value(), 50.0);
        assert_eq!(*drag.state(), before);
    }

    assert_eq!(
        drag.handle(move_to(DragSource::Touch(1), 0.0, 97.0), &mut model),
        Outcome::Updated { value: 51.0 }
    );
}

#[test]
fn touch_cancel_clears_without_update() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Touch(3), 0.0, 100.0), &mut model);
    drag.handle(move_to(DragSource::Touch(3), 0.0, 97.0), &mut model);
    assert_eq!(
        drag.handle(
            Gesture::Cancel {
                source: DragSource::Touch(3)
            },
            &mut model
        ),
        Outcome::Cancelled
    );
    assert_eq!(model.value(), 51.0);
    assert!(!drag.is_dragging());
}

#[test]
fn new_gesture_supersedes_old_without_update() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Mouse, 0.0, 100.0), &mut model);
    drag.handle(move_to(DragSource::Mouse, 0.0, 70.0), &mut model);

    let out = drag.handle(start(DragSource::Touch(9), 0.0, 0.0), &mut model);
    assert_eq!(out, Outcome::Started { superseded: true });
    assert_eq!(model.value(), 60.0);

    let session = drag.session().copied().expect("session");
    assert_eq!(session.source, DragSource::Touch(9));
    assert_eq!(session.base_value, 60.0);

    // the stale mouse stream is now foreign
    assert_eq!(
        drag.handle(move_to(DragSource::Mouse, 0.0, 0.0), &mut model),
        Outcome::Ignored
    );
}

#[test]
fn wheel_is_single_tick() {
    let (mut drag, mut model) = setup(&percent_config());
    // 100 base over a 100-wide range: 40 delta units per unit
    let out = drag.handle(Gesture::Wheel { delta_y: 100.0 }, &mut model);
    assert_eq!(
        out,
        Outcome::Wheel {
            value: 47.5,
            superseded: false
        }
    );
    assert!(!drag.is_dragging());

    drag.handle(Gesture::Wheel { delta_y: -200.0 }, &mut model);
    assert_eq!(model.value(), 52.5);
}

#[test]
fn wheel_clears_an_active_drag() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Touch(1), 0.0, 100.0), &mut model);
    let out = drag.handle(Gesture::Wheel { delta_y: 40.0 }, &mut model);
    assert_eq!(
        out,
        Outcome::Wheel {
            value: 49.0,
            superseded: true
        }
    );
    assert!(!drag.is_dragging());
}

#[test]
fn reset_restores_initial_and_clears_drag() {
    let (mut drag, mut model) = setup(&percent_config());
    drag.handle(start(DragSource::Mouse, 0.0, 100.0), &mut model);
    drag.handle(move_to(DragSource::Mouse, 0.0, 40.0), &mut model);
    assert_eq!(model.value(), 70.0);

    assert_eq!(
        drag.handle(Gesture::Reset, &mut model),
        Outcome::Reset {
            value: 50.0,
            superseded: true
        }
    );
    assert!(!drag.is_dragging());

    assert_eq!(
        drag.handle(Gesture::Reset, &mut model),
        Outcome::Reset {
            value: 50.0,
            superseded: false
        }
    );
}

#[test]
fn stray_end_when_idle_is_ignored() {
    let (mut drag, mut model) = setup(&percent_config());
    let out = drag.handle(
        Gesture::End {
            source: DragSource::Mouse,
            pos: DVec2::new(0.0, 0.0),
        },
        &mut model,
    );
    assert_eq!(out, Outcome::Ignored);
    assert_eq!(model.value(), 50.0);
}
