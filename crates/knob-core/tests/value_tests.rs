// Host-side tests for the value model and configuration.

use knob_core::*;
use rand::prelude::*;

fn model(min: f64, max: f64) -> ValueModel {
    ValueModel::new(min, max, Step::Any, 0.5 * (min + max))
}

#[test]
fn clamp_and_normalize_stay_in_bounds_for_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let min: f64 = rng.gen_range(-500.0..500.0);
        let max = min + rng.gen_range(0.01..1000.0);
        let m = model(min, max);
        for _ in 0..50 {
            let v: f64 = rng.gen_range(-5000.0..5000.0);
            let c = m.clamp(v);
            assert!(c >= min && c <= max, "clamp({v}) = {c} outside {min}..{max}");
            let n = m.normalize(c);
            assert!((0.0..=1.0).contains(&n), "normalize({c}) = {n}");
        }
    }
}

#[test]
fn expand_inverts_normalize_within_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let m = model(-100.0, 100.0);
    for _ in 0..500 {
        let v: f64 = rng.gen_range(-150.0..150.0);
        let round_trip = m.expand(m.normalize(v));
        let expected = m.clamp(v);
        // below-range values are not clamped by expand; only compare in range
        if v >= m.min() {
            assert!((round_trip - expected).abs() < 1e-9, "v={v} rt={round_trip}");
        }
    }
}

#[test]
fn expand_is_clamped_to_max() {
    let m = model(0.0, 10.0);
    assert_eq!(m.expand(1.5), 10.0);
    assert_eq!(m.expand(1.0), 10.0);
    assert!((m.expand(0.25) - 2.5).abs() < 1e-12);
}

#[test]
fn set_clamps_and_nan_falls_to_min() {
    let mut m = model(0.0, 1.0);
    assert_eq!(m.set(3.0), 1.0);
    assert_eq!(m.set(-3.0), 0.0);
    assert_eq!(m.set(f64::NAN), 0.0);
}

#[test]
fn step_snaps_to_grid_from_min() {
    let mut m = ValueModel::new(0.0, 100.0, Step::Every(10.0), 50.0);
    assert_eq!(m.set(47.0), 50.0);
    assert_eq!(m.set(44.0), 40.0);

    let mut m = ValueModel::new(0.0, 100.0, Step::Every(30.0), 50.0);
    // initial is snapped too
    assert_eq!(m.initial(), 60.0);
    // never snaps past max
    assert_eq!(m.set(100.0), 90.0);
    assert_eq!(m.set(1000.0), 90.0);
}

#[test]
fn fractional_step_reaches_max_and_keeps_initial() {
    let mut m = ValueModel::new(0.0, 0.3, Step::Every(0.1), 0.0);
    assert_eq!(m.set(0.3), 0.3);
    assert_eq!(m.set(0.26), 0.3);
    assert_eq!(m.set(0.14), 0.1);

    let mut m = ValueModel::new(0.0, 0.7, Step::Every(0.1), 0.7);
    assert_eq!(m.initial(), 0.7);
    assert_eq!(m.set(1e9), 0.7);
    assert_eq!(m.set(0.61), 0.6);
    m.set(0.2);
    assert_eq!(m.reset(), 0.7);

    let mut m = ValueModel::new(-1.0, 1.0, Step::Every(0.05), 0.35);
    assert_eq!(m.initial(), 0.35);
    assert_eq!(m.set(1.0), 1.0);
    assert_eq!(m.set(-0.124), -0.1);
}

#[test]
fn fractional_step_values_land_on_grid() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut m = ValueModel::new(0.5, 2.0, Step::Every(0.1), 1.0);
    for _ in 0..500 {
        let v = m.set(rng.gen_range(0.0..3.0));
        assert!((0.5..=2.0).contains(&v), "{v}");
        // exact decimal, as a range input would report it
        assert_eq!(v, (v * 10.0).round() / 10.0, "off grid: {v}");
    }
}

#[test]
fn reset_returns_to_initial() {
    let mut m = ValueModel::new(-1.0, 1.0, Step::Any, 0.25);
    m.set(0.9);
    assert_eq!(m.reset(), 0.25);
    assert_eq!(m.value(), 0.25);
}

#[test]
fn step_attr_value_matches_range_input_syntax() {
    assert_eq!(Step::Any.attr_value(), "any");
    assert_eq!(Step::Every(0.5).attr_value(), "0.5");
}

#[test]
fn default_config_is_valid_and_centered() {
    let cfg = KnobConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.initial_value(), 0.5);
    assert_eq!(cfg.value_model().value(), 0.5);
}

#[test]
fn resistance_scales_with_range() {
    let cfg = KnobConfig {
        min: 0.0,
        max: 100.0,
        ..Default::default()
    };
    let r = cfg.resistance();
    assert!((r.drag - 3.0).abs() < 1e-12);
    assert!((r.wheel - 40.0).abs() < 1e-12);

    let wide = KnobConfig {
        min: -100.0,
        max: 100.0,
        ..Default::default()
    };
    assert!((wide.resistance().drag - 1.5).abs() < 1e-12);
}

#[test]
fn validate_rejects_bad_options() {
    let degenerate = KnobConfig {
        min: 1.0,
        max: 1.0,
        ..Default::default()
    };
    assert_eq!(
        degenerate.validate(),
        Err(KnobError::InvalidRange { min: 1.0, max: 1.0 })
    );

    let inverted = KnobConfig {
        min: 2.0,
        max: 1.0,
        ..Default::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(KnobError::InvalidRange { .. })
    ));

    let bad_drag = KnobConfig {
        drag_resistance: 0.0,
        ..Default::default()
    };
    assert_eq!(
        bad_drag.validate(),
        Err(KnobError::NonPositiveResistance("drag_resistance"))
    );

    let bad_step = KnobConfig {
        step: Step::Every(-1.0),
        ..Default::default()
    };
    assert_eq!(bad_step.validate(), Err(KnobError::InvalidStep(-1.0)));

    let bad_smoothing = KnobConfig {
        smoothing: Some(Smoothing {
            threshold: 0.0,
            factor: 0.5,
        }),
        ..Default::default()
    };
    assert!(matches!(
        bad_smoothing.validate(),
        Err(KnobError::InvalidSmoothing { .. })
    ));

    let nan_initial = KnobConfig {
        initial: Some(f64::NAN),
        ..Default::default()
    };
    assert_eq!(
        nan_initial.validate(),
        Err(KnobError::NonFiniteOption("initial"))
    );
}

#[test]
fn out_of_range_initial_is_clamped() {
    let cfg = KnobConfig {
        min: 0.0,
        max: 10.0,
        initial: Some(25.0),
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.value_model().initial(), 10.0);
}
