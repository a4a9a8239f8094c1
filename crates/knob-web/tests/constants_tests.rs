// Host-side checks for the web frontend's class names and page constants.
// The crate is wasm-only, so the constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn base_classes_share_the_block_prefix() {
    for class in [CONTAINER_CLASS, INPUT_CLASS, VISUAL_CLASS] {
        assert!(class.starts_with("knob-input__"), "{class}");
    }
    let mut all = vec![
        CONTAINER_CLASS,
        INPUT_CLASS,
        VISUAL_CLASS,
        STANDARD_KNOB_CLASS,
        GRIP_DIAL_CLASS,
    ];
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 5);
}

#[test]
fn class_names_are_single_tokens() {
    for class in [
        CONTAINER_CLASS,
        INPUT_CLASS,
        VISUAL_CLASS,
        STANDARD_KNOB_CLASS,
        GRIP_DIAL_CLASS,
    ] {
        assert!(!class.is_empty());
        assert!(!class.contains(char::is_whitespace), "{class:?}");
    }
}

#[test]
fn colors_fit_in_24_bits() {
    for c in [
        RING_BG_FILL,
        OUTLINE_DARK,
        SHADOW_DARK,
        DIAL_LIGHT,
        DIAL_DARK,
        HIGHLIGHT,
        GUIDE_RING,
        CHROME_BASE,
        WHITE,
    ] {
        assert!(c <= 0xff_ffff, "{c:#x}");
    }
    assert!(DIAL_LIGHT > DIAL_DARK);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn envelope_viewbox_and_point_sizes() {
    let parts: Vec<f64> = ENVELOPE_VIEWBOX
        .split_whitespace()
        .map(|p| p.parse().unwrap())
        .collect();
    assert_eq!(parts, vec![0.0, 0.0, 300.0, 100.0]);
    assert!(ENVELOPE_POINT_RADIUS > ENVELOPE_STROKE_WIDTH);
    assert!((0.0..=1.0).contains(&ENVELOPE_FILL_DARKEN));
}
