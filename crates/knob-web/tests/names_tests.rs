// Host-side tests for the SVG naming helpers.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod names {
    include!("../src/names.rs");
}

use names::*;

#[test]
fn kebab_case_converts_camel_case_attributes() {
    assert_eq!(kebab_case("strokeWidth"), "stroke-width");
    assert_eq!(kebab_case("strokeLinecap"), "stroke-linecap");
    assert_eq!(kebab_case("fill"), "fill");
    assert_eq!(kebab_case("stop-color"), "stop-color");
    assert_eq!(kebab_case("colorInterpolationFilters"), "color-interpolation-filters");
}

#[test]
fn kebab_case_keeps_native_camel_case_attributes() {
    assert_eq!(kebab_case("viewBox"), "viewBox");
    assert_eq!(kebab_case("preserveAspectRatio"), "preserveAspectRatio");
    assert_eq!(kebab_case("stdDeviation"), "stdDeviation");
}

#[test]
fn url_refs_and_instance_ids() {
    assert_eq!(url_ref("grad__dial"), "url(#grad__dial)");
    assert_eq!(instance_id("mask__grip", 3), "mask__grip--3");
}

#[test]
fn darken_matrix_keeps_alpha_row() {
    let m = darken_matrix(0.75, 0.05);
    assert!(m.starts_with("0.75 0 0 0 0.05"));
    assert!(m.ends_with("0 0 0 1 0"));
    assert_eq!(m.split_whitespace().count(), 20);
}

#[test]
fn percent_offsets() {
    assert_eq!(percent(85.0), "85%");
    assert_eq!(percent(12.5), "12.5%");
}
