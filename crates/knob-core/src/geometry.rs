//! SVG path and transform math for the knob skins.
//!
//! All shapes live in a 40x40 viewBox centered on (20, 20). Angles for the
//! grip dial are measured clockwise from straight down, which is where the
//! dial's indicator rests at `min`.

use crate::constants::*;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

/// Filled arc style for the standard knob's indicator ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RingType {
    /// Grows clockwise from the bottom.
    #[default]
    Positive,
    /// Grows counter-clockwise from the bottom.
    Negative,
    /// Grows either way from the top; for bipolar ranges.
    Split,
}

/// Format a coordinate for path data: four decimals, trailing zeros trimmed.
pub fn num(v: f64) -> String {
    let r = (v * 1e4).round() / 1e4;
    // avoid "-0"
    let r = if r == 0.0 { 0.0 } else { r };
    r.to_string()
}

/// Ring path for the standard knob. `r` is the inner radius of the ring
/// background (radius minus half its stroke).
///
/// Uses two arcs instead of large-arc flags since a single arc collapses
/// as it nears a full turn.
pub fn ring_path(ring: RingType, r: f64, norm: f64) -> String {
    let c = VIEWBOX_CENTER;
    let theta = TAU * norm + FRAC_PI_2;
    let end_x = num(r * theta.cos() + c);
    let end_y = num(r * theta.sin() + c);
    let (rs, top) = (num(r), num(c - r));
    let mut d = String::with_capacity(64);
    match ring {
        RingType::Positive => {
            _ = write!(d, "M{c},{c}l0,{rs}");
            if norm > 0.5 {
                _ = write!(d, "A{rs},{rs},0,0,1,{c},{top}");
            }
            _ = write!(d, "A{rs},{rs},0,0,1,{end_x},{end_y}Z");
        }
        RingType::Negative => {
            _ = write!(d, "M{c},{c}l0,{rs}");
            if norm < 0.5 {
                _ = write!(d, "A{rs},{rs},0,0,0,{c},{top}");
            }
            _ = write!(d, "A{rs},{rs},0,0,0,{end_x},{end_y}Z");
        }
        RingType::Split => {
            let sweep = if norm < 0.5 { 0 } else { 1 };
            _ = write!(d, "M{c},{c}l0,-{rs}A{rs},{rs},0,0,{sweep},{end_x},{end_y}Z");
        }
    }
    d
}

/// Rotation for a value, interpolating between two angles in degrees.
#[inline]
pub fn rotation_deg(min_rotation: f64, max_rotation: f64, norm: f64) -> f64 {
    min_rotation + (max_rotation - min_rotation) * norm
}

/// SVG `transform` rotating about the viewBox center.
pub fn rotate_about_center(deg: f64) -> String {
    format!("rotate({} {c} {c})", num(deg), c = VIEWBOX_CENTER)
}

/// Point at radius `r`, `theta` radians clockwise from straight down.
#[inline]
pub fn polar(r: f64, theta: f64) -> DVec2 {
    let a = FRAC_PI_2 + theta;
    DVec2::new(VIEWBOX_CENTER + r * a.cos(), VIEWBOX_CENTER + r * a.sin())
}

/// Rotation bounds for the grip dial, defaulting to the first and last notch.
pub fn grip_rotation_bounds(
    guide_ticks: u32,
    min_rotation: Option<f64>,
    max_rotation: Option<f64>,
) -> (f64, f64) {
    let half_notch = 0.5 / guide_ticks as f64;
    (
        min_rotation.unwrap_or(half_notch * 360.0),
        max_rotation.unwrap_or((1.0 - half_notch) * 360.0),
    )
}

/// Guide arc running clockwise from `min_deg` over the top to `max_deg`.
pub fn guide_ring_path(min_deg: f64, max_deg: f64) -> String {
    let r = GRIP_GUIDE_RADIUS;
    let start = polar(r, min_deg.to_radians());
    let end = polar(r, max_deg.to_radians());
    let rs = num(r);
    format!(
        "M{},{}A{rs},{rs},0,0,1,{c},{top}A{rs},{rs},0,0,1,{},{}",
        num(start.x),
        num(start.y),
        num(end.x),
        num(end.y),
        c = VIEWBOX_CENTER,
        top = num(VIEWBOX_CENTER - r),
    )
}

/// Endpoints of the guide tick marks, evenly spread between the bounds.
pub fn guide_ticks(count: u32, min_deg: f64, max_deg: f64) -> Vec<(DVec2, DVec2)> {
    let (min_t, max_t) = (min_deg.to_radians(), max_deg.to_radians());
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| {
            let theta = min_t + i as f64 * (max_t - min_t) / last;
            (
                polar(GRIP_TICK_OUTER, theta),
                polar(GRIP_TICK_INNER, theta),
            )
        })
        .collect()
}

/// Outline of the dial grip. At `progress == 0` it is a plain circle; as the
/// morph advances, `bumps` rounded notches sink into the rim by up to
/// `extrusion * GRIP_BUMP_DEPTH`.
pub fn grip_outline_path(bumps: u32, extrusion: f64, progress: f64) -> String {
    let r = GRIP_RADIUS;
    let c = VIEWBOX_CENTER;
    let depth = GRIP_BUMP_DEPTH * extrusion.clamp(0.0, 1.0) * progress.clamp(0.0, 1.0);
    if bumps == 0 || depth <= f64::EPSILON {
        let rs = num(r);
        return format!(
            "M{c},{}A{rs},{rs},0,0,1,{c},{}A{rs},{rs},0,0,1,{c},{}Z",
            num(c + r),
            num(c - r),
            num(c + r)
        );
    }
    let n = GRIP_OUTLINE_SEGMENTS;
    let mut d = String::with_capacity(n * 16);
    for i in 0..n {
        let phi = TAU * i as f64 / n as f64;
        // narrow notches: raise the raised-cosine profile to a high power
        let notch = ((1.0 - (bumps as f64 * phi + PI).cos()) * 0.5).powi(6);
        let p = polar(r - depth * notch, phi);
        let cmd = if i == 0 { 'M' } else { 'L' };
        _ = write!(d, "{cmd}{},{}", num(p.x), num(p.y));
    }
    d.push('Z');
    d
}
