//! DAHDSR envelope curve for the demo visualizer.
//!
//! Stage knobs are in `0..=100`; tension knobs in `-100..=100`. The curve is
//! drawn in a viewBox 100 units tall with time running left to right.

use crate::constants::{ENVELOPE_HEIGHT, ENVELOPE_MAX_POINT_SEPARATION};
use crate::geometry::num;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EnvelopeParams {
    pub delay: f64,
    pub attack: f64,
    pub hold: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
    pub attack_tension: f64,
    pub decay_tension: f64,
    pub release_tension: f64,
}

/// Handle positions plus the curve's path data.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeShape {
    pub delay_x: f64,
    pub attack_x: f64,
    pub hold_x: f64,
    pub decay_x: f64,
    pub sustain_y: f64,
    pub release_x: f64,
    pub path: String,
}

impl EnvelopeParams {
    pub fn shape(&self) -> EnvelopeShape {
        let sep = ENVELOPE_MAX_POINT_SEPARATION;
        let h = ENVELOPE_HEIGHT;

        let delay_x = sep * self.delay / 100.0;
        let attack_x = delay_x + sep * self.attack / 100.0;
        let hold_x = attack_x + sep * self.hold / 100.0;
        // decay travel shrinks as sustain rises
        let decay_x = hold_x + (sep * self.decay / 100.0) * (100.0 - self.sustain) / 100.0;
        let sustain_y = h - self.sustain;
        let release_x = decay_x + sep * self.release / 100.0;

        let tn_attack = (attack_x - delay_x) * self.attack_tension / 100.0;
        let tn_decay = (decay_x - hold_x) * self.decay_tension / 100.0;
        let tn_release = (release_x - decay_x) * self.release_tension / 100.0;

        let pick = |cond: bool, a: f64, b: f64| num(if cond { a } else { b });
        let path = format!(
            "M{d},{h}C{a1},{h},{a2},0,{a},0L{ho},0C{d1},0,{d2},{s},{de},{s}C{r1},{s},{r2},{h},{r},{h}",
            d = num(delay_x),
            h = num(h),
            a1 = pick(tn_attack < 0.0, delay_x - tn_attack, delay_x),
            a2 = pick(tn_attack > 0.0, attack_x - tn_attack, attack_x),
            a = num(attack_x),
            ho = num(hold_x),
            d1 = pick(tn_decay > 0.0, hold_x + tn_decay, hold_x),
            d2 = pick(tn_decay < 0.0, decay_x + tn_decay, decay_x),
            s = num(sustain_y),
            de = num(decay_x),
            r1 = pick(tn_release > 0.0, decay_x + tn_release, decay_x),
            r2 = pick(tn_release < 0.0, release_x + tn_release, release_x),
            r = num(release_x),
        );

        EnvelopeShape {
            delay_x,
            attack_x,
            hold_x,
            decay_x,
            sustain_y,
            release_x,
            path,
        }
    }
}
