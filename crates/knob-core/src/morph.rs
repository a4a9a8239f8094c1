//! Hover/drag morph progress for decorative skins.
//!
//! Progress eases toward 1 while the knob is hovered or dragged and back to 0
//! otherwise. It never touches the knob's value.

use crate::constants::MORPH_DURATION_MS;
use instant::Instant;
use std::time::Duration;

/// Cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
    }
}

/// A retargetable tween. Each retarget bumps `generation`; frame callbacks
/// scheduled for an older generation must stop.
#[derive(Clone, Debug)]
pub struct MorphTween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    generation: u64,
}

impl MorphTween {
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started: now,
            duration,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Start a new tween from wherever the current one is at `now`. A partial
    /// reversal takes a proportional share of the full duration.
    pub fn retarget(&mut self, to: f64, now: Instant) -> u64 {
        self.from = self.progress_at(now);
        self.to = to.clamp(0.0, 1.0);
        self.started = now;
        self.generation += 1;
        self.generation
    }

    pub fn progress_at(&self, now: Instant) -> f64 {
        let t = self.linear_at(now);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_settled_at(&self, now: Instant) -> bool {
        self.linear_at(now) >= 1.0
    }

    fn linear_at(&self, now: Instant) -> f64 {
        let span = (self.to - self.from).abs();
        let total = self.duration.as_secs_f64() * span;
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = if now > self.started {
            (now - self.started).as_secs_f64()
        } else {
            0.0
        };
        (elapsed / total).min(1.0)
    }
}

/// Hover and drag flags feeding a [`MorphTween`].
#[derive(Clone, Debug)]
pub struct MorphState {
    tween: MorphTween,
    hovered: bool,
    dragging: bool,
}

impl MorphState {
    pub fn new(now: Instant) -> Self {
        Self {
            tween: MorphTween::new(Duration::from_millis(MORPH_DURATION_MS), now),
            hovered: false,
            dragging: false,
        }
    }

    pub fn tween(&self) -> &MorphTween {
        &self.tween
    }

    /// Returns the new generation when the target changed.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) -> Option<u64> {
        self.hovered = hovered;
        self.sync(now)
    }

    pub fn set_dragging(&mut self, dragging: bool, now: Instant) -> Option<u64> {
        self.dragging = dragging;
        self.sync(now)
    }

    fn sync(&mut self, now: Instant) -> Option<u64> {
        let target = if self.hovered || self.dragging { 1.0 } else { 0.0 };
        if target == self.tween.target() {
            return None;
        }
        Some(self.tween.retarget(target, now))
    }
}
