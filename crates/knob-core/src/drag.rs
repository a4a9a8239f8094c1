//! Gesture state machine: turns positional samples into value updates while
//! tracking at most one in-flight drag.

use crate::config::{DragMode, KnobConfig, Resistance, Smoothing};
use crate::value::ValueModel;
use glam::DVec2;
use std::f64::consts::TAU;

/// Where a gesture comes from. Touches are keyed by their OS identifier so
/// other fingers never interfere with the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch(i32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    pub origin: DVec2,
    /// Pivot for angular mode, in the same coordinate space as `origin`.
    pub center: DVec2,
    pub base_value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// One raw input sample, already reduced to client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Start {
        source: DragSource,
        pos: DVec2,
        center: DVec2,
    },
    /// `primary_held` is the mouse's primary button bit; touches always pass `true`.
    Move {
        source: DragSource,
        pos: DVec2,
        primary_held: bool,
    },
    End {
        source: DragSource,
        pos: DVec2,
    },
    Cancel {
        source: DragSource,
    },
    Wheel {
        delta_y: f64,
    },
    /// Double-click or middle-click.
    Reset,
}

/// What a gesture did. `superseded` reports that an earlier session was
/// force-cleared first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Ignored,
    Started { superseded: bool },
    Updated { value: f64 },
    Finalized { value: f64 },
    Cancelled,
    Wheel { value: f64, superseded: bool },
    Reset { value: f64, superseded: bool },
}

/// Clockwise bearing of `pos` around `center` in turns, `0` pointing straight
/// up (screen coordinates, y grows downward).
pub fn bearing(center: DVec2, pos: DVec2) -> f64 {
    let d = pos - center;
    (d.x.atan2(-d.y) / TAU).rem_euclid(1.0)
}

#[derive(Clone, Debug)]
pub struct DragController {
    mode: DragMode,
    smoothing: Option<Smoothing>,
    resistance: Resistance,
    state: DragState,
}

impl DragController {
    pub fn new(config: &KnobConfig) -> Self {
        Self {
            mode: config.drag_mode,
            smoothing: config.smoothing,
            resistance: config.resistance(),
            state: DragState::Idle,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn resistance(&self) -> Resistance {
        self.resistance
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(s) => Some(s),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn handle(&mut self, gesture: Gesture, model: &mut ValueModel) -> Outcome {
        match gesture {
            Gesture::Start {
                source,
                pos,
                center,
            } => {
                let superseded = self.clear();
                log::debug!("[drag] begin {:?} at ({:.1},{:.1})", source, pos.x, pos.y);
                self.state = DragState::Dragging(DragSession {
                    source,
                    origin: pos,
                    center,
                    base_value: model.value(),
                });
                Outcome::Started { superseded }
            }
            Gesture::Move {
                source,
                pos,
                primary_held,
            } => {
                let Some(session) = self.matching(source) else {
                    return Outcome::Ignored;
                };
                if source == DragSource::Mouse && !primary_held {
                    // button released outside the window; treat as the release
                    return self.finalize(session, pos, model);
                }
                let value = model.set(self.sample(&session, pos, model));
                log::trace!("[drag] update {:?} -> {:.4}", source, value);
                Outcome::Updated { value }
            }
            Gesture::End { source, pos } => match self.matching(source) {
                Some(session) => self.finalize(session, pos, model),
                None => Outcome::Ignored,
            },
            Gesture::Cancel { source } => {
                if self.matching(source).is_none() {
                    return Outcome::Ignored;
                }
                self.clear();
                log::debug!("[drag] cancel {:?}", source);
                Outcome::Cancelled
            }
            Gesture::Wheel { delta_y } => {
                let superseded = self.clear();
                let value = model.set(model.value() - delta_y / self.resistance.wheel);
                log::trace!("[drag] wheel {:.1} -> {:.4}", delta_y, value);
                Outcome::Wheel { value, superseded }
            }
            Gesture::Reset => {
                let superseded = self.clear();
                let value = model.reset();
                log::debug!("[drag] reset -> {}", value);
                Outcome::Reset { value, superseded }
            }
        }
    }

    fn matching(&self, source: DragSource) -> Option<DragSession> {
        match self.state {
            DragState::Dragging(s) if s.source == source => Some(s),
            _ => None,
        }
    }

    fn finalize(&mut self, session: DragSession, pos: DVec2, model: &mut ValueModel) -> Outcome {
        let value = model.set(self.sample(&session, pos, model));
        self.clear();
        log::debug!("[drag] end {:?} -> {:.4}", session.source, value);
        Outcome::Finalized { value }
    }

    /// Returns whether a session was active.
    fn clear(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    fn sample(&self, session: &DragSession, pos: DVec2, model: &ValueModel) -> f64 {
        match self.mode {
            DragMode::Vertical => {
                let delta = pos.y - session.origin.y;
                model.clamp(session.base_value - delta / self.resistance.drag)
            }
            DragMode::Horizontal => {
                let delta = session.origin.x - pos.x;
                model.clamp(session.base_value - delta / self.resistance.drag)
            }
            DragMode::Angular { .. } => {
                if pos.distance_squared(session.center) < f64::EPSILON {
                    return model.value();
                }
                let raw = bearing(session.center, pos);
                let prev = model.norm();
                let norm = match self.smoothing {
                    Some(s) if (raw - prev).abs() > s.threshold => prev + (raw - prev) * s.factor,
                    _ => raw,
                };
                model.clamp(model.expand(norm))
            }
        }
    }
}
