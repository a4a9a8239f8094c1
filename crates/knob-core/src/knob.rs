//! Headless knob: value model + drag controller + a pluggable renderer.
//!
//! Every accepted mutation renders once and queues exactly one
//! [`KnobEvent::Change`]. Drag lifecycle events bracket a gesture; the last
//! change of a gesture is always queued before its `DragEnd`. The host drains
//! the queue with [`Knob::take_events`] after each input and delivers it.

use crate::config::KnobConfig;
use crate::drag::{DragController, Gesture, Outcome};
use crate::error::KnobError;
use crate::value::ValueModel;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KnobEvent {
    Change { value: f64 },
    DragStart,
    DragEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    DragStart,
    DragEnd,
}

impl KnobEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            KnobEvent::Change { .. } => EventKind::Change,
            KnobEvent::DragStart => EventKind::DragStart,
            KnobEvent::DragEnd => EventKind::DragEnd,
        }
    }
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::DragStart => "knobdragstart",
            EventKind::DragEnd => "knobdragend",
        }
    }
}

/// Visual state a renderer may reflect, e.g. as CSS classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Focus,
    Drag,
}

/// Pluggable visuals. `update` receives the normalized value and the raw one.
pub trait Renderer {
    fn update(&mut self, norm: f64, value: f64);

    fn mark(&mut self, _marker: Marker, _active: bool) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn update(&mut self, norm: f64, value: f64) {
        (**self).update(norm, value)
    }

    fn mark(&mut self, marker: Marker, active: bool) {
        (**self).mark(marker, active)
    }
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn update(&mut self, _norm: f64, _value: f64) {}
}

pub struct Knob<R> {
    model: ValueModel,
    drag: DragController,
    renderer: R,
    focused: bool,
    pending: SmallVec<[KnobEvent; 4]>,
}

impl<R: Renderer> Knob<R> {
    pub fn new(config: &KnobConfig, renderer: R) -> Result<Self, KnobError> {
        config.validate()?;
        let mut knob = Self {
            model: config.value_model(),
            drag: DragController::new(config),
            renderer,
            focused: false,
            pending: SmallVec::new(),
        };
        knob.render();
        Ok(knob)
    }

    pub fn value(&self) -> f64 {
        self.model.value()
    }

    pub fn norm(&self) -> f64 {
        self.model.norm()
    }

    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    pub fn controller(&self) -> &DragController {
        &self.drag
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Direct write; does not touch an in-flight drag.
    pub fn set_value(&mut self, v: f64) -> f64 {
        let value = self.model.set(v);
        self.render();
        self.pending.push(KnobEvent::Change { value });
        value
    }

    pub fn handle(&mut self, gesture: Gesture) -> Outcome {
        let outcome = self.drag.handle(gesture, &mut self.model);
        match outcome {
            Outcome::Ignored => {}
            Outcome::Started { superseded } => {
                if superseded {
                    self.end_drag();
                }
                self.renderer.mark(Marker::Drag, true);
                self.pending.push(KnobEvent::DragStart);
            }
            Outcome::Updated { value } => self.changed(value),
            Outcome::Finalized { value } => {
                self.changed(value);
                self.end_drag();
            }
            Outcome::Cancelled => self.end_drag(),
            Outcome::Wheel { value, superseded } | Outcome::Reset { value, superseded } => {
                if superseded {
                    self.end_drag();
                }
                self.changed(value);
            }
        }
        outcome
    }

    pub fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.renderer.mark(Marker::Focus, focused);
        }
    }

    pub fn take_events(&mut self) -> SmallVec<[KnobEvent; 4]> {
        std::mem::take(&mut self.pending)
    }

    fn changed(&mut self, value: f64) {
        self.render();
        self.pending.push(KnobEvent::Change { value });
    }

    fn end_drag(&mut self) {
        self.renderer.mark(Marker::Drag, false);
        self.pending.push(KnobEvent::DragEnd);
    }

    fn render(&mut self) {
        let (norm, value) = (self.model.norm(), self.model.value());
        self.renderer.update(norm, value);
    }
}
