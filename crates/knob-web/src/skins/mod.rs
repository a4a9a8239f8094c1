pub mod grip_dial;
pub mod standard;

pub use grip_dial::{GripDialOptions, ReactiveGripDial};
pub use standard::{StandardKnob, StandardKnobOptions};

use crate::dom::set_style;
use crate::svg::DefsRegistry;
use knob_core::geometry::rotation_deg;
use knob_core::{KnobError, Renderer, DEFAULT_MAX_ROTATION, DEFAULT_MIN_ROTATION};
use web_sys as web;

/// A renderer that constructs its own visual element.
pub trait Skin: Renderer {
    /// Builds the visual. Called once, before the first `update`.
    fn build(
        &mut self,
        document: &web::Document,
        defs: &mut DefsRegistry,
    ) -> Result<web::Element, KnobError>;

    /// Class added to the container for skin-specific styling.
    fn container_class(&self) -> Option<&'static str> {
        None
    }
}

/// Default renderer for caller-supplied visuals: rotates the whole element
/// linearly between two angles.
pub struct RotationSkin {
    element: web::Element,
    min_rotation: f64,
    max_rotation: f64,
}

impl RotationSkin {
    pub fn new(element: &web::Element) -> Self {
        Self::with_range(element, DEFAULT_MIN_ROTATION, DEFAULT_MAX_ROTATION)
    }

    pub fn with_range(element: &web::Element, min_rotation: f64, max_rotation: f64) -> Self {
        set_style(element, "transform-origin", "50% 50%");
        Self {
            element: element.clone(),
            min_rotation,
            max_rotation,
        }
    }
}

impl Renderer for RotationSkin {
    fn update(&mut self, norm: f64, _value: f64) {
        let deg = rotation_deg(self.min_rotation, self.max_rotation, norm);
        set_style(&self.element, "transform", &format!("rotate({deg}deg)"));
    }
}
