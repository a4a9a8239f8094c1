//! Knob configuration and its one-time validation.
//!
//! All options carry documented defaults through `Default`; callers override
//! the fields they care about with struct update syntax:
//!
//! ```
//! use knob_core::KnobConfig;
//! let cfg = KnobConfig { min: 0.0, max: 100.0, initial: Some(40.0), ..Default::default() };
//! assert!(cfg.validate().is_ok());
//! ```

use crate::constants::*;
use crate::error::KnobError;
use crate::value::{Step, ValueModel};
use glam::DVec2;

/// How pointer motion maps onto the value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragMode {
    /// Upward motion increases the value.
    #[default]
    Vertical,
    /// Rightward motion increases the value.
    Horizontal,
    /// The pointer's bearing around `center` (in the visual's local pixels)
    /// sets the value directly: straight up is `min`, a full clockwise turn is `max`.
    Angular { center: Option<DVec2> },
}

/// Damping of large jumps in angular mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    /// Normalized jump above which the move is damped.
    pub threshold: f64,
    /// Fraction of a damped jump that is applied.
    pub factor: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SMOOTHING_THRESHOLD,
            factor: DEFAULT_SMOOTHING_FACTOR,
        }
    }
}

/// CSS class names toggled on the container.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerClasses {
    pub focus: String,
    pub drag: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self {
            focus: FOCUS_ACTIVE_CLASS.to_string(),
            drag: DRAG_ACTIVE_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KnobConfig {
    pub min: f64,
    pub max: f64,
    pub step: Step,
    /// Reset target; `None` means the midpoint of the range.
    pub initial: Option<f64>,
    /// Base drag resistance. 100 means 3px per unit on a 100-wide range.
    pub drag_resistance: f64,
    /// Base wheel resistance. 100 means 40 delta units per unit on a 100-wide range.
    pub wheel_resistance: f64,
    pub drag_mode: DragMode,
    /// Only consulted in angular mode.
    pub smoothing: Option<Smoothing>,
    pub markers: MarkerClasses,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: Step::Any,
            initial: None,
            drag_resistance: DEFAULT_DRAG_RESISTANCE,
            wheel_resistance: DEFAULT_WHEEL_RESISTANCE,
            drag_mode: DragMode::Vertical,
            smoothing: None,
            markers: MarkerClasses::default(),
        }
    }
}

/// Resistance coefficients derived from the configured range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resistance {
    pub drag: f64,
    pub wheel: f64,
}

impl KnobConfig {
    pub fn validate(&self) -> Result<(), KnobError> {
        let finite = [
            ("min", self.min),
            ("max", self.max),
            ("drag_resistance", self.drag_resistance),
            ("wheel_resistance", self.wheel_resistance),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                log::warn!("[config] rejected non-finite {}", name);
                return Err(KnobError::NonFiniteOption(name));
            }
        }
        if let Some(initial) = self.initial {
            if !initial.is_finite() {
                return Err(KnobError::NonFiniteOption("initial"));
            }
        }
        if self.min >= self.max {
            log::warn!("[config] rejected range {}..{}", self.min, self.max);
            return Err(KnobError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.drag_resistance <= 0.0 {
            return Err(KnobError::NonPositiveResistance("drag_resistance"));
        }
        if self.wheel_resistance <= 0.0 {
            return Err(KnobError::NonPositiveResistance("wheel_resistance"));
        }
        if let Step::Every(s) = self.step {
            if !(s.is_finite() && s > 0.0) {
                return Err(KnobError::InvalidStep(s));
            }
        }
        if let Some(Smoothing { threshold, factor }) = self.smoothing {
            let in_unit = |x: f64| x > 0.0 && x <= 1.0;
            if !(in_unit(threshold) && in_unit(factor)) {
                return Err(KnobError::InvalidSmoothing { threshold, factor });
            }
        }
        if let DragMode::Angular {
            center: Some(center),
        } = self.drag_mode
        {
            if !center.is_finite() {
                return Err(KnobError::NonFiniteOption("center"));
            }
        }
        Ok(())
    }

    pub fn initial_value(&self) -> f64 {
        self.initial.unwrap_or(0.5 * (self.min + self.max))
    }

    pub fn resistance(&self) -> Resistance {
        let span = self.max - self.min;
        Resistance {
            drag: self.drag_resistance * DRAG_RESISTANCE_SCALE / span,
            wheel: self.wheel_resistance * WHEEL_RESISTANCE_SCALE / span,
        }
    }

    pub fn value_model(&self) -> ValueModel {
        ValueModel::new(self.min, self.max, self.step, self.initial_value())
    }
}
