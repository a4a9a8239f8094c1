use thiserror::Error;

/// Construction-time failures. Event handling never produces these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnobError {
    #[error("invalid range: min ({min}) must be strictly less than max ({max})")]
    InvalidRange { min: f64, max: f64 },
    #[error("option `{0}` must be a finite number")]
    NonFiniteOption(&'static str),
    #[error("option `{0}` must be greater than zero")]
    NonPositiveResistance(&'static str),
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    #[error("smoothing threshold must be in (0, 1] and factor in (0, 1], got threshold={threshold} factor={factor}")]
    InvalidSmoothing { threshold: f64, factor: f64 },
    #[error("grip dial needs at least two guide ticks, got {0}")]
    InvalidGuideTicks(u32),
    #[error("grip extrusion must be in [0, 1], got {0}")]
    InvalidExtrusion(f64),
    #[error("knob input must receive a valid container element")]
    MissingContainer,
    #[error("knob input must receive a valid visual element")]
    MissingVisual,
    #[error("the knob input's container element must contain its visual element")]
    VisualNotContained,
    #[error("dom error: {0}")]
    Dom(String),
}
