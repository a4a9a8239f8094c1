// Shared interaction and visual tuning constants used by the web frontend.

// Resistance
pub const DEFAULT_DRAG_RESISTANCE: f64 = 100.0;
pub const DEFAULT_WHEEL_RESISTANCE: f64 = 100.0;
pub const DRAG_RESISTANCE_SCALE: f64 = 3.0; // px of travel per unit at base 100 over a 100-wide range
pub const WHEEL_RESISTANCE_SCALE: f64 = 40.0; // wheel delta units per unit at base 100 over a 100-wide range

// Angular smoothing
pub const DEFAULT_SMOOTHING_THRESHOLD: f64 = 0.25; // normalized jump that triggers damping
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.2; // fraction of the jump applied when damped

// Default rotation range for the plain rotation renderer (degrees)
pub const DEFAULT_MIN_ROTATION: f64 = 0.0;
pub const DEFAULT_MAX_ROTATION: f64 = 360.0;

// Marker classes
pub const FOCUS_ACTIVE_CLASS: &str = "focus-active";
pub const DRAG_ACTIVE_CLASS: &str = "drag-active";
pub const BODY_DRAG_ACTIVE_CLASS: &str = "knob-input__drag-active";

// Knob visuals share a 40x40 viewBox centered on (20, 20)
pub const VIEWBOX_SIZE: f64 = 40.0;
pub const VIEWBOX_CENTER: f64 = 20.0;

// Standard knob
pub const STANDARD_RING_RADIUS: f64 = 18.0;
pub const STANDARD_RING_STROKE: f64 = 1.0;
pub const STANDARD_DIAL_RADIUS: f64 = 14.0;
pub const STANDARD_DOT_OFFSET: f64 = 10.0; // dot distance below the center at rest
pub const STANDARD_DOT_RADIUS: f64 = 1.5;

// Reactive grip dial
pub const GRIP_RADIUS: f64 = 13.0;
pub const GRIP_GUIDE_RADIUS: f64 = 16.0;
pub const GRIP_TICK_OUTER: f64 = 19.5;
pub const GRIP_TICK_INNER: f64 = 14.5;
pub const GRIP_DOT_RADIUS: f64 = 10.5;
pub const GRIP_BUMP_DEPTH: f64 = 3.0; // notch depth at full extrusion and full morph
pub const GRIP_OUTLINE_SEGMENTS: usize = 120;
pub const DEFAULT_GUIDE_TICKS: u32 = 9;
pub const DEFAULT_GRIP_BUMPS: u32 = 5;
pub const DEFAULT_GRIP_EXTRUSION: f64 = 0.6;

// Hover morph tween
pub const MORPH_DURATION_MS: u64 = 180;

// Envelope visualizer
pub const ENVELOPE_MAX_POINT_SEPARATION: f64 = 75.0;
pub const ENVELOPE_HEIGHT: f64 = 100.0;
