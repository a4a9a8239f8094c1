// DOM class names and page-level tuning for the web frontend.

// Base input
pub const CONTAINER_CLASS: &str = "knob-input__container";
pub const INPUT_CLASS: &str = "knob-input__input";
pub const VISUAL_CLASS: &str = "knob-input__visual";

// Skins
pub const STANDARD_KNOB_CLASS: &str = "fl-standard-knob";
pub const GRIP_DIAL_CLASS: &str = "fl-reactive-grip-dial";

// Surface colors shared by the skins
pub const RING_BG_FILL: u32 = 0x353b3f;
pub const OUTLINE_DARK: u32 = 0x23292d;
pub const SHADOW_DARK: u32 = 0x242a2e;
pub const DIAL_LIGHT: u32 = 0x52595f;
pub const DIAL_DARK: u32 = 0x2b3238;
pub const HIGHLIGHT: u32 = 0x70777d;
pub const GUIDE_RING: u32 = 0x32383c;
pub const CHROME_BASE: u32 = 0x383d3f;
pub const WHITE: u32 = 0xffffff;

// Demo envelope visualizer
pub const ENVELOPE_VIEWBOX: &str = "0 0 300 100";
pub const ENVELOPE_POINT_RADIUS: f64 = 6.0;
pub const ENVELOPE_STROKE_WIDTH: f64 = 2.0;
pub const ENVELOPE_FILL_DARKEN: f64 = 0.6; // mix toward black for point fills
