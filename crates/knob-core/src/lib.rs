pub mod color;
pub mod config;
pub mod constants;
pub mod drag;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod knob;
pub mod listeners;
pub mod morph;
pub mod value;

pub use color::{palette, Rgb};
pub use config::*;
pub use constants::*;
pub use drag::*;
pub use envelope::*;
pub use error::KnobError;
pub use geometry::RingType;
pub use knob::*;
pub use listeners::{dispatch, Callback, ListenerId, Listeners};
pub use morph::*;
pub use value::*;
