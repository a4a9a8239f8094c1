/// Granularity of accepted values, mirroring a range input's `step` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Step {
    #[default]
    Any,
    Every(f64),
}

impl Step {
    /// Attribute text for the backing range input.
    pub fn attr_value(&self) -> String {
        match self {
            Step::Any => "any".to_string(),
            Step::Every(s) => s.to_string(),
        }
    }
}

/// A number held inside `[min, max]`.
///
/// `min < max` is a precondition; `KnobConfig::validate` enforces it before a
/// model is ever built, so the model itself never re-checks.
#[derive(Clone, Debug)]
pub struct ValueModel {
    min: f64,
    max: f64,
    step: Step,
    initial: f64,
    value: f64,
}

impl ValueModel {
    pub fn new(min: f64, max: f64, step: Step, initial: f64) -> Self {
        let mut model = Self {
            min,
            max,
            step,
            initial,
            value: initial,
        };
        model.initial = model.quantize(model.clamp(initial));
        model.value = model.initial;
        model
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current value in normalized `[0, 1]` form.
    pub fn norm(&self) -> f64 {
        self.normalize(self.value)
    }

    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }

    #[inline]
    pub fn expand(&self, norm: f64) -> f64 {
        (self.min + norm * (self.max - self.min)).min(self.max)
    }

    /// Clamp, snap to the step grid and store. Returns the stored value.
    pub fn set(&mut self, v: f64) -> f64 {
        self.value = self.quantize(self.clamp(v));
        self.value
    }

    pub fn reset(&mut self) -> f64 {
        self.value = self.initial;
        self.value
    }

    fn quantize(&self, v: f64) -> f64 {
        match self.step {
            Step::Any => v,
            Step::Every(s) => {
                let mut k = ((v - self.min) / s).round();
                // the grid may not land on max; stay on the last point below it
                if self.min + k * s > self.max + s * GRID_EPSILON {
                    k -= 1.0;
                }
                let places = decimal_places(s).max(decimal_places(self.min));
                self.clamp(round_to(self.min + k * s, places))
            }
        }
    }
}

/// Relative slack, in steps, for grid points that land a few ulps past `max`.
const GRID_EPSILON: f64 = 1e-9;

/// Decimal digits needed to write `v` exactly, capped at 15.
fn decimal_places(v: f64) -> i32 {
    let mut scaled = v.abs();
    for places in 0..15 {
        if (scaled - scaled.round()).abs() <= scaled.max(1.0) * GRID_EPSILON {
            return places;
        }
        scaled *= 10.0;
    }
    15
}

fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}
