use crate::math::lerp;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A piecewise-linear coefficient curve, evaluated by input value.
///
/// Used to scale the drag coefficients by speed or spin rate. An empty
/// curve evaluates to 1.0 everywhere (no scaling); outside the keyed range
/// the endpoint values are held.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CoefficientCurve {
    /// (input, coefficient) keyframes, kept sorted by input
    keys: Vec<(f32, f32)>,
}

impl CoefficientCurve {
    /// Creates an empty curve, which evaluates to 1.0 everywhere
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Creates a curve from keyframes, sorting them by input value
    pub fn from_keys(mut keys: Vec<(f32, f32)>) -> Self {
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Creates the "extra drag at low speed" boost shape: `boost` at zero
    /// input, falling linearly to 1.0 at `threshold`, and 1.0 above it
    pub fn low_speed_boost(threshold: f32, boost: f32) -> Self {
        Self::from_keys(vec![(0.0, boost.max(1.0)), (threshold.max(0.0), 1.0)])
    }

    /// Adds a keyframe, keeping the keys sorted
    pub fn add_key(&mut self, input: f32, coefficient: f32) {
        let at = self
            .keys
            .partition_point(|&(key_input, _)| key_input < input);
        self.keys.insert(at, (input, coefficient));
    }

    /// Returns the number of keyframes
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the curve has no keyframes
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Evaluates the curve at the given input
    pub fn evaluate(&self, input: f32) -> f32 {
        let (first, rest) = match self.keys.split_first() {
            Some(split) => split,
            None => return 1.0,
        };

        if input <= first.0 {
            return first.1;
        }

        let mut prev = *first;
        for &key in rest {
            if input <= key.0 {
                let span = key.0 - prev.0;
                if crate::math::approx_zero(span) {
                    return key.1;
                }
                let t = (input - prev.0) / span;
                return lerp(prev.1, key.1, t);
            }
            prev = key;
        }

        prev.1
    }
}
