use alloc::vec::Vec;

use crate::{ConfigError, Property, Style};

/// Piecewise-linear mapping from progress stops to output values.
///
/// Contract:
/// - at least two stops, with as many outputs as inputs
/// - inputs lie in `[0, 1]` and are non-decreasing
/// - progress outside the input range clamps to the nearest output endpoint
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeMapping {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl RangeMapping {
    pub fn new(
        input: impl Into<Vec<f32>>,
        output: impl Into<Vec<f32>>,
    ) -> Result<Self, ConfigError> {
        let mapping = Self {
            input: input.into(),
            output: output.into(),
        };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Maps `[a, b]` onto `[x, y]`.
    pub fn linear(a: f32, b: f32, x: f32, y: f32) -> Result<Self, ConfigError> {
        Self::new([a, b], [x, y])
    }

    pub fn input(&self) -> &[f32] {
        &self.input
    }

    pub fn output(&self) -> &[f32] {
        &self.output
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.len() < 2 {
            return Err(ConfigError::TooFewStops(self.input.len()));
        }
        if self.input.len() != self.output.len() {
            return Err(ConfigError::MismatchedStops {
                input: self.input.len(),
                output: self.output.len(),
            });
        }
        if self.output.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite("range mapping output"));
        }
        let mut previous = 0.0f32;
        for (index, &value) in self.input.iter().enumerate() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite("range mapping input"));
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InputOutOfRange { index, value });
            }
            if index > 0 && value < previous {
                return Err(ConfigError::NonMonotonicInput {
                    index,
                    value,
                    previous,
                });
            }
            previous = value;
        }
        Ok(())
    }

    pub fn sample(&self, progress: f32) -> f32 {
        if self.input.len() < 2 || self.input.len() != self.output.len() {
            fwarn!(
                input = self.input.len(),
                output = self.output.len(),
                "RangeMapping::sample: unvalidated mapping"
            );
            debug_assert!(false, "RangeMapping::sample called on an invalid mapping");
            return self.output.first().copied().unwrap_or(0.0);
        }
        let last = self.input.len() - 1;
        if progress.is_nan() || progress < self.input[0] {
            return self.output[0];
        }
        if progress >= self.input[last] {
            return self.output[last];
        }

        // First segment whose end lies beyond `progress`; zero-width segments before it are
        // stepped over.
        let seg = self
            .input
            .windows(2)
            .position(|w| progress < w[1])
            .unwrap_or(last - 1);
        let (a, b) = (self.input[seg], self.input[seg + 1]);
        let (x, y) = (self.output[seg], self.output[seg + 1]);
        let span = b - a;
        if span <= 0.0 {
            return y;
        }
        x + (progress - a) / span * (y - x)
    }
}

/// One visual property driven by a [`RangeMapping`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyMapping {
    pub property: Property,
    pub mapping: RangeMapping,
}

impl PropertyMapping {
    pub fn new(property: Property, mapping: RangeMapping) -> Self {
        Self { property, mapping }
    }

    pub fn sample(&self, progress: f32) -> f32 {
        self.mapping.sample(progress)
    }

    pub fn apply(&self, progress: f32, style: &mut Style) {
        style.set(self.property, self.sample(progress));
    }
}
