use alloc::vec::Vec;

use crate::{ConfigError, Easing, Property};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repeat {
    /// Number of extra cycles after the first one.
    Count(u32),
    Infinite,
}

/// A looping keyframe animation on one property, evenly spaced over `duration_ms`.
///
/// Each segment between neighbouring values is eased independently.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframes {
    pub property: Property,
    values: Vec<f32>,
    pub duration_ms: u64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Keyframes {
    pub fn new(
        property: Property,
        values: impl Into<Vec<f32>>,
        duration_ms: u64,
    ) -> Result<Self, ConfigError> {
        let keyframes = Self {
            property,
            values: values.into(),
            duration_ms: duration_ms.max(1),
            easing: Easing::SmoothStep,
            repeat: Repeat::Count(0),
        };
        keyframes.validate()?;
        Ok(keyframes)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.values.len() < 2 {
            return Err(ConfigError::TooFewKeyframes(self.values.len()));
        }
        if self.values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite("keyframe values"));
        }
        Ok(())
    }

    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            Repeat::Count(n) => {
                let cycles = u64::from(n).saturating_add(1);
                elapsed_ms >= self.duration_ms.saturating_mul(cycles)
            }
        }
    }

    /// Value `elapsed_ms` after the animation started.
    pub fn sample(&self, elapsed_ms: u64) -> f32 {
        let last = self.values.len().saturating_sub(1);
        if last == 0 {
            return self.values.first().copied().unwrap_or(0.0);
        }
        if self.is_finished(elapsed_ms) {
            return self.values[last];
        }

        let duration = self.duration_ms.max(1);
        let local = (elapsed_ms % duration) as f32 / duration as f32;
        let pos = local * last as f32;
        let seg = (pos as usize).min(last - 1);
        let t = self.easing.sample(pos - seg as f32);
        let (a, b) = (self.values[seg], self.values[seg + 1]);
        a + (b - a) * t
    }
}
