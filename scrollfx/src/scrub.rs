use crate::{
    ConfigError, ElementBounds, ProgressSource, Property, PropertyMapping, RangeMapping, Style,
};

/// A continuous, scroll-scrubbed property: no playback state, the value tracks scroll linearly
/// across the whole range of its source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrubRule {
    pub source: ProgressSource,
    pub mapping: PropertyMapping,
}

impl ScrubRule {
    pub fn new(source: ProgressSource, mapping: PropertyMapping) -> Self {
        Self { source, mapping }
    }

    /// Moves `property` from 0 to `distance` while the trigger element crosses the screen
    /// (`"top bottom"` → `"bottom top"`).
    pub fn parallax(property: Property, distance: f32) -> Result<Self, ConfigError> {
        let mapping = RangeMapping::linear(0.0, 1.0, 0.0, distance)?;
        Ok(Self::new(
            ProgressSource::IN_VIEW,
            PropertyMapping::new(property, mapping),
        ))
    }

    pub fn progress(&self, scroll_y: f32, bounds: ElementBounds, viewport_height: f32) -> f32 {
        self.source.progress(scroll_y, bounds, viewport_height)
    }

    pub fn style_at(&self, scroll_y: f32, bounds: ElementBounds, viewport_height: f32) -> Style {
        let mut style = Style::EMPTY;
        self.mapping
            .apply(self.progress(scroll_y, bounds, viewport_height), &mut style);
        style
    }
}
