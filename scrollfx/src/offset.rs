use alloc::string::ToString;
use core::str::FromStr;

use crate::{ConfigError, ElementBounds};

/// A point along an element or the viewport: a fraction of its size plus a pixel shift.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub fraction: f32,
    pub pixels: f32,
}

impl Edge {
    pub const START: Edge = Edge::fraction(0.0);
    pub const CENTER: Edge = Edge::fraction(0.5);
    pub const END: Edge = Edge::fraction(1.0);

    pub const fn fraction(fraction: f32) -> Self {
        Self {
            fraction,
            pixels: 0.0,
        }
    }

    pub const fn pixels(pixels: f32) -> Self {
        Self {
            fraction: 0.0,
            pixels,
        }
    }

    pub fn resolve(&self, size: f32) -> f32 {
        self.fraction * size + self.pixels
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "top" | "start" | "left" => return Some(Self::START),
            "center" => return Some(Self::CENTER),
            "bottom" | "end" | "right" => return Some(Self::END),
            _ => {}
        }
        if let Some(pct) = token.strip_suffix('%') {
            let v = f32::from_str(pct).ok().filter(|v| v.is_finite())?;
            return Some(Self::fraction(v / 100.0));
        }
        let px = token.strip_suffix("px").unwrap_or(token);
        f32::from_str(px)
            .ok()
            .filter(|v| v.is_finite())
            .map(Self::pixels)
    }
}

/// The scroll position at which an edge of an element meets an edge of the viewport.
///
/// Parses from the two-token form used by scroll animation libraries: `"top 80%"` means
/// "when the element's top reaches 80% down the viewport"; `"start start"` and `"end end"` are
/// the container bounds of a progress source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub element: Edge,
    pub viewport: Edge,
}

impl ScrollOffset {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// `"top <pct>%"`
    pub const fn top_at(viewport_fraction: f32) -> Self {
        Self::new(Edge::START, Edge::fraction(viewport_fraction))
    }

    /// `"bottom <pct>%"`
    pub const fn bottom_at(viewport_fraction: f32) -> Self {
        Self::new(Edge::END, Edge::fraction(viewport_fraction))
    }

    /// Scroll offset at which the two edges coincide.
    pub fn scroll_position(&self, bounds: ElementBounds, viewport_height: f32) -> f32 {
        bounds.top + self.element.resolve(bounds.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for ScrollOffset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidOffset(s.to_string());
        let mut tokens = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(invalid());
        };
        let element = Edge::parse(element).ok_or_else(invalid)?;
        let viewport = Edge::parse(viewport).ok_or_else(invalid)?;
        Ok(Self { element, viewport })
    }
}
