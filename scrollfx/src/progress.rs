use crate::{Edge, ElementBounds, ScrollOffset};

/// Normalized scroll progress of an element between two [`ScrollOffset`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressSource {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ProgressSource {
    /// `"start start"` → `"end end"`: 0 when the element's top reaches the viewport top, 1 when
    /// its bottom reaches the viewport bottom.
    pub const CONTAINER: ProgressSource = ProgressSource::new(
        ScrollOffset::new(Edge::START, Edge::START),
        ScrollOffset::new(Edge::END, Edge::END),
    );

    /// `"top bottom"` → `"bottom top"`: the whole time any part of the element is on screen.
    pub const IN_VIEW: ProgressSource = ProgressSource::new(
        ScrollOffset::new(Edge::START, Edge::END),
        ScrollOffset::new(Edge::END, Edge::START),
    );

    pub const fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self { start, end }
    }

    /// Scroll offsets at which progress is 0 and 1.
    pub fn range(&self, bounds: ElementBounds, viewport_height: f32) -> (f32, f32) {
        (
            self.start.scroll_position(bounds, viewport_height),
            self.end.scroll_position(bounds, viewport_height),
        )
    }

    /// Progress in `[0, 1]` at `scroll_y`.
    ///
    /// An empty or inverted range degrades to a step: 0 before its start, 1 from it onward.
    pub fn progress(&self, scroll_y: f32, bounds: ElementBounds, viewport_height: f32) -> f32 {
        if !scroll_y.is_finite() {
            return 0.0;
        }
        let (start, end) = self.range(bounds, viewport_height);
        let span = end - start;
        if span.is_nan() || span <= 0.0 {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / span).clamp(0.0, 1.0)
    }
}

impl Default for ProgressSource {
    fn default() -> Self {
        Self::CONTAINER
    }
}
