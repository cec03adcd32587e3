use crate::ScrollDirection;

/// A lightweight, serializable snapshot of the scroll input.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f32,
    pub viewport_height: f32,
    pub direction: Option<ScrollDirection>,
}

/// Scroll input plus the progress derived from it for one frame.
///
/// Useful for debugging overlays and for restoring a view across sessions without coupling
/// the engine to any UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub scroll: ScrollState,
    pub raw_progress: f32,
    pub smoothed_progress: f32,
}
