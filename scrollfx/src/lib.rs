//! A headless scroll-linked animation engine.
//!
//! For view composition (element layout, observer registration, page presets), see the
//! `scrollfx-adapter` crate.
//!
//! This crate focuses on the math and state behind scroll choreography: normalized scroll
//! progress between two anchors, spring smoothing of that signal, linear range mapping onto
//! visual properties, and viewport triggers that play or reverse staggered timelines.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - viewport size
//! - element geometry along the scroll axis
//! - scroll offsets and frame timestamps
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod error;
mod keyframes;
mod mapping;
mod offset;
mod progress;
mod scrub;
mod spring;
mod state;
mod timeline;
mod trigger;
mod types;

#[cfg(test)]
mod tests;

pub use easing::Easing;
pub use error::ConfigError;
pub use keyframes::{Keyframes, Repeat};
pub use mapping::{PropertyMapping, RangeMapping};
pub use offset::{Edge, ScrollOffset};
pub use progress::ProgressSource;
pub use scrub::ScrubRule;
pub use spring::{ProgressSmoother, Spring, SpringConfig};
pub use state::{FrameState, ScrollState};
pub use timeline::{Playback, PropertyTween, Timeline, TweenSpec};
pub use trigger::{
    ToggleAction, ToggleActions, Transitions, Trigger, TriggerEvent, TriggerRule, TriggerState,
    Zone,
};
pub use types::{ElementBounds, Property, ScrollDirection, Style};
