//! Scroll views for the `scrollfx` crate.
//!
//! The `scrollfx` crate is UI-agnostic and focuses on the math and state machines. This crate
//! composes them into mountable views:
//!
//! - Element layout keyed by the host's own identifiers
//! - Observer registration that returns a disposal handle ([`Subscription`]); dropping a view
//!   synchronously tears down every trigger, scrub and timeline it created
//! - [`ScrollView`], the frame-driven composition of progress, smoothing, mapping and triggers
//! - The two page presets, [`ScrollHome`] and [`ScrollDashboard`]
//!
//! This crate holds no UI objects. Adapters feed it geometry, scroll offsets and frame ticks,
//! and read back per-element [`scrollfx::Style`]s.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod choreography;
mod dashboard;
mod home;
mod key;
mod layout;
mod registry;
mod runtime;
mod scope;
mod view;


pub use choreography::{
    Binding, Choreography, ChoreographyError, LoopSpec, MountSpec, ScrubSpec, TriggerSpec,
};
pub use dashboard::{DashboardElement, DashboardSlot, ScrollDashboard};
pub use home::{
    FEATURES, Feature, HomeElement, HomeProps, STATS, ScrollHome, Stat, UploadCompleteCallback,
    UploaderProps,
};
pub use key::ElementKey;
pub use layout::Layout;
pub use registry::{Registry, Subscription};
pub use runtime::ScrollRuntime;
pub use scope::Scope;
pub use view::ScrollView;
