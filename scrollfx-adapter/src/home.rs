//! The landing page: hero, video upload and feature sections.

use alloc::sync::Arc;
use core::fmt;

use scrollfx::{
    ConfigError, Easing, Keyframes, Property, RangeMapping, Repeat, ScrollOffset, ScrubRule,
    ToggleActions, TriggerRule, TweenSpec,
};

use crate::{Choreography, ChoreographyError, ScrollRuntime, ScrollView};

/// Elements animated by [`ScrollHome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HomeElement {
    /// The page container; its scroll range feeds the view's progress.
    Container,
    /// Fixed gradient backdrop behind every section.
    ParallaxBackground,
    Hero,
    HeroTitle,
    HeroHeader,
    /// One of the [`STATS`] tiles under the hero header.
    Stat(usize),
    ScrollIndicator,
    ScrollIndicatorDot,
    /// Section hosting the video uploader.
    Uploader,
    /// Card wrapping the video uploader child component.
    UploadCard,
    Features,
    FeaturesHeading,
    /// One of the [`FEATURES`] cards.
    FeatureCard(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: "99.9%",
        label: "Accuracy Rate",
    },
    Stat {
        value: "24/7",
        label: "Monitoring",
    },
    Stat {
        value: "<1s",
        label: "Processing Time",
    },
    Stat {
        value: "500+",
        label: "Cities Deployed",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient endpoints of the icon tile.
    pub accent: (&'static str, &'static str),
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "AI-Powered Detection",
        description: "Advanced computer vision for real-time violation detection",
        accent: ("blue-500", "cyan-500"),
    },
    Feature {
        title: "Instant Processing",
        description: "Process video footage in real-time with 99.9% accuracy",
        accent: ("purple-500", "pink-500"),
    },
    Feature {
        title: "Secure Evidence",
        description: "Tamper-proof evidence collection and storage",
        accent: ("green-500", "emerald-500"),
    },
    Feature {
        title: "Smart Analytics",
        description: "Comprehensive reporting and trend analysis",
        accent: ("orange-500", "red-500"),
    },
];

/// Invoked by the uploader once a video upload finishes.
pub type UploadCompleteCallback = Arc<dyn Fn() + Send + Sync>;

/// Inputs accepted by [`ScrollHome`].
#[derive(Clone)]
pub struct HomeProps {
    pub on_upload_complete: UploadCompleteCallback,
    pub is_processing: bool,
}

impl fmt::Debug for HomeProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HomeProps")
            .field("on_upload_complete", &"Fn(..)")
            .field("is_processing", &self.is_processing)
            .finish()
    }
}

/// Props forwarded untouched to the uploader child the host renders in
/// [`HomeElement::UploadCard`].
#[derive(Clone)]
pub struct UploaderProps {
    on_upload_complete: UploadCompleteCallback,
    is_processing: bool,
}

impl UploaderProps {
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn on_upload_complete(&self) -> &UploadCompleteCallback {
        &self.on_upload_complete
    }

    pub fn notify_upload_complete(&self) {
        (self.on_upload_complete)();
    }
}

impl fmt::Debug for UploaderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploaderProps")
            .field("is_processing", &self.is_processing)
            .finish_non_exhaustive()
    }
}

fn entrance(duration_ms: u64) -> TweenSpec {
    TweenSpec::new(duration_ms).with_easing(Easing::Power3Out)
}

/// The scroll-driven landing page.
///
/// Owns its [`ScrollView`] exclusively and forwards [`HomeProps`] to the uploader slot.
#[derive(Debug)]
pub struct ScrollHome {
    view: ScrollView<HomeElement>,
    uploader: UploaderProps,
}

impl ScrollHome {
    /// The landing page choreography.
    pub fn choreography() -> Result<Choreography<HomeElement>, ConfigError> {
        use HomeElement as E;
        use Property::{Opacity, RotateX, Scale, Y, YPercent};

        let choreography = Choreography::new(E::Container)
            .bind(E::Hero, Y, RangeMapping::linear(0.0, 0.33, 0.0, -200.0)?)
            .bind(E::Hero, Opacity, RangeMapping::linear(0.0, 0.33, 1.0, 0.0)?)
            .bind(
                E::Uploader,
                Y,
                RangeMapping::linear(0.2, 0.66, 100.0, -100.0)?,
            )
            .bind(E::Features, Y, RangeMapping::linear(0.5, 1.0, 100.0, 0.0)?)
            .trigger(
                E::Hero,
                [E::HeroTitle],
                TriggerRule::new(
                    entrance(1200)
                        .with_from_to(Y, 100.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0),
                )
                .with_start(ScrollOffset::top_at(0.8))
                .with_end(ScrollOffset::bottom_at(0.2)),
            )
            .trigger(
                E::Uploader,
                [E::UploadCard],
                TriggerRule::new(
                    entrance(1500)
                        .with_from_to(Y, 150.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0)
                        .with_from_to(Scale, 0.8, 1.0),
                )
                .with_start(ScrollOffset::top_at(0.7))
                .with_end(ScrollOffset::bottom_at(0.3)),
            )
            .trigger(
                E::Features,
                (0..FEATURES.len()).map(E::FeatureCard),
                TriggerRule::new(
                    entrance(1000)
                        .with_from_to(Y, 100.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0)
                        .with_from_to(RotateX, 45.0, 0.0)
                        .with_stagger(200),
                )
                .with_start(ScrollOffset::top_at(0.8))
                .with_end(ScrollOffset::bottom_at(0.2)),
            )
            .trigger(
                E::FeaturesHeading,
                [E::FeaturesHeading],
                TriggerRule::new(
                    TweenSpec::new(800)
                        .with_easing(Easing::EaseInOutCubic)
                        .with_from_to(Opacity, 0.0, 1.0)
                        .with_from_to(Y, 50.0, 0.0),
                )
                .with_toggle_actions(ToggleActions::IN_VIEW),
            )
            .scrub(
                E::Container,
                E::ParallaxBackground,
                ScrubRule::parallax(YPercent, -50.0)?,
            )
            .on_mount(
                [E::HeroHeader],
                TweenSpec::new(800)
                    .with_easing(Easing::EaseInOutCubic)
                    .with_from_to(Opacity, 0.0, 1.0)
                    .with_from_to(Y, 30.0, 0.0),
            )
            .on_mount(
                (0..STATS.len()).map(E::Stat),
                TweenSpec::new(500)
                    .with_easing(Easing::EaseInOutCubic)
                    .with_from_to(Opacity, 0.0, 1.0)
                    .with_from_to(Y, 20.0, 0.0)
                    .with_delay(1000)
                    .with_stagger(100),
            )
            .looped(
                E::ScrollIndicator,
                Keyframes::new(Y, [0.0, 10.0, 0.0], 2000)?.with_repeat(Repeat::Infinite),
            )
            .looped(
                E::ScrollIndicatorDot,
                Keyframes::new(Y, [0.0, 12.0, 0.0], 2000)?.with_repeat(Repeat::Infinite),
            );
        Ok(choreography)
    }

    pub fn mount(
        runtime: ScrollRuntime,
        props: HomeProps,
        now_ms: u64,
    ) -> Result<Self, ChoreographyError> {
        Self::mount_with(runtime, props, Self::choreography()?, now_ms)
    }

    /// Mounts with a custom (e.g. configuration-loaded) choreography.
    pub fn mount_with(
        runtime: ScrollRuntime,
        props: HomeProps,
        choreography: Choreography<HomeElement>,
        now_ms: u64,
    ) -> Result<Self, ChoreographyError> {
        let view = ScrollView::mount(runtime, choreography, now_ms)?;
        let HomeProps {
            on_upload_complete,
            is_processing,
        } = props;
        Ok(Self {
            view,
            uploader: UploaderProps {
                on_upload_complete,
                is_processing,
            },
        })
    }

    pub fn view(&self) -> &ScrollView<HomeElement> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollView<HomeElement> {
        &mut self.view
    }

    pub fn uploader(&self) -> &UploaderProps {
        &self.uploader
    }

    pub fn set_processing(&mut self, is_processing: bool) {
        self.uploader.is_processing = is_processing;
    }

    pub fn unmount(self) {
        self.view.unmount();
    }
}
