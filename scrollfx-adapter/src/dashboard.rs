//! The dashboard page: live stats and cards, then the evidence gallery.

use scrollfx::{
    ConfigError, Easing, Keyframes, Property, RangeMapping, Repeat, ScrollOffset, ScrubRule,
    ToggleActions, TriggerRule, TweenSpec,
};

use crate::{Choreography, ChoreographyError, ScrollRuntime, ScrollView};

/// Elements animated by [`ScrollDashboard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DashboardElement {
    Container,
    Parallax,
    /// The dashboard section (header, stats and cards).
    Dashboard,
    Header,
    Stats,
    Card(usize),
    ScrollIndicator,
    ScrollIndicatorDot,
    /// The evidence gallery section.
    Evidence,
    EvidenceHeader,
    EvidenceItem(usize),
}

/// Child components the host renders inside the dashboard. The view only animates the element
/// each one sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DashboardSlot {
    StatsPanel,
    Dashboard,
    LiveFeed,
    EvidenceGallery,
}

impl DashboardSlot {
    pub const ALL: [DashboardSlot; 4] = [
        Self::StatsPanel,
        Self::Dashboard,
        Self::LiveFeed,
        Self::EvidenceGallery,
    ];

    pub fn element(self) -> DashboardElement {
        match self {
            Self::StatsPanel => DashboardElement::Stats,
            Self::Dashboard => DashboardElement::Card(0),
            Self::LiveFeed => DashboardElement::Card(1),
            Self::EvidenceGallery => DashboardElement::EvidenceItem(0),
        }
    }
}

const CARDS: usize = 2;
const EVIDENCE_ITEMS: usize = 1;

/// The scroll-driven dashboard page.
#[derive(Debug)]
pub struct ScrollDashboard {
    view: ScrollView<DashboardElement>,
}

impl ScrollDashboard {
    pub fn choreography() -> Result<Choreography<DashboardElement>, ConfigError> {
        use DashboardElement as E;
        use Property::{Opacity, RotateX, RotateY, Scale, Y, YPercent};

        let entrance = |duration_ms| TweenSpec::new(duration_ms).with_easing(Easing::Power3Out);
        let upper = |rule: TriggerRule| {
            rule.with_start(ScrollOffset::top_at(0.8))
                .with_end(ScrollOffset::bottom_at(0.2))
        };
        let lower = |rule: TriggerRule| {
            rule.with_start(ScrollOffset::top_at(0.7))
                .with_end(ScrollOffset::bottom_at(0.3))
        };

        let choreography = Choreography::new(E::Container)
            .bind(E::Dashboard, Y, RangeMapping::linear(0.0, 0.5, 0.0, -100.0)?)
            .bind(
                E::Dashboard,
                Opacity,
                RangeMapping::linear(0.0, 0.5, 1.0, 0.3)?,
            )
            .bind(E::Evidence, Y, RangeMapping::linear(0.3, 1.0, 100.0, 0.0)?)
            .trigger(
                E::Dashboard,
                [E::Stats],
                upper(TriggerRule::new(
                    entrance(1200)
                        .with_from_to(Y, 100.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0)
                        .with_from_to(Scale, 0.9, 1.0),
                )),
            )
            .trigger(
                E::Dashboard,
                (0..CARDS).map(E::Card),
                lower(TriggerRule::new(
                    entrance(1000)
                        .with_from_to(Y, 80.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0)
                        .with_from_to(RotateY, 15.0, 0.0)
                        .with_stagger(150),
                )),
            )
            .trigger(
                E::Evidence,
                [E::EvidenceHeader],
                upper(TriggerRule::new(
                    entrance(1000)
                        .with_from_to(Y, 60.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0),
                )),
            )
            .trigger(
                E::Evidence,
                (0..EVIDENCE_ITEMS).map(E::EvidenceItem),
                lower(TriggerRule::new(
                    entrance(800)
                        .with_from_to(Y, 100.0, 0.0)
                        .with_from_to(Opacity, 0.0, 1.0)
                        .with_from_to(Scale, 0.8, 1.0)
                        .with_from_to(RotateX, 30.0, 0.0)
                        .with_stagger(100),
                )),
            )
            .trigger(
                E::Header,
                [E::Header],
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
                E::Parallax,
                ScrubRule::parallax(YPercent, -30.0)?,
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

    pub fn mount(runtime: ScrollRuntime, now_ms: u64) -> Result<Self, ChoreographyError> {
        Self::mount_with(runtime, Self::choreography()?, now_ms)
    }

    pub fn mount_with(
        runtime: ScrollRuntime,
        choreography: Choreography<DashboardElement>,
        now_ms: u64,
    ) -> Result<Self, ChoreographyError> {
        Ok(Self {
            view: ScrollView::mount(runtime, choreography, now_ms)?,
        })
    }

    pub fn view(&self) -> &ScrollView<DashboardElement> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollView<DashboardElement> {
        &mut self.view
    }

    pub fn unmount(self) {
        self.view.unmount();
    }
}
