use alloc::string::ToString;
use core::str::FromStr;

use crate::{ConfigError, ElementBounds, Playback, ScrollOffset, Style, Timeline, TweenSpec};

/// What a trigger does to its timeline when a boundary is crossed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    #[default]
    None,
}

impl ToggleAction {
    pub fn apply(self, timeline: &mut Timeline, now_ms: u64) {
        match self {
            Self::Play => timeline.play(now_ms),
            Self::Pause => timeline.pause(),
            Self::Resume => timeline.resume(now_ms),
            Self::Reverse => timeline.reverse(now_ms),
            Self::Restart => timeline.restart(now_ms),
            Self::Reset => timeline.reset(),
            Self::Complete => timeline.complete(),
            Self::None => {}
        }
    }
}

impl FromStr for ToggleAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => return Err(ConfigError::UnknownToggleAction(other.to_string())),
        })
    }
}

/// Actions for the four boundary crossings, in the order enter / leave / enter-back /
/// leave-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `"play none none reverse"`: play when scrolled into, rewind when scrolled back above.
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// `"play reverse play reverse"`: shown only while the trigger range is on screen.
    pub const IN_VIEW: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::Reverse,
        on_enter_back: ToggleAction::Play,
        on_leave_back: ToggleAction::Reverse,
    };

    /// `"play none none none"`: a one-shot entrance.
    pub const ONCE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_REVERSE
    }
}

impl FromStr for ToggleActions {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut actions = [ToggleAction::None; 4];
        let mut count = 0usize;
        for token in s.split_whitespace() {
            if count < actions.len() {
                actions[count] = token.parse()?;
            }
            count += 1;
        }
        if count != actions.len() {
            return Err(ConfigError::ToggleActionCount(count));
        }
        let [on_enter, on_leave, on_enter_back, on_leave_back] = actions;
        Ok(Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        })
    }
}

/// A boundary crossing reported by [`Trigger::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    /// Scrolling forward past the start boundary.
    Enter,
    /// Scrolling forward past the end boundary.
    Leave,
    /// Scrolling backward past the end boundary.
    EnterBack,
    /// Scrolling backward past the start boundary.
    LeaveBack,
}

/// Where the scroll offset sits relative to a trigger's `[start, end]` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    Before,
    Active,
    After,
}

/// Visible state of a trigger's animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerState {
    Idle,
    Entering,
    Shown,
    Exiting,
}

/// Declarative viewport trigger: boundaries, toggle policy and the timeline it drives.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerRule {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
    pub toggle_actions: ToggleActions,
    pub animation: TweenSpec,
}

impl TriggerRule {
    /// A rule spanning `"top bottom"` → `"bottom top"` with the default toggle policy.
    pub fn new(animation: TweenSpec) -> Self {
        Self {
            start: ScrollOffset::top_at(1.0),
            end: ScrollOffset::bottom_at(0.0),
            toggle_actions: ToggleActions::default(),
            animation,
        }
    }

    pub fn with_start(mut self, start: ScrollOffset) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: ScrollOffset) -> Self {
        self.end = end;
        self
    }

    pub fn with_toggle_actions(mut self, toggle_actions: ToggleActions) -> Self {
        self.toggle_actions = toggle_actions;
        self
    }

    /// Scroll offsets of the start and end boundaries.
    pub fn range(&self, bounds: ElementBounds, viewport_height: f32) -> (f32, f32) {
        boundary_range(self.start, self.end, bounds, viewport_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let edges = [
            self.start.element,
            self.start.viewport,
            self.end.element,
            self.end.viewport,
        ];
        if edges
            .iter()
            .any(|e| !e.fraction.is_finite() || !e.pixels.is_finite())
        {
            return Err(ConfigError::NonFinite("trigger boundaries"));
        }
        if self
            .animation
            .tweens
            .iter()
            .any(|t| !t.from.is_finite() || !t.to.is_finite())
        {
            return Err(ConfigError::NonFinite("trigger animation"));
        }
        Ok(())
    }
}

/// Up to two crossings produced by a single scroll update, in crossing order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
    events: [Option<TriggerEvent>; 2],
}

impl Transitions {
    fn push(&mut self, event: TriggerEvent) {
        if let Some(slot) = self.events.iter_mut().find(|e| e.is_none()) {
            *slot = Some(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events[0].is_none()
    }

    pub fn len(&self) -> usize {
        self.events.iter().flatten().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = TriggerEvent> + '_ {
        self.events.iter().flatten().copied()
    }
}

/// A live viewport trigger: zone tracking plus the timeline it plays and reverses.
#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    start: ScrollOffset,
    end: ScrollOffset,
    toggle_actions: ToggleActions,
    timeline: Timeline,
    zone: Zone,
}

impl Trigger {
    pub fn new(rule: TriggerRule, items: usize) -> Self {
        let TriggerRule {
            start,
            end,
            toggle_actions,
            animation,
        } = rule;
        Self {
            start,
            end,
            toggle_actions,
            timeline: Timeline::new(animation, items),
            zone: Zone::Before,
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn toggle_actions(&self) -> ToggleActions {
        self.toggle_actions
    }

    pub fn range(&self, bounds: ElementBounds, viewport_height: f32) -> (f32, f32) {
        boundary_range(self.start, self.end, bounds, viewport_height)
    }

    /// Re-evaluates the zone at `scroll_y` and fires the crossed boundaries' actions.
    pub fn update(
        &mut self,
        scroll_y: f32,
        bounds: ElementBounds,
        viewport_height: f32,
        now_ms: u64,
    ) -> Transitions {
        let mut transitions = Transitions::default();
        if !scroll_y.is_finite() {
            return transitions;
        }
        let (start, end) = self.range(bounds, viewport_height);
        let next = if scroll_y < start {
            Zone::Before
        } else if scroll_y > end {
            Zone::After
        } else {
            Zone::Active
        };

        match (self.zone, next) {
            (Zone::Before, Zone::Active) => transitions.push(TriggerEvent::Enter),
            (Zone::Before, Zone::After) => {
                transitions.push(TriggerEvent::Enter);
                transitions.push(TriggerEvent::Leave);
            }
            (Zone::Active, Zone::After) => transitions.push(TriggerEvent::Leave),
            (Zone::After, Zone::Active) => transitions.push(TriggerEvent::EnterBack),
            (Zone::After, Zone::Before) => {
                transitions.push(TriggerEvent::EnterBack);
                transitions.push(TriggerEvent::LeaveBack);
            }
            (Zone::Active, Zone::Before) => transitions.push(TriggerEvent::LeaveBack),
            _ => {}
        }
        self.zone = next;

        for event in transitions.iter() {
            self.fire(event, now_ms);
        }
        transitions
    }

    /// Applies the toggle action configured for `event`.
    pub fn fire(&mut self, event: TriggerEvent, now_ms: u64) {
        let action = self.toggle_actions.action_for(event);
        ftrace!(?event, ?action, "Trigger::fire");
        action.apply(&mut self.timeline, now_ms);
    }

    /// Advances the timeline. Returns `true` while it is still playing.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.timeline.tick(now_ms)
    }

    pub fn state(&self) -> TriggerState {
        match self.timeline.playback() {
            Playback::Forward => TriggerState::Entering,
            Playback::Reverse => TriggerState::Exiting,
            Playback::Paused if self.timeline.is_at_start() => TriggerState::Idle,
            Playback::Paused if self.timeline.is_at_end() => TriggerState::Shown,
            Playback::Paused if self.timeline.is_reversed() => TriggerState::Exiting,
            Playback::Paused => TriggerState::Entering,
        }
    }

    pub fn item_style(&self, index: usize) -> Style {
        self.timeline.item_style(index)
    }

    pub fn kill(&mut self) {
        self.timeline.kill();
    }
}

/// An end placed before the start collapses onto it.
fn boundary_range(
    start: ScrollOffset,
    end: ScrollOffset,
    bounds: ElementBounds,
    viewport_height: f32,
) -> (f32, f32) {
    let start = start.scroll_position(bounds, viewport_height);
    let end = end.scroll_position(bounds, viewport_height);
    (start, end.max(start))
}
