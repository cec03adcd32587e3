use alloc::vec::Vec;

use crate::{Easing, Property, Style};

/// A single property animated between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTween {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

/// Declarative description of a (possibly staggered) entrance animation.
///
/// Every target item runs the same tweens; item `i` starts `delay_ms + i * stagger_ms` after
/// the timeline starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenSpec {
    pub tweens: Vec<PropertyTween>,
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub stagger_ms: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            tweens: Vec::new(),
            duration_ms: duration_ms.max(1),
            delay_ms: 0,
            stagger_ms: 0,
            easing: Easing::Linear,
        }
    }

    /// Animates `property` from `from` to `to`. A second call for the same property replaces
    /// the first.
    pub fn with_from_to(mut self, property: Property, from: f32, to: f32) -> Self {
        let tween = PropertyTween { property, from, to };
        match self.tweens.iter_mut().find(|t| t.property == property) {
            Some(existing) => *existing = tween,
            None => self.tweens.push(tween),
        }
        self
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_stagger(mut self, stagger_ms: u64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms.max(1)
    }

    /// Offset at which item `index` begins to move.
    pub fn item_start_ms(&self, index: usize) -> u64 {
        self.delay_ms
            .saturating_add(self.stagger_ms.saturating_mul(index as u64))
    }

    /// Length of the whole timeline for `items` targets.
    pub fn total_ms(&self, items: usize) -> u64 {
        self.item_start_ms(items.saturating_sub(1))
            .saturating_add(self.duration_ms())
    }

    pub fn from_style(&self) -> Style {
        let mut style = Style::EMPTY;
        for t in &self.tweens {
            style.set(t.property, t.from);
        }
        style
    }

    pub fn to_style(&self) -> Style {
        let mut style = Style::EMPTY;
        for t in &self.tweens {
            style.set(t.property, t.to);
        }
        style
    }

    /// Style of item `index` when the timeline playhead sits at `playhead_ms`.
    pub fn sample_item(&self, index: usize, playhead_ms: u64) -> Style {
        let start = self.item_start_ms(index);
        if playhead_ms <= start {
            return self.from_style();
        }
        let local = playhead_ms - start;
        if local >= self.duration_ms() {
            return self.to_style();
        }
        let eased = self
            .easing
            .sample(local as f32 / self.duration_ms() as f32);
        let mut style = Style::EMPTY;
        for t in &self.tweens {
            style.set(t.property, t.from + (t.to - t.from) * eased);
        }
        style
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Playback {
    Paused,
    Forward,
    Reverse,
}

/// A playable instance of a [`TweenSpec`] over a fixed number of items.
///
/// The visual output is a pure function of the playhead, so reversing from any point retraces
/// exactly the same states back to the `from` style.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    spec: TweenSpec,
    items: usize,
    playhead_ms: u64,
    playback: Playback,
    /// Direction used by `resume` after a pause.
    reversed: bool,
    last_ms: Option<u64>,
    killed: bool,
}

impl Timeline {
    pub fn new(spec: TweenSpec, items: usize) -> Self {
        Self {
            spec,
            items,
            playhead_ms: 0,
            playback: Playback::Paused,
            reversed: false,
            last_ms: None,
            killed: false,
        }
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    pub fn items(&self) -> usize {
        self.items
    }

    pub fn total_ms(&self) -> u64 {
        self.spec.total_ms(self.items)
    }

    pub fn playhead_ms(&self) -> u64 {
        self.playhead_ms
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn progress(&self) -> f32 {
        self.playhead_ms as f32 / self.total_ms() as f32
    }

    pub fn is_active(&self) -> bool {
        self.playback != Playback::Paused
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    pub fn is_at_start(&self) -> bool {
        self.playhead_ms == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.playhead_ms >= self.total_ms()
    }

    /// Plays forward from the current playhead.
    pub fn play(&mut self, now_ms: u64) {
        self.start(false, now_ms);
    }

    /// Plays backward from the current playhead.
    pub fn reverse(&mut self, now_ms: u64) {
        self.start(true, now_ms);
    }

    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Continues in the last direction played.
    pub fn resume(&mut self, now_ms: u64) {
        self.start(self.reversed, now_ms);
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.playhead_ms = 0;
        self.start(false, now_ms);
    }

    /// Jumps to the start and pauses.
    pub fn reset(&mut self) {
        self.playhead_ms = 0;
        self.reversed = false;
        self.playback = Playback::Paused;
    }

    /// Jumps to the end and pauses.
    pub fn complete(&mut self) {
        self.playhead_ms = self.total_ms();
        self.playback = Playback::Paused;
    }

    /// Stops the timeline for good; further play requests are ignored.
    pub fn kill(&mut self) {
        self.killed = true;
        self.playback = Playback::Paused;
    }

    fn start(&mut self, reversed: bool, now_ms: u64) {
        if self.killed {
            return;
        }
        self.reversed = reversed;
        self.last_ms = Some(now_ms);
        let at_bound = if reversed {
            self.is_at_start()
        } else {
            self.is_at_end()
        };
        self.playback = match (at_bound, reversed) {
            (true, _) => Playback::Paused,
            (false, false) => Playback::Forward,
            (false, true) => Playback::Reverse,
        };
    }

    /// Advances the playhead to `now_ms`. Returns `true` while still playing.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms);

        match self.playback {
            Playback::Paused => return false,
            Playback::Forward => {
                let total = self.total_ms();
                self.playhead_ms = self.playhead_ms.saturating_add(elapsed).min(total);
                if self.playhead_ms >= total {
                    self.playback = Playback::Paused;
                }
            }
            Playback::Reverse => {
                self.playhead_ms = self.playhead_ms.saturating_sub(elapsed);
                if self.playhead_ms == 0 {
                    self.playback = Playback::Paused;
                }
            }
        }
        self.is_active()
    }

    pub fn item_style(&self, index: usize) -> Style {
        debug_assert!(
            index < self.items,
            "Timeline::item_style: index out of bounds (i={index}, items={})",
            self.items
        );
        self.spec.sample_item(index, self.playhead_ms)
    }
}
