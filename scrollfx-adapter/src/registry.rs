use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use scrollfx::{
    Keyframes, ScrubRule, Style, Timeline, Trigger, TriggerRule, TriggerState, TweenSpec,
};

use crate::{ElementKey, Layout};

/// A scroll or frame observer owned by a [`Registry`].
#[derive(Debug)]
enum Observer<K> {
    Trigger {
        trigger: K,
        targets: Vec<K>,
        inner: Trigger,
    },
    Scrub {
        trigger: K,
        element: K,
        rule: ScrubRule,
        style: Style,
    },
    Loop {
        element: K,
        keyframes: Keyframes,
        started_ms: u64,
        style: Style,
    },
    Mount {
        targets: Vec<K>,
        timeline: Timeline,
    },
}

impl<K> Observer<K> {
    fn has_active_timeline(&self) -> bool {
        match self {
            Self::Trigger { inner, .. } => inner.timeline().is_active(),
            Self::Mount { timeline, .. } => timeline.is_active(),
            Self::Scrub { .. } | Self::Loop { .. } => false,
        }
    }

    fn kill(&mut self) {
        match self {
            Self::Trigger { inner, .. } => inner.kill(),
            Self::Mount { timeline, .. } => timeline.kill(),
            Self::Scrub { .. } | Self::Loop { .. } => {}
        }
    }
}

impl<K: ElementKey> Observer<K> {
    fn on_scroll(&mut self, scroll_y: f32, layout: &Layout<K>, now_ms: u64) {
        match self {
            Self::Trigger { trigger, inner, .. } => {
                let Some(bounds) = layout.get(trigger) else {
                    ftrace!("trigger element has no bounds yet");
                    return;
                };
                inner.update(scroll_y, bounds, layout.viewport_height(), now_ms);
            }
            Self::Scrub {
                trigger,
                rule,
                style,
                ..
            } => {
                let Some(bounds) = layout.get(trigger) else {
                    ftrace!("scrub trigger element has no bounds yet");
                    return;
                };
                *style = rule.style_at(scroll_y, bounds, layout.viewport_height());
            }
            Self::Loop { .. } | Self::Mount { .. } => {}
        }
    }

    fn tick(&mut self, now_ms: u64) -> bool {
        match self {
            Self::Trigger { inner, .. } => inner.tick(now_ms),
            Self::Scrub { .. } => false,
            Self::Loop {
                keyframes,
                started_ms,
                style,
                ..
            } => {
                let elapsed = now_ms.saturating_sub(*started_ms);
                style.set(keyframes.property, keyframes.sample(elapsed));
                !keyframes.is_finished(elapsed)
            }
            Self::Mount { timeline, .. } => timeline.tick(now_ms),
        }
    }

    fn for_each_style(&self, f: &mut dyn FnMut(&K, Style)) {
        match self {
            Self::Trigger { targets, inner, .. } => {
                for (i, target) in targets.iter().enumerate() {
                    f(target, inner.item_style(i));
                }
            }
            Self::Scrub { element, style, .. } | Self::Loop { element, style, .. } => {
                f(element, *style);
            }
            Self::Mount { targets, timeline } => {
                for (i, target) in targets.iter().enumerate() {
                    f(target, timeline.item_style(i));
                }
            }
        }
    }
}

#[derive(Debug)]
struct Slots<K> {
    entries: Vec<Option<Observer<K>>>,
    free: Vec<usize>,
}

impl<K> Slots<K> {
    fn insert(&mut self, observer: Observer<K>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.entries[slot] = Some(observer);
                slot
            }
            None => {
                self.entries.push(Some(observer));
                self.entries.len() - 1
            }
        }
    }

    fn live(&self) -> impl Iterator<Item = &Observer<K>> {
        self.entries.iter().flatten()
    }

    fn live_mut(&mut self) -> impl Iterator<Item = &mut Observer<K>> {
        self.entries.iter_mut().flatten()
    }
}

/// A per-view table of scroll and frame observers.
///
/// Every registration returns a [`Subscription`]; the observer lives exactly as long as that
/// handle. The registry is single-threaded and not re-entrant: do not register or dispose from
/// inside a [`Registry::for_each_style`] callback.
pub struct Registry<K> {
    inner: Rc<RefCell<Slots<K>>>,
}

impl<K> Clone for Registry<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K> fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("active", &self.active_count())
            .finish()
    }
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Registry<K> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slots {
                entries: Vec::new(),
                free: Vec::new(),
            })),
        }
    }

    /// Number of live observers.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().live().count()
    }

    /// Number of timelines currently playing.
    pub fn active_timelines(&self) -> usize {
        self.inner
            .borrow()
            .live()
            .filter(|o| o.has_active_timeline())
            .count()
    }

    fn register(&self, observer: Observer<K>) -> Subscription<K> {
        let slot = self.inner.borrow_mut().insert(observer);
        ftrace!(slot, "Registry::register");
        Subscription {
            slot,
            registry: Rc::downgrade(&self.inner),
        }
    }
}

impl<K: ElementKey> Registry<K> {
    /// Registers a viewport trigger over `targets`, with boundaries measured on `trigger`.
    pub fn register_trigger(
        &self,
        trigger: K,
        targets: Vec<K>,
        rule: TriggerRule,
    ) -> Subscription<K> {
        let inner = Trigger::new(rule, targets.len());
        self.register(Observer::Trigger {
            trigger,
            targets,
            inner,
        })
    }

    /// Registers a continuous scrub of `element`, driven by the scroll range of `trigger`.
    pub fn register_scrub(&self, trigger: K, element: K, rule: ScrubRule) -> Subscription<K> {
        self.register(Observer::Scrub {
            trigger,
            element,
            rule,
            style: Style::EMPTY,
        })
    }

    /// Registers a keyframe loop that starts at `now_ms`.
    pub fn register_loop(&self, element: K, keyframes: Keyframes, now_ms: u64) -> Subscription<K> {
        let style = Style::EMPTY.with(keyframes.property, keyframes.sample(0));
        self.register(Observer::Loop {
            element,
            keyframes,
            started_ms: now_ms,
            style,
        })
    }

    /// Registers an entrance animation over `targets` and starts playing it at `now_ms`.
    pub fn register_mount(
        &self,
        targets: Vec<K>,
        animation: TweenSpec,
        now_ms: u64,
    ) -> Subscription<K> {
        let mut timeline = Timeline::new(animation, targets.len());
        timeline.play(now_ms);
        self.register(Observer::Mount { targets, timeline })
    }

    /// Re-evaluates scroll-driven observers at `scroll_y`.
    pub fn on_scroll(&self, scroll_y: f32, layout: &Layout<K>, now_ms: u64) {
        for observer in self.inner.borrow_mut().live_mut() {
            observer.on_scroll(scroll_y, layout, now_ms);
        }
    }

    /// Advances every timeline and loop. Returns `true` while anything is still moving.
    pub fn tick(&self, now_ms: u64) -> bool {
        let mut animating = false;
        for observer in self.inner.borrow_mut().live_mut() {
            animating |= observer.tick(now_ms);
        }
        animating
    }

    /// Emits the current style of every animated element, in registration order.
    pub fn for_each_style(&self, mut f: impl FnMut(&K, Style)) {
        for observer in self.inner.borrow().live() {
            observer.for_each_style(&mut f);
        }
    }

    /// State of the first trigger animating `target`.
    pub fn trigger_state(&self, target: &K) -> Option<TriggerState> {
        self.inner.borrow().live().find_map(|o| match o {
            Observer::Trigger { targets, inner, .. } if targets.contains(target) => {
                Some(inner.state())
            }
            _ => None,
        })
    }
}

/// Disposal handle for one registered observer.
///
/// Dropping the handle (or calling [`Subscription::dispose`]) removes the observer and kills
/// its timeline synchronously; nothing it owned can fire afterward.
#[must_use = "dropping a Subscription disposes the observer immediately"]
pub struct Subscription<K> {
    slot: usize,
    registry: Weak<RefCell<Slots<K>>>,
}

impl<K> Subscription<K> {
    /// `false` once the registry itself is gone.
    pub fn is_active(&self) -> bool {
        self.registry.strong_count() > 0
    }

    pub fn dispose(self) {
        drop(self);
    }
}

impl<K> fmt::Debug for Subscription<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("slot", &self.slot)
            .field("active", &self.is_active())
            .finish()
    }
}

impl<K> Drop for Subscription<K> {
    fn drop(&mut self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        let mut slots = inner.borrow_mut();
        if let Some(mut observer) = slots.entries.get_mut(self.slot).and_then(Option::take) {
            observer.kill();
            slots.free.push(self.slot);
            ftrace!(slot = self.slot, "Subscription::drop");
        }
    }
}
