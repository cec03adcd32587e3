use alloc::vec::Vec;

use scrollfx::{
    ElementBounds, FrameState, ProgressSmoother, ProgressSource, ScrollDirection, ScrollState,
    Style,
};

use crate::{
    Binding, Choreography, ChoreographyError, ElementKey, Layout, Registry, Scope, ScrollRuntime,
};

/// A framework-neutral scroll view: container progress, spring smoothing, property bindings,
/// and the viewport triggers, scrubs and loops of a [`Choreography`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_layout` when geometry is measured
/// - `on_scroll` on every scroll event
/// - `tick(now_ms)` each frame, then read styles with `for_each_style` / `style_of`
///
/// Dropping the view (or calling `unmount`) disposes every observer and timeline it created.
#[derive(Debug)]
pub struct ScrollView<K: ElementKey> {
    container: K,
    progress_source: ProgressSource,
    bindings: Vec<Binding<K>>,
    layout: Layout<K>,
    smoother: ProgressSmoother,
    raw_progress: f32,
    scroll: ScrollState,
    scope: Scope<K>,
}

impl<K: ElementKey> ScrollView<K> {
    /// Validates `choreography` and registers all of its observers.
    ///
    /// Mount animations start playing at `now_ms`.
    pub fn mount(
        _runtime: ScrollRuntime,
        choreography: Choreography<K>,
        now_ms: u64,
    ) -> Result<Self, ChoreographyError> {
        choreography.validate()?;
        let Choreography {
            container,
            progress,
            smoothing,
            bindings,
            triggers,
            scrubs,
            loops,
            mounts,
        } = choreography;

        let registry = Registry::new();
        let mut scope = Scope::new(registry.clone());
        for spec in triggers {
            scope.adopt(registry.register_trigger(spec.trigger, spec.targets, spec.rule));
        }
        for spec in scrubs {
            scope.adopt(registry.register_scrub(spec.trigger, spec.element, spec.rule));
        }
        for spec in loops {
            scope.adopt(registry.register_loop(spec.element, spec.keyframes, now_ms));
        }
        for spec in mounts {
            scope.adopt(registry.register_mount(spec.targets, spec.animation, now_ms));
        }
        fdebug!(
            bindings = bindings.len(),
            observers = scope.len(),
            "ScrollView::mount"
        );

        Ok(Self {
            container,
            progress_source: progress,
            bindings,
            layout: Layout::default(),
            smoother: ProgressSmoother::new(smoothing),
            raw_progress: 0.0,
            scroll: ScrollState::default(),
            scope,
        })
    }

    pub fn layout(&self) -> &Layout<K> {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout<K> {
        &mut self.layout
    }

    pub fn on_viewport_size(&mut self, viewport_height: f32) {
        self.layout.set_viewport_height(viewport_height);
        self.scroll.viewport_height = viewport_height;
    }

    pub fn on_layout(&mut self, key: K, bounds: ElementBounds) {
        self.layout.set(key, bounds);
    }

    /// Call this when the UI reports a scroll offset change.
    ///
    /// Raw progress and trigger crossings update synchronously; the smoothed progress catches
    /// up on the following `tick` calls.
    ///
    /// Non-finite offsets are ignored.
    pub fn on_scroll(&mut self, scroll_y: f32, now_ms: u64) {
        if !scroll_y.is_finite() {
            ftrace!("ScrollView::on_scroll: ignoring non-finite offset");
            return;
        }
        if let Some(direction) = ScrollDirection::between(self.scroll.offset, scroll_y) {
            self.scroll.direction = Some(direction);
        }
        self.scroll.offset = scroll_y;
        self.refresh(now_ms);
    }

    /// Re-evaluates progress and triggers at the current offset, e.g. after a layout change.
    pub fn refresh(&mut self, now_ms: u64) {
        let scroll_y = self.scroll.offset;
        let viewport_height = self.layout.viewport_height();
        match self.layout.get(&self.container) {
            Some(bounds) => {
                self.raw_progress = self
                    .progress_source
                    .progress(scroll_y, bounds, viewport_height);
                self.smoother.set_raw(self.raw_progress);
            }
            None => {
                ftrace!("ScrollView::refresh: container has no bounds yet");
            }
        }
        self.scope.registry().on_scroll(scroll_y, &self.layout, now_ms);
    }

    /// Advances smoothing, timelines and loops. Returns `true` while anything is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.smoother.advance(now_ms);
        let animating = self.scope.registry().tick(now_ms);
        animating || !self.smoother.is_settled()
    }

    pub fn raw_progress(&self) -> f32 {
        self.raw_progress
    }

    /// Smoothed container progress.
    pub fn progress(&self) -> f32 {
        self.smoother.value()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll.direction
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            scroll: self.scroll,
            raw_progress: self.raw_progress,
            smoothed_progress: self.smoother.value(),
        }
    }

    /// Current style of every animated element. Bindings come first, observers overlay them.
    pub fn styles(&self) -> Vec<(K, Style)> {
        let mut out: Vec<(K, Style)> = Vec::new();
        let mut push = |key: &K, style: &Style| match out.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => existing.merge(style),
            None => out.push((key.clone(), *style)),
        };

        let progress = self.smoother.value();
        for binding in &self.bindings {
            let mut style = Style::EMPTY;
            binding.mapping.apply(progress, &mut style);
            push(&binding.element, &style);
        }
        self.scope
            .registry()
            .for_each_style(|key, style| push(key, &style));
        out
    }

    pub fn for_each_style(&self, mut f: impl FnMut(&K, &Style)) {
        for (key, style) in self.styles() {
            f(&key, &style);
        }
    }

    pub fn style_of(&self, key: &K) -> Style {
        self.styles()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, style)| style)
            .unwrap_or_default()
    }

    /// A handle to the view's observer table; it stays queryable after the view is gone.
    pub fn registry(&self) -> Registry<K> {
        self.scope.registry().clone()
    }

    pub fn active_observers(&self) -> usize {
        self.scope.registry().active_count()
    }

    /// Disposes every observer but keeps the view (bindings still map progress).
    pub fn revert(&mut self) {
        self.scope.revert();
    }

    /// Tears the view down. Equivalent to dropping it.
    pub fn unmount(mut self) {
        fdebug!("ScrollView::unmount");
        self.revert();
    }
}
