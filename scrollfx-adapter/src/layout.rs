use scrollfx::ElementBounds;

use crate::ElementKey;
use crate::key::ElementMap;

/// Viewport size plus the measured geometry of every element a view cares about.
#[derive(Clone, Debug)]
pub struct Layout<K> {
    viewport_height: f32,
    bounds: ElementMap<K, ElementBounds>,
}

impl<K: ElementKey> Layout<K> {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            bounds: ElementMap::new(),
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
    }

    pub fn set(&mut self, key: K, bounds: ElementBounds) {
        self.bounds.insert(key, bounds);
    }

    pub fn with(mut self, key: K, bounds: ElementBounds) -> Self {
        self.set(key, bounds);
        self
    }

    pub fn get(&self, key: &K) -> Option<ElementBounds> {
        self.bounds.get(key).copied()
    }

    pub fn remove(&mut self, key: &K) -> Option<ElementBounds> {
        self.bounds.remove(key)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn clear(&mut self) {
        self.bounds.clear();
    }
}

impl<K: ElementKey> Default for Layout<K> {
    fn default() -> Self {
        Self::new(0.0)
    }
}
