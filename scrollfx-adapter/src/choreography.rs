use alloc::vec::Vec;

use scrollfx::{
    ConfigError, Keyframes, ProgressSource, Property, PropertyMapping, RangeMapping, ScrubRule,
    SpringConfig, TriggerRule, TweenSpec,
};

/// Errors raised when a [`Choreography`] cannot be mounted.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChoreographyError {
    #[error("trigger #{index} has no target elements")]
    EmptyTriggerTargets { index: usize },
    #[error("mount animation #{index} has no target elements")]
    EmptyMountTargets { index: usize },
    #[error("binding #{index} drives a property already bound on the same element")]
    DuplicateBinding { index: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A scroll-progress mapping applied to one element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binding<K> {
    pub element: K,
    pub mapping: PropertyMapping,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerSpec<K> {
    /// Element whose geometry defines the trigger boundaries.
    pub trigger: K,
    /// Elements animated by the rule, in stagger order.
    pub targets: Vec<K>,
    pub rule: TriggerRule,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrubSpec<K> {
    pub trigger: K,
    pub element: K,
    pub rule: ScrubRule,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopSpec<K> {
    pub element: K,
    pub keyframes: Keyframes,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountSpec<K> {
    pub targets: Vec<K>,
    pub animation: TweenSpec,
}

/// Declarative description of everything a scroll view animates.
///
/// With `feature = "serde"` a choreography can be loaded from configuration; call
/// [`Choreography::validate`] (done by `ScrollView::mount`) before trusting it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choreography<K> {
    /// Element whose scroll range feeds the progress source.
    pub container: K,
    pub progress: ProgressSource,
    pub smoothing: SpringConfig,
    pub bindings: Vec<Binding<K>>,
    pub triggers: Vec<TriggerSpec<K>>,
    pub scrubs: Vec<ScrubSpec<K>>,
    pub loops: Vec<LoopSpec<K>>,
    pub mounts: Vec<MountSpec<K>>,
}

impl<K: PartialEq> Choreography<K> {
    pub fn new(container: K) -> Self {
        Self {
            container,
            progress: ProgressSource::CONTAINER,
            smoothing: SpringConfig::SCROLL,
            bindings: Vec::new(),
            triggers: Vec::new(),
            scrubs: Vec::new(),
            loops: Vec::new(),
            mounts: Vec::new(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressSource) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_smoothing(mut self, smoothing: SpringConfig) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Drives `property` of `element` from the smoothed container progress.
    pub fn bind(mut self, element: K, property: Property, mapping: RangeMapping) -> Self {
        self.bindings.push(Binding {
            element,
            mapping: PropertyMapping::new(property, mapping),
        });
        self
    }

    pub fn trigger(
        mut self,
        trigger: K,
        targets: impl IntoIterator<Item = K>,
        rule: TriggerRule,
    ) -> Self {
        self.triggers.push(TriggerSpec {
            trigger,
            targets: targets.into_iter().collect(),
            rule,
        });
        self
    }

    pub fn scrub(mut self, trigger: K, element: K, rule: ScrubRule) -> Self {
        self.scrubs.push(ScrubSpec {
            trigger,
            element,
            rule,
        });
        self
    }

    pub fn looped(mut self, element: K, keyframes: Keyframes) -> Self {
        self.loops.push(LoopSpec { element, keyframes });
        self
    }

    pub fn on_mount(mut self, targets: impl IntoIterator<Item = K>, animation: TweenSpec) -> Self {
        self.mounts.push(MountSpec {
            targets: targets.into_iter().collect(),
            animation,
        });
        self
    }

    pub fn validate(&self) -> Result<(), ChoreographyError> {
        self.smoothing.validate()?;

        for (index, binding) in self.bindings.iter().enumerate() {
            binding.mapping.mapping.validate()?;
            let clash = self.bindings[..index].iter().any(|earlier| {
                earlier.element == binding.element
                    && earlier.mapping.property == binding.mapping.property
            });
            if clash {
                return Err(ChoreographyError::DuplicateBinding { index });
            }
        }
        for (index, spec) in self.triggers.iter().enumerate() {
            if spec.targets.is_empty() {
                return Err(ChoreographyError::EmptyTriggerTargets { index });
            }
            spec.rule.validate()?;
        }
        for spec in &self.scrubs {
            spec.rule.mapping.mapping.validate()?;
        }
        for spec in &self.loops {
            spec.keyframes.validate()?;
        }
        for (index, spec) in self.mounts.iter().enumerate() {
            if spec.targets.is_empty() {
                return Err(ChoreographyError::EmptyMountTargets { index });
            }
        }
        Ok(())
    }
}
