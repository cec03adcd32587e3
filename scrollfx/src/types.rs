#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    /// Direction implied by moving from `prev` to `next`, or `None` when the offset did not change.
    pub fn between(prev: f32, next: f32) -> Option<Self> {
        if next > prev {
            Some(Self::Forward)
        } else if next < prev {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// Geometry of an element along the scroll axis, in document space.
///
/// Visual transforms produced by this crate never feed back into layout: bounds are the
/// untransformed box the host measured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementBounds {
    pub top: f32,
    pub height: f32,
}

impl ElementBounds {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A visual property driven by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
    /// Vertical translation in pixels.
    Y,
    /// Vertical translation as a percentage of the element's own height.
    YPercent,
    Opacity,
    Scale,
    /// Rotation around the horizontal axis, in degrees.
    RotateX,
    /// Rotation around the vertical axis, in degrees.
    RotateY,
}

impl Property {
    pub const COUNT: usize = 6;

    pub const ALL: [Property; Self::COUNT] = [
        Self::Y,
        Self::YPercent,
        Self::Opacity,
        Self::Scale,
        Self::RotateX,
        Self::RotateY,
    ];

    /// The value that leaves an element visually untouched.
    pub fn identity(self) -> f32 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::Y | Self::YPercent | Self::RotateX | Self::RotateY => 0.0,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// A sparse set of property values for one element.
///
/// Unset properties are left to the host (or resolve to [`Property::identity`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    values: [Option<f32>; Property::COUNT],
}

impl Style {
    pub const EMPTY: Style = Style {
        values: [None; Property::COUNT],
    };

    pub fn get(&self, property: Property) -> Option<f32> {
        self.values[property.slot()]
    }

    /// Returns the property value, falling back to its identity value.
    pub fn resolved(&self, property: Property) -> f32 {
        self.get(property).unwrap_or_else(|| property.identity())
    }

    pub fn set(&mut self, property: Property, value: f32) {
        self.values[property.slot()] = Some(value);
    }

    pub fn with(mut self, property: Property, value: f32) -> Self {
        self.set(property, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Overlays `other` on top of `self`; properties set in `other` win.
    pub fn merge(&mut self, other: &Style) {
        for (slot, value) in self.values.iter_mut().zip(other.values.iter()) {
            if value.is_some() {
                *slot = *value;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        Property::ALL
            .iter()
            .filter_map(|&p| self.get(p).map(|v| (p, v)))
    }
}
