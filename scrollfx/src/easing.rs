/// Easing curves applied to normalized time `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
    EaseInOutCubic,
    Power1Out,
    Power2Out,
    Power3Out,
    Power3In,
    Power3InOut,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Power3InOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u * u) / 2.0
                }
            }
            Self::Power1Out => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::Power3Out => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
            Self::Power3In => t * t * t * t,
        }
    }

    /// Looks up an easing by the names animation libraries use (`"power3.out"`, `"none"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "none" | "linear" => Self::Linear,
            "smoothstep" => Self::SmoothStep,
            "easeInOut" | "easeInOutCubic" => Self::EaseInOutCubic,
            "power1.out" | "power1" | "easeOut" => Self::Power1Out,
            "power2.out" | "power2" => Self::Power2Out,
            "power3.out" | "power3" => Self::Power3Out,
            "power3.in" => Self::Power3In,
            "power3.inOut" => Self::Power3InOut,
            _ => return None,
        })
    }
}
