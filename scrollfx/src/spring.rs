use crate::ConfigError;

const SUBSTEP_MS: u64 = 1;
/// Gaps longer than this (e.g. a backgrounded tab) snap to the target instead of integrating.
const MAX_CATCHUP_MS: u64 = 10_000;

/// Parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance to the target below which the spring may settle.
    pub rest_delta: f32,
    /// Speed below which the spring may settle.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    /// The smoothing used by scroll views: stiff enough to follow a flick, damped past critical
    /// so progress never rings around the target.
    pub const SCROLL: SpringConfig = SpringConfig {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };

    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::default()
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_rest_delta(mut self, rest_delta: f32) -> Self {
        self.rest_delta = rest_delta;
        self
    }

    pub fn with_rest_speed(mut self, rest_speed: f32) -> Self {
        self.rest_speed = rest_speed;
        self
    }

    /// `true` when `damping² >= 4 · stiffness · mass`, i.e. the spring approaches its target
    /// without oscillating.
    pub fn is_non_oscillating(&self) -> bool {
        self.damping * self.damping >= 4.0 * self.stiffness * self.mass
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("stiffness", self.stiffness, self.stiffness > 0.0),
            ("damping", self.damping, self.damping >= 0.0),
            ("mass", self.mass, self.mass > 0.0),
            ("rest_delta", self.rest_delta, self.rest_delta >= 0.0),
            ("rest_speed", self.rest_speed, self.rest_speed >= 0.0),
        ];
        for (name, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(ConfigError::InvalidSpring { name, value });
            }
        }
        Ok(())
    }
}

/// A damped spring chasing a target value.
///
/// The spring is advanced in fixed 1 ms steps, so its output depends only on the sequence of
/// targets and timestamps it is fed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    bounds: Option<(f32, f32)>,
    last_ms: Option<u64>,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            bounds: None,
            last_ms: None,
        }
    }

    /// Keeps both the value and the target inside `[min, max]`.
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "Spring::with_bounds: min > max");
        self.bounds = Some((min, max));
        self.value = self.clamp(self.value);
        self.target = self.clamp(self.target);
        self
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = self.clamp(target);
        }
    }

    /// Moves straight to `value` with no motion.
    pub fn jump(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        self.value = self.clamp(value);
        self.target = self.value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        abs(self.target - self.value) < self.config.rest_delta
            && abs(self.velocity) < self.config.rest_speed
    }

    /// Advances to `now_ms`. The first call only records the clock.
    ///
    /// Returns `true` while the spring is still moving.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        self.step_ms(elapsed)
    }

    /// Integrates `elapsed_ms` of motion. Returns `true` while the spring is still moving.
    pub fn step_ms(&mut self, elapsed_ms: u64) -> bool {
        if self.is_settled() {
            self.snap();
            return false;
        }
        if elapsed_ms > MAX_CATCHUP_MS {
            fdebug!(elapsed_ms, "Spring::step_ms: catch-up too long, snapping");
            self.snap();
            return false;
        }

        let dt = SUBSTEP_MS as f32 / 1000.0;
        let mut remaining = elapsed_ms;
        while remaining > 0 {
            remaining -= SUBSTEP_MS.min(remaining);
            self.integrate(dt);
            if self.is_settled() {
                self.snap();
                return false;
            }
        }
        true
    }

    fn integrate(&mut self, dt: f32) {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let force = -stiffness * (self.value - self.target) - damping * self.velocity;
        self.velocity += force / mass * dt;
        self.value += self.velocity * dt;

        if let Some((min, max)) = self.bounds {
            if self.value < min {
                self.value = min;
                self.velocity = self.velocity.max(0.0);
            } else if self.value > max {
                self.value = max;
                self.velocity = self.velocity.min(0.0);
            }
        }
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    fn clamp(&self, v: f32) -> f32 {
        match self.bounds {
            Some((min, max)) => v.clamp(min, max),
            None => v,
        }
    }
}

/// Low-pass filter for a raw scroll progress signal.
///
/// Output stays in `[0, 1]`. The first sample primes the filter without animating, so a view
/// mounted mid-page starts at its real position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSmoother {
    spring: Spring,
    primed: bool,
}

impl ProgressSmoother {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(config, 0.0).with_bounds(0.0, 1.0),
            primed: false,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        self.spring.config()
    }

    /// Feeds a raw progress sample.
    pub fn set_raw(&mut self, raw: f32) {
        if !raw.is_finite() {
            return;
        }
        if !self.primed {
            self.spring.jump(raw);
            self.primed = true;
            return;
        }
        self.spring.set_target(raw);
    }

    /// Advances to `now_ms` and returns the smoothed progress.
    pub fn advance(&mut self, now_ms: u64) -> f32 {
        self.spring.advance(now_ms);
        self.spring.value()
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
