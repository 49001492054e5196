//! Page scroll progress and the spring that smooths the progress bar.

/// Fraction of the scrollable height already scrolled, clamped to `[0, 1]`.
/// A page that cannot scroll reports `0`.
pub fn progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Damped spring with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(100.0, 30.0, 0.001)
    }
}

impl Spring {
    /// Largest integration step, in seconds.
    const MAX_STEP: f64 = 1.0 / 120.0;

    pub fn new(stiffness: f64, damping: f64, rest_delta: f64) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_resting(&self) -> bool {
        (self.target - self.value).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta
    }

    /// Integrates `dt` seconds. Snaps to the target once at rest and returns
    /// whether the spring is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.is_resting() {
            let h = remaining.min(Self::MAX_STEP);
            let force = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
            self.velocity += force * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_resting() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}
