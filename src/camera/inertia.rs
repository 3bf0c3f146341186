use glam::Vec2;

/// Exponential velocity decay started when a drag is released.
///
/// `v(t) = exp(-(t - start) / tau) * initial`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaDecay {
    /// Velocity measured at the last drag sample (pixels/second).
    pub initial_velocity: Vec2,
    /// Time the decay curve starts from, in seconds.
    pub start_time: f64,
    /// Decay time constant in seconds.
    pub tau: f64,
}

impl InertiaDecay {
    /// Begin a decay from `initial_velocity` at `start_time`.
    #[must_use]
    pub fn new(initial_velocity: Vec2, start_time: f64, tau: f64) -> Self {
        Self {
            initial_velocity,
            start_time,
            tau,
        }
    }

    /// Velocity at time `now`. Times before the start return the initial
    /// velocity rather than growing past it.
    #[must_use]
    pub fn velocity_at(&self, now: f64) -> Vec2 {
        let elapsed = (now - self.start_time).max(0.0);
        let scale = (-elapsed / self.tau).exp();
        self.initial_velocity * scale as f32
    }
}
