use web_time::{Duration, Instant};

/// Frames counted over one sampling window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Frames painted since the previous sample.
    pub frames: u32,
    /// Wall time since the previous sample.
    pub elapsed: Duration,
}

impl FrameSample {
    /// Average frames per second over the window (0 for an empty window).
    #[must_use]
    pub fn fps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.frames as f32 / secs
        } else {
            0.0
        }
    }
}

/// Rolling frame counter for diagnostic frame-rate accounting.
pub struct FrameClock {
    /// Timestamp of the previous sample
    last_time: Instant,
    /// Frames painted since the previous sample
    frame_count: u32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock whose first window starts now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock whose first window starts at `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_time: start,
            frame_count: 0,
            smoothed_fps: 0.0,
            smoothing: 0.2,
        }
    }

    /// Count one painted frame.
    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.saturating_add(1);
    }

    /// Frames counted in the current window.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Close the current window and start a new one.
    pub fn sample(&mut self) -> FrameSample {
        self.sample_at(Instant::now())
    }

    /// Close the current window at `now` and start a new one.
    pub fn sample_at(&mut self, now: Instant) -> FrameSample {
        let sample = FrameSample {
            frames: self.frame_count,
            elapsed: now.saturating_duration_since(self.last_time),
        };
        self.frame_count = 0;
        self.last_time = now;

        if sample.frames > 0 && !sample.elapsed.is_zero() {
            let fps = sample.fps();
            self.smoothed_fps = if self.smoothed_fps == 0.0 {
                fps
            } else {
                self.smoothed_fps * (1.0 - self.smoothing)
                    + fps * self.smoothing
            };
        }
        sample
    }

    /// Smoothed FPS across recent samples (0 until the first sample with
    /// frames).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_reports_frames_and_resets() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        for _ in 0..30 {
            clock.tick();
        }
        assert_eq!(clock.frame_count(), 30);

        let sample = clock.sample_at(start + Duration::from_millis(500));
        assert_eq!(sample.frames, 30);
        assert_eq!(sample.elapsed, Duration::from_millis(500));
        assert!((sample.fps() - 60.0).abs() < 1e-3);
        assert_eq!(clock.frame_count(), 0);
        assert!((clock.fps() - 60.0).abs() < 1e-3);
    }

    #[test]
    fn elapsed_is_measured_from_previous_sample() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let _ = clock.sample_at(start + Duration::from_millis(100));

        clock.tick();
        let sample = clock.sample_at(start + Duration::from_millis(350));
        assert_eq!(sample.elapsed, Duration::from_millis(250));
        assert_eq!(sample.frames, 1);
    }

    #[test]
    fn empty_window_has_zero_fps_and_keeps_smoothed_value() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        clock.tick();
        let _ = clock.sample_at(start + Duration::from_secs(1));
        assert!((clock.fps() - 1.0).abs() < 1e-6);

        let sample = clock.sample_at(start + Duration::from_secs(2));
        assert_eq!(sample.fps(), 0.0);
        assert!((clock.fps() - 1.0).abs() < 1e-6);

        let sample = clock.sample_at(start + Duration::from_secs(2));
        assert_eq!(sample.elapsed, Duration::ZERO);
        assert_eq!(sample.fps(), 0.0);
    }
}
