use web_time::Instant;

/// Frame-to-frame delta time with a smoothed FPS readout.
///
/// Either pull time from the platform clock with [`advance`](Self::advance)
/// or feed host timestamps (e.g. the frame-callback time) with
/// [`advance_to`](Self::advance_to). Deltas are capped at `max_dt` so a
/// backgrounded tab does not come back with one giant step of inertia.
pub struct FrameClock {
    /// Largest delta ever reported, in seconds.
    max_dt: f32,
    /// Last platform-clock sample.
    last_instant: Option<Instant>,
    /// Last host timestamp in milliseconds.
    last_timestamp_ms: Option<f64>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock whose deltas never exceed `max_dt` seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            last_instant: None,
            last_timestamp_ms: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Seconds since the previous call, from the platform clock. The first
    /// call returns zero.
    pub fn advance(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_instant
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_instant = Some(now);
        self.record(dt)
    }

    /// Seconds since the previous host timestamp. The first call, and any
    /// timestamp that goes backwards, returns zero.
    pub fn advance_to(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = self
            .last_timestamp_ms
            .map_or(0.0, |last| ((timestamp_ms - last) / 1000.0) as f32);
        self.last_timestamp_ms = Some(timestamp_ms);
        self.record(dt)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    fn record(&mut self, dt: f32) -> f32 {
        let dt = dt.clamp(0.0, self.max_dt);
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.1)
    }
}
