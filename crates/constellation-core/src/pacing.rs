/// Milliseconds to wait between ticks for a frame rate.
#[inline]
pub fn frame_interval_ms(target_fps: f64) -> f64 {
    1000.0 / target_fps
}

/// Tracks when the next tick should be armed and measures the achieved rate.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval_ms: f64,
    last_tick_ms: Option<f64>,
    frames: u64,
    window_start_ms: f64,
    window_frames: u32,
    measured_fps: f64,
}

impl FramePacer {
    pub fn new(target_fps: f64) -> Self {
        Self {
            interval_ms: frame_interval_ms(target_fps),
            last_tick_ms: None,
            frames: 0,
            window_start_ms: 0.0,
            window_frames: 0,
            measured_fps: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per second over the last full one-second window.
    pub fn measured_fps(&self) -> f64 {
        self.measured_fps
    }

    /// Record a tick at `now_ms`.
    pub fn record(&mut self, now_ms: f64) {
        if self.last_tick_ms.is_none() {
            self.window_start_ms = now_ms;
        }
        self.last_tick_ms = Some(now_ms);
        self.frames += 1;
        self.window_frames += 1;
        let span = now_ms - self.window_start_ms;
        if span >= 1000.0 {
            self.measured_fps = self.window_frames as f64 * 1000.0 / span;
            self.window_start_ms = now_ms;
            self.window_frames = 0;
        }
    }
}
