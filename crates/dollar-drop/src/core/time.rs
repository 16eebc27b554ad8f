/// Animation clock fed by the host's frame callback.
///
/// Behaves like an auto-starting stopwatch: the first `advance` after
/// creation or `restart` only starts it and reports a zero delta, so a
/// restarted animation never sees the gap since the previous frame.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    running: bool,
    elapsed: f32,
    delta: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's wall delta. Returns the delta the animation should use.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let frame_dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt
        } else {
            0.0
        };

        self.delta = if self.running { frame_dt } else { 0.0 };
        self.running = true;
        self.elapsed += self.delta;
        self.delta
    }

    /// Stop the clock and zero it. The next `advance` starts it again.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Seconds since the previous frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds since the clock was last started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
