use std::time::{Duration, Instant};

/// One sample of the frame clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous sample, clamped.
    pub dt: f32,
    pub now: Instant,
    /// Zero for the first sample.
    pub frame_index: u64,
}

/// Monotonic clock handing out clamped frame deltas.
///
/// The first sample reports `dt_min`, since there is no previous frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clamps deltas to `[0.1 ms, 250 ms]`.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { last: None, frame_index: 0, dt_min, dt_max }
    }

    /// Forgets the previous sample; the next delta starts fresh.
    pub fn reset(&mut self) {
        self.last = None;
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Samples the clock at `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let raw = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => self.dt_min,
        };
        let dt = raw.clamp(self.dt_min, self.dt_max);
        self.last = Some(now);

        let time = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
