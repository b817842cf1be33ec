//! Frame timing

use std::time::Instant;

/// Frame timer tracking delta time and frame statistics
#[derive(Debug)]
pub struct Timer {
    last_frame: Instant,
    start: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Timer {
    /// Create a new timer starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            start: now,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the timer by one frame
    ///
    /// Call once per iteration of the main loop.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Seconds elapsed between the two most recent updates
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total seconds elapsed since the timer was created
    pub fn total_time(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frames per second over the timer's whole lifetime
    pub fn average_fps(&self) -> f32 {
        let total = self.total_time();
        if total > 0.0 {
            self.frame_count as f32 / total
        } else {
            0.0
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
