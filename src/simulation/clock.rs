use crate::resources::{MIN_FRAME_RATE, SECONDS_PER_DAY};

/// Simulated time and the per-update timestep.
///
/// The timestep is derived from a days-per-real-second multiplier and the
/// frame rate, so simulated days per real second stay constant whatever the
/// rendering speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clock {
    /// Seconds simulated since the scenario epoch.
    time: f64,
    /// Seconds simulated per update.
    time_step: f32,
    /// Simulated seconds per real second.
    time_multiplier: f32,
}

impl Clock {
    pub fn new(days_per_second: f32, reference_fps: f32) -> Self {
        let time_multiplier = days_per_second * SECONDS_PER_DAY;
        Self {
            time: 0.0,
            time_step: time_multiplier / reference_fps,
            time_multiplier,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Recomputes the timestep for the measured frame rate.
    ///
    /// Rates at or below [`MIN_FRAME_RATE`] (startup, stalls) and non-finite
    /// rates leave the previous timestep in place. Returns whether it changed.
    pub fn sync_to_frame_rate(&mut self, fps: f32) -> bool {
        if !fps.is_finite() || fps <= MIN_FRAME_RATE {
            return false;
        }
        self.time_step = self.time_multiplier / fps;
        true
    }

    pub fn tick(&mut self) {
        self.time += f64::from(self.time_step);
    }
}
