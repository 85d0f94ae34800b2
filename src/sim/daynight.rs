//! Day/night cycle
//!
//! A single phase value sweeps from 0 toward 0.5 (day darkening into
//! night), then on toward 0.6 (night brightening into dawn) before
//! wrapping back to 0. Each direction change rolls a fresh sweep speed, so
//! no two nights are the same length.

use rand::Rng;

use crate::consts::{
    CYCLE_SPEED_INITIAL, CYCLE_SPEED_MAX, CYCLE_SPEED_MIN, DAWN_END, NIGHT_START, NIGHT_WARNING,
};

#[derive(Debug, Clone)]
pub struct DayCycle {
    /// Cycle phase in [0, DAWN_END)
    pub phase: f32,
    /// True while sweeping toward night
    pub darkening: bool,
    day_speed: f32,
    night_speed: f32,
}

impl Default for DayCycle {
    fn default() -> Self {
        Self {
            phase: 0.0,
            darkening: true,
            day_speed: CYCLE_SPEED_INITIAL,
            night_speed: CYCLE_SPEED_INITIAL,
        }
    }
}

impl DayCycle {
    /// Advance the cycle one tick, rolling a new sweep speed at each flip.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        if self.darkening {
            self.phase += self.day_speed;
            if self.phase >= NIGHT_START {
                self.darkening = false;
                self.phase = NIGHT_START;
                self.night_speed = rng.random_range(CYCLE_SPEED_MIN..CYCLE_SPEED_MAX);
            }
        } else {
            self.phase += self.night_speed;
            if self.phase >= DAWN_END {
                self.darkening = true;
                self.phase = 0.0;
                self.day_speed = rng.random_range(CYCLE_SPEED_MIN..CYCLE_SPEED_MAX);
            }
        }
    }

    /// Day half of the cycle; the background stays bright.
    pub fn is_day(&self) -> bool {
        self.phase < NIGHT_START
    }

    /// True in the last stretch of daylight before night falls.
    pub fn night_warning(&self) -> bool {
        self.darkening && self.phase >= NIGHT_WARNING && self.phase < NIGHT_START
    }

    #[cfg(test)]
    pub(crate) fn set_phase_for_test(&mut self, phase: f32) {
        self.phase = phase;
    }
}
