//! Intro sequence timing.
//!
//! The burst simulator only does physics; deciding when the explosion starts
//! and when its stage is over belongs to this sequencer, which the host ticks
//! alongside the engines.

use crate::constants::*;
use crate::math::sanitize_step;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Dormant,
    Charging,
    Explosion,
    Settled,
}

/// Reported once per stage entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageChange {
    pub from: Stage,
    pub to: Stage,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroTimings {
    pub charging_sec: f32,
    pub explosion_sec: f32,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            charging_sec: INTRO_CHARGING_SEC,
            explosion_sec: INTRO_EXPLOSION_SEC,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct IntroSequence {
    timings: IntroTimings,
    stage: Stage,
    stage_elapsed: f32,
}

impl IntroSequence {
    pub fn new(timings: IntroTimings) -> Self {
        Self {
            timings,
            stage: Stage::Dormant,
            stage_elapsed: 0.0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Seconds spent in the current stage.
    pub fn stage_elapsed(&self) -> f32 {
        self.stage_elapsed
    }

    /// Progress through the current timed stage in `[0, 1]`; untimed stages
    /// report 0.
    pub fn progress(&self) -> f32 {
        match self.stage_duration() {
            Some(d) if d > 0.0 => (self.stage_elapsed / d).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    /// Begin (or restart) the sequence at `Charging`.
    pub fn start(&mut self) -> StageChange {
        let change = StageChange {
            from: self.stage,
            to: Stage::Charging,
        };
        self.stage = Stage::Charging;
        self.stage_elapsed = 0.0;
        change
    }

    /// Accumulate `dt_sec`. At most one stage change is reported per call;
    /// leftover time carries into the next stage.
    pub fn tick(&mut self, dt_sec: f32) -> Option<StageChange> {
        let duration = self.stage_duration()?;
        self.stage_elapsed += sanitize_step(dt_sec, 0.0, MAX_STEP_SEC);
        if self.stage_elapsed < duration {
            return None;
        }
        let from = self.stage;
        let to = match from {
            Stage::Charging => Stage::Explosion,
            Stage::Explosion => Stage::Settled,
            other => other,
        };
        self.stage_elapsed -= duration;
        if to == Stage::Settled {
            self.stage_elapsed = 0.0;
        }
        self.stage = to;
        log::debug!("[stage] {:?} -> {:?}", from, to);
        Some(StageChange { from, to })
    }

    fn stage_duration(&self) -> Option<f32> {
        match self.stage {
            Stage::Charging => Some(self.timings.charging_sec),
            Stage::Explosion => Some(self.timings.explosion_sec),
            Stage::Dormant | Stage::Settled => None,
        }
    }
}
