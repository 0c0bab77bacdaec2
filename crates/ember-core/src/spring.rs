//! Spring follower that smooths raw pointer samples into cursor motion.

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::math::sanitize_step;
use glam::Vec2;

/// Second-order spring constants, shared by both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.stiffness > 0.0 && self.damping >= 0.0 && self.mass > 0.0) {
            return Err(EngineError::InvalidConfig(
                "spring needs positive stiffness and mass, non-negative damping",
            ));
        }
        Ok(())
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Position, velocity and target for x and y.
#[derive(Clone, Debug)]
pub struct SpringFollower {
    params: SpringParams,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    initialized: bool,
}

impl SpringFollower {
    /// Follower that jumps onto the first target it receives.
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            initialized: false,
        }
    }

    /// Follower resting at `position`; later targets are approached smoothly.
    pub fn at(params: SpringParams, position: Vec2) -> Self {
        Self {
            params,
            position,
            velocity: Vec2::ZERO,
            target: position,
            initialized: true,
        }
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Last write wins; nothing is queued between advances.
    pub fn set_target(&mut self, target: Vec2) {
        if !target.is_finite() {
            log::warn!("[spring] ignoring non-finite target");
            return;
        }
        self.target = target;
        if !self.initialized {
            self.position = target;
            self.velocity = Vec2::ZERO;
            self.initialized = true;
        }
    }

    /// Integrate `dt_sec` seconds in sub-steps of at most
    /// [`SPRING_MAX_SUBSTEP_SEC`].
    pub fn advance(&mut self, dt_sec: f32) -> Vec2 {
        if !self.initialized {
            return self.position;
        }
        let mut remaining = sanitize_step(dt_sec, MIN_STEP_SEC, MAX_STEP_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_SUBSTEP_SEC);
            self.substep(h);
            remaining -= h;
        }
        self.position
    }

    fn substep(&mut self, h: f32) {
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        let force = (self.target - self.position) * stiffness - self.velocity * damping;
        self.velocity += force / mass * h;
        self.position += self.velocity * h;
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.position.distance(self.target) <= epsilon && self.velocity.length() <= epsilon
    }
}

impl Default for SpringFollower {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}
