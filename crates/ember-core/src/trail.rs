//! Pointer trail: a spring-smoothed cursor plus a bounded buffer of
//! short-lived trail particles.
//!
//! Trail particles are never simulated after spawn. The host maps
//! `now - born_at` against each particle's fade duration to an opacity, and
//! particles leave the buffer only through count-based eviction.

use crate::buffer::BoundedBuffer;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::interaction::{Interaction, InteractionState};
use crate::math::{clamp01, polar, sanitize_step};
use crate::random::{Randomness, SeededRandom};
use crate::spring::{SpringFollower, SpringParams};
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    /// Entries kept after a pointer-move insertion.
    pub steady_cap: usize,
    /// Entries kept after a burst insertion; also the buffer's hard capacity.
    pub burst_cap: usize,
    pub burst_batch: usize,
    pub move_jitter: f32,
    pub burst_scatter: f32,
    pub fade_min_sec: f32,
    pub fade_max_sec: f32,
    pub weight_min: f32,
    pub weight_max: f32,
    pub square_chance: f32,
    pub spring: SpringParams,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            steady_cap: TRAIL_STEADY_CAP,
            burst_cap: TRAIL_BURST_CAP,
            burst_batch: TRAIL_BURST_BATCH,
            move_jitter: TRAIL_MOVE_JITTER,
            burst_scatter: TRAIL_BURST_SCATTER,
            fade_min_sec: TRAIL_FADE_MIN_SEC,
            fade_max_sec: TRAIL_FADE_MAX_SEC,
            weight_min: TRAIL_WEIGHT_MIN,
            weight_max: TRAIL_WEIGHT_MAX,
            square_chance: TRAIL_SQUARE_CHANCE,
            spring: SpringParams::default(),
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.steady_cap == 0 || self.burst_cap == 0 {
            return Err(EngineError::ZeroCapacity);
        }
        if self.steady_cap > self.burst_cap {
            return Err(EngineError::InvalidConfig("steady_cap exceeds burst_cap"));
        }
        if !(self.fade_min_sec > 0.0 && self.fade_min_sec <= self.fade_max_sec) {
            return Err(EngineError::InvalidConfig("fade range must be positive and ordered"));
        }
        if !(self.weight_min >= 0.0 && self.weight_min <= self.weight_max && self.weight_max <= 1.0)
        {
            return Err(EngineError::InvalidConfig("weight range must lie in [0, 1]"));
        }
        self.spring.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailShape {
    Circle,
    Square,
}

/// Why a trail particle exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailOrigin {
    Move,
    Burst,
}

/// Immutable once spawned.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub position: Vec2,
    pub born_at: f64,
    pub duration: f32,
    pub shape: TrailShape,
    pub weight: f32,
    pub origin: TrailOrigin,
}

impl TrailParticle {
    pub fn elapsed(&self, now: f64) -> f32 {
        (now - self.born_at).max(0.0) as f32
    }

    /// Linear fade from `weight` to zero over `duration`.
    pub fn alpha_at(&self, now: f64) -> f32 {
        self.weight * clamp01(1.0 - self.elapsed(now) / self.duration)
    }

    pub fn is_faded(&self, now: f64) -> bool {
        self.elapsed(now) >= self.duration
    }
}

/// Snapshot returned by [`PointerTrail::advance`].
#[derive(Clone, Copy, Debug)]
pub struct TrailFrame<'a> {
    pub cursor: Vec2,
    pub target: Vec2,
    pub interaction: InteractionState,
    pub now: f64,
    trail: &'a BoundedBuffer<TrailParticle>,
}

impl<'a> TrailFrame<'a> {
    /// Oldest first.
    pub fn particles(&self) -> impl ExactSizeIterator<Item = &'a TrailParticle> + 'a {
        let trail: &'a BoundedBuffer<TrailParticle> = self.trail;
        trail.iter()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}

pub struct PointerTrail<R: Randomness = SeededRandom> {
    config: TrailConfig,
    spring: SpringFollower,
    interaction: Interaction,
    trail: BoundedBuffer<TrailParticle>,
    rng: R,
    next_id: u64,
    now: f64,
}

impl<R: Randomness> PointerTrail<R> {
    pub fn new(config: TrailConfig, rng: R) -> EngineResult<Self> {
        config.validate()?;
        let trail = BoundedBuffer::with_capacity(config.burst_cap)?;
        let spring = SpringFollower::new(config.spring);
        Ok(Self {
            config,
            spring,
            interaction: Interaction::default(),
            trail,
            rng,
            next_id: 0,
            now: 0.0,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn spring(&self) -> &SpringFollower {
        &self.spring
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn is_suppressed(&self) -> bool {
        self.interaction.suppresses_trail()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Engine clock in seconds, advanced only by [`Self::advance`].
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn set_target(&mut self, point: Vec2) {
        self.spring.set_target(point);
    }

    /// Leave one jittered particle at `point` unless hovering or pressing.
    /// Returns whether a particle was added.
    pub fn record_move(&mut self, point: Vec2) -> bool {
        if self.interaction.suppresses_trail() || !point.is_finite() {
            return false;
        }
        let jitter = Vec2::new(
            self.rng.signed(self.config.move_jitter),
            self.rng.signed(self.config.move_jitter),
        );
        let particle = self.spawn(point + jitter, TrailOrigin::Move);
        self.trail.push(particle);
        self.trail.truncate_oldest(self.config.steady_cap);
        true
    }

    /// Scatter a full batch around `center`, ignoring suppression.
    pub fn record_burst(&mut self, center: Vec2) {
        if !center.is_finite() {
            return;
        }
        for _ in 0..self.config.burst_batch {
            let angle = self.rng.range(0.0, TAU);
            let dist = self.rng.range(0.0, self.config.burst_scatter);
            let particle = self.spawn(center + polar(angle, dist), TrailOrigin::Burst);
            self.trail.push(particle);
        }
        self.trail.truncate_oldest(self.config.burst_cap);
    }

    pub fn hover_enter(&mut self) {
        self.interaction.hover_enter();
    }

    pub fn hover_leave(&mut self) {
        self.interaction.hover_leave();
    }

    /// Enter `Pressing`; the entry fires one burst at `point`.
    pub fn press(&mut self, point: Vec2) {
        if self.interaction.press() {
            self.record_burst(point);
        }
    }

    pub fn release(&mut self) {
        self.interaction.release();
    }

    pub fn advance(&mut self, dt_sec: f32) -> TrailFrame<'_> {
        let dt = sanitize_step(dt_sec, MIN_STEP_SEC, MAX_STEP_SEC);
        self.now += f64::from(dt);
        self.spring.advance(dt);
        self.interaction.settle();
        self.frame()
    }

    /// Snapshot without advancing.
    pub fn frame(&self) -> TrailFrame<'_> {
        TrailFrame {
            cursor: self.spring.position(),
            target: self.spring.target(),
            interaction: self.interaction.state(),
            now: self.now,
            trail: &self.trail,
        }
    }

    /// Drop every trail particle and any pending interaction state.
    pub fn reset(&mut self) {
        self.trail.clear();
        self.interaction.reset();
    }

    fn spawn(&mut self, position: Vec2, origin: TrailOrigin) -> TrailParticle {
        let id = self.next_id;
        self.next_id += 1;
        let duration = self
            .rng
            .range(self.config.fade_min_sec, self.config.fade_max_sec);
        let shape = if self.rng.chance(self.config.square_chance) {
            TrailShape::Square
        } else {
            TrailShape::Circle
        };
        let weight = self.rng.range(self.config.weight_min, self.config.weight_max);
        TrailParticle {
            id,
            position,
            born_at: self.now,
            duration,
            shape,
            weight,
            origin,
        }
    }
}

impl PointerTrail<SeededRandom> {
    /// Default tuning with entropy-seeded randomness.
    pub fn with_entropy() -> EngineResult<Self> {
        Self::new(TrailConfig::default(), SeededRandom::from_entropy())
    }
}
