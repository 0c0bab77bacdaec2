//! Explosion burst: a fixed batch of ballistic particles plus one expanding
//! shockwave ring, advanced with explicit Euler steps.
//!
//! The simulator is frame-stepped. Every per-frame constant in
//! [`BurstConfig`] is tuned for a 60 Hz refresh and `advance` takes elapsed
//! time measured in those nominal frames.

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::math::{polar, ring_angle, sanitize_step};
use crate::palette::Realm;
use crate::random::Randomness;
use glam::Vec2;

/// Tuning for one burst.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub particle_count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub life: f32,
    pub decay: f32,
    pub gravity: f32,
    pub shrink: f32,
    pub shockwave_growth: f32,
    pub shockwave_cap_fraction: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: BURST_PARTICLE_COUNT,
            speed_min: BURST_SPEED_MIN,
            speed_max: BURST_SPEED_MAX,
            radius_min: BURST_RADIUS_MIN,
            radius_max: BURST_RADIUS_MAX,
            life: BURST_LIFE,
            decay: BURST_DECAY,
            gravity: BURST_GRAVITY,
            shrink: BURST_SHRINK,
            shockwave_growth: SHOCKWAVE_GROWTH,
            shockwave_cap_fraction: SHOCKWAVE_CAP_FRACTION,
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.particle_count == 0 {
            return Err(EngineError::InvalidConfig("particle_count must be positive"));
        }
        if !(self.speed_min <= self.speed_max) {
            return Err(EngineError::InvalidConfig("speed range is inverted"));
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max) {
            return Err(EngineError::InvalidConfig("radius range must be positive and ordered"));
        }
        if !(self.life > 0.0) {
            return Err(EngineError::InvalidConfig("life must be positive"));
        }
        if !(self.decay > 0.0) {
            return Err(EngineError::InvalidConfig("decay must be positive"));
        }
        if !(self.shrink > 0.0 && self.shrink <= 1.0) {
            return Err(EngineError::InvalidConfig("shrink must lie in (0, 1]"));
        }
        if !(self.shockwave_growth > 0.0 && self.shockwave_cap_fraction > 0.0) {
            return Err(EngineError::InvalidConfig("shockwave growth and cap must be positive"));
        }
        Ok(())
    }
}

/// One ballistic explosion particle.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: &'static str,
    pub life: f32,
    pub life_at_spawn: f32,
}

impl BurstParticle {
    /// Remaining life as a fraction of the spawn life.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.life / self.life_at_spawn).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    fn step(&mut self, frames: f32, cfg: &BurstConfig) {
        self.position += self.velocity * frames;
        self.velocity.y += cfg.gravity * frames;
        self.life -= cfg.decay * frames;
        self.radius *= cfg.shrink.powf(frames);
    }
}

/// The single expanding ring of a burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shockwave {
    pub center: Vec2,
    pub radius: f32,
    pub cap: f32,
}

impl Shockwave {
    fn new(center: Vec2, viewport: Vec2, cap_fraction: f32) -> Self {
        Self {
            center,
            radius: 0.0,
            cap: viewport.x.max(viewport.y).max(0.0) * cap_fraction,
        }
    }

    fn grow(&mut self, amount: f32) {
        if self.radius < self.cap {
            self.radius = (self.radius + amount).min(self.cap);
        }
    }

    /// Still expanding and worth drawing.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.radius < self.cap
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.cap <= 0.0 {
            return 0.0;
        }
        (1.0 - self.radius / self.cap).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BurstPhase {
    #[default]
    Idle,
    Active,
}

/// Render attributes of one live particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub color: &'static str,
}

/// Render attributes of the shockwave ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShockwaveView {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub visible: bool,
}

/// Snapshot returned by [`BurstSimulator::advance`].
#[derive(Clone, Copy, Debug)]
pub struct BurstFrame<'a> {
    pub phase: BurstPhase,
    particles: &'a [BurstParticle],
    shockwave: Option<&'a Shockwave>,
}

impl<'a> BurstFrame<'a> {
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Live particles; order is not stable across frames.
    pub fn particles(&self) -> impl Iterator<Item = ParticleView> + 'a {
        let particles: &'a [BurstParticle] = self.particles;
        particles.iter().map(|p| ParticleView {
            position: p.position,
            radius: p.radius,
            alpha: p.alpha(),
            color: p.color,
        })
    }

    pub fn shockwave(&self) -> Option<ShockwaveView> {
        self.shockwave.map(|s| ShockwaveView {
            center: s.center,
            radius: s.radius,
            alpha: s.alpha(),
            visible: s.is_active(),
        })
    }
}

/// Owns every particle of the current burst. One burst in flight at a time.
#[derive(Clone, Debug)]
pub struct BurstSimulator {
    config: BurstConfig,
    phase: BurstPhase,
    particles: Vec<BurstParticle>,
    shockwave: Option<Shockwave>,
}

impl BurstSimulator {
    pub fn new(config: BurstConfig) -> EngineResult<Self> {
        config.validate()?;
        let particles = Vec::with_capacity(config.particle_count);
        Ok(Self {
            config,
            phase: BurstPhase::Idle,
            particles,
            shockwave: None,
        })
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    pub fn phase(&self) -> BurstPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == BurstPhase::Active
    }

    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }

    pub fn shockwave(&self) -> Option<&Shockwave> {
        self.shockwave.as_ref()
    }

    /// Spawn the full particle batch around `center` and restart the ring.
    ///
    /// Rejected with [`EngineError::BurstInFlight`] while a burst is active;
    /// the running burst is left untouched.
    pub fn ignite(
        &mut self,
        center: Vec2,
        viewport: Vec2,
        realm: Realm,
        rng: &mut impl Randomness,
    ) -> EngineResult<()> {
        if self.is_active() {
            log::warn!("[burst] ignite ignored: burst already in flight");
            return Err(EngineError::BurstInFlight);
        }
        let cfg = &self.config;
        let palette = realm.burst_palette();
        self.particles.clear();
        for i in 0..cfg.particle_count {
            let angle = ring_angle(i, cfg.particle_count);
            let speed = rng.range(cfg.speed_min, cfg.speed_max);
            let radius = rng.range(cfg.radius_min, cfg.radius_max);
            let color = palette[rng.index(palette.len())];
            self.particles.push(BurstParticle {
                position: center,
                velocity: polar(angle, speed),
                radius,
                color,
                life: cfg.life,
                life_at_spawn: cfg.life,
            });
        }
        self.shockwave = Some(Shockwave::new(center, viewport, cfg.shockwave_cap_fraction));
        self.phase = BurstPhase::Active;
        log::debug!(
            "[burst] ignite at ({:.0},{:.0}) particles={}",
            center.x,
            center.y,
            self.particles.len()
        );
        Ok(())
    }

    /// Advance by `frames` nominal frames and return the resulting snapshot.
    pub fn advance(&mut self, frames: f32) -> BurstFrame<'_> {
        if self.is_active() {
            let frames = sanitize_step(frames, MIN_STEP_FRAMES, MAX_STEP_FRAMES);
            let cfg = &self.config;
            for p in &mut self.particles {
                p.step(frames, cfg);
            }
            self.particles.retain(BurstParticle::is_alive);
            if let Some(s) = &mut self.shockwave {
                s.grow(cfg.shockwave_growth * frames);
            }
            if self.particles.is_empty() {
                self.phase = BurstPhase::Idle;
                self.shockwave = None;
                log::debug!("[burst] all particles expired");
            }
        }
        self.frame()
    }

    /// Snapshot without advancing.
    pub fn frame(&self) -> BurstFrame<'_> {
        BurstFrame {
            phase: self.phase,
            particles: &self.particles,
            shockwave: self.shockwave.as_ref(),
        }
    }

    /// Drop the running burst, if any, and return to idle.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.shockwave = None;
        self.phase = BurstPhase::Idle;
    }
}

impl Default for BurstSimulator {
    fn default() -> Self {
        Self {
            config: BurstConfig::default(),
            phase: BurstPhase::Idle,
            particles: Vec::with_capacity(BURST_PARTICLE_COUNT),
            shockwave: None,
        }
    }
}
