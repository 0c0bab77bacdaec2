// Engine state owned by one mounted scene.

use crate::geometry;
use ember_core::{
    BurstConfig, BurstFrame, BurstSimulator, EngineResult, IntroSequence, IntroTimings,
    PointerTrail, Realm, SeededRandom, Stage, StageChange, TrailConfig, TrailFrame,
};
use glam::Vec2;

pub struct SceneState {
    pub burst: BurstSimulator,
    pub trail: PointerTrail,
    pub intro: IntroSequence,
    pub realm: Realm,
    pub viewport: Vec2,
    rng: SeededRandom,
}

impl SceneState {
    pub fn new(realm: Realm, viewport: Vec2) -> EngineResult<Self> {
        Ok(Self {
            burst: BurstSimulator::new(BurstConfig::default())?,
            trail: PointerTrail::new(TrailConfig::default(), SeededRandom::from_entropy())?,
            intro: IntroSequence::new(IntroTimings::default()),
            realm,
            viewport,
            rng: SeededRandom::from_entropy(),
        })
    }

    pub fn play_intro(&mut self) {
        if self.intro.stage() == Stage::Explosion {
            self.burst.clear();
        }
        let change = self.intro.start();
        log::info!("[stage] {:?} -> {:?}", change.from, change.to);
    }

    /// One frame: stage timers first, then each engine advanced exactly once.
    pub fn step(&mut self, dt_sec: f32) -> (BurstFrame<'_>, TrailFrame<'_>) {
        if let Some(change) = self.intro.tick(dt_sec) {
            self.on_stage_change(change);
        }
        let Self { burst, trail, .. } = self;
        let burst_frame = burst.advance(geometry::frames_from_secs(dt_sec));
        let trail_frame = trail.advance(dt_sec);
        (burst_frame, trail_frame)
    }

    fn on_stage_change(&mut self, change: StageChange) {
        log::info!("[stage] {:?} -> {:?}", change.from, change.to);
        if change.from == Stage::Explosion {
            self.burst.clear();
        }
        if change.to == Stage::Explosion {
            let center = geometry::viewport_center(self.viewport);
            if let Err(e) = self
                .burst
                .ignite(center, self.viewport, self.realm, &mut self.rng)
            {
                log::warn!("[stage] burst skipped: {}", e);
            }
        }
    }

    /// Drop everything the engines hold; called when the scene unmounts.
    pub fn release(&mut self) {
        self.burst.clear();
        self.trail.reset();
        self.intro = IntroSequence::new(IntroTimings::default());
    }
}
