// Host-side tests for the burst simulator.

use ember_core::*;
use glam::Vec2;
use std::f32::consts::TAU;

const CENTER: Vec2 = Vec2::new(500.0, 500.0);
const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);

fn ignited(rng: &mut impl Randomness) -> BurstSimulator {
    let mut sim = BurstSimulator::new(BurstConfig::default()).expect("default config is valid");
    sim.ignite(CENTER, VIEWPORT, Realm::Light, rng)
        .expect("idle simulator accepts a burst");
    sim
}

#[test]
fn ignite_spawns_full_batch_evenly_around_center() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    assert_eq!(sim.phase(), BurstPhase::Active);
    let particles = sim.particles();
    assert_eq!(particles.len(), 100);

    let mut sum = Vec2::ZERO;
    for (i, p) in particles.iter().enumerate() {
        assert_eq!(p.position, CENTER);
        assert!((p.velocity.length() - 7.0).abs() < 1e-4);
        assert_eq!(p.radius, 4.0);
        assert_eq!(p.life, 200.0);
        assert_eq!(p.life_at_spawn, 200.0);
        assert_eq!(p.color, "#ffc94d");
        let expected = i as f32 / 100.0 * TAU;
        let angle = p.velocity.y.atan2(p.velocity.x).rem_euclid(TAU);
        let diff = (angle - expected).abs();
        assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "particle {i} angle {angle}");
        sum += p.velocity;
    }
    assert!(sum.length() < 1e-3, "velocities should cancel out, got {sum:?}");

    let ring = sim.shockwave().expect("shockwave exists while active");
    assert_eq!(ring.radius, 0.0);
    assert_eq!(ring.cap, 750.0);
}

#[test]
fn euler_step_moves_then_applies_gravity() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    sim.advance(1.0);
    let p = &sim.particles()[0];
    assert!((p.position - Vec2::new(507.0, 500.0)).length() < 1e-4);
    assert!((p.velocity.y - 0.15).abs() < 1e-6);
    assert_eq!(p.life, 198.0);
    assert!((p.radius - 4.0 * 0.985).abs() < 1e-6);

    sim.advance(1.0);
    let p = &sim.particles()[0];
    assert!((p.position - Vec2::new(514.0, 500.15)).length() < 1e-3);
}

#[test]
fn life_and_radius_never_increase() {
    let mut sim = ignited(&mut SeededRandom::from_seed(11));
    let mut prev: Vec<(f32, f32)> = sim.particles().iter().map(|p| (p.life, p.radius)).collect();
    let steps = [1.0, 0.5, 2.0, f32::NAN, -1.0, 0.0, 3.5, 1.0];
    for dt in steps.iter().cycle().take(40) {
        sim.advance(*dt);
        // Nothing has expired yet, so indices still line up.
        assert_eq!(sim.particles().len(), prev.len());
        for (p, (life, radius)) in sim.particles().iter().zip(&prev) {
            assert!(p.life <= *life);
            assert!(p.radius <= *radius);
            assert!(p.position.is_finite() && p.velocity.is_finite());
        }
        prev = sim.particles().iter().map(|p| (p.life, p.radius)).collect();
    }
}

#[test]
fn shockwave_grows_monotonically_up_to_cap() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    let mut last = 0.0;
    for _ in 0..60 {
        let frame = sim.advance(1.0);
        let ring = frame.shockwave().expect("particles keep the burst alive");
        assert!(ring.radius >= last);
        assert!(ring.radius <= 750.0);
        assert!((ring.alpha - (1.0 - ring.radius / 750.0).max(0.0)).abs() < 1e-6);
        last = ring.radius;
    }
    let ring = sim.frame().shockwave().unwrap();
    assert_eq!(ring.radius, 750.0);
    assert!(!ring.visible);
    assert_eq!(ring.alpha, 0.0);
    assert_eq!(sim.phase(), BurstPhase::Active);
}

#[test]
fn fixed_decay_expires_every_particle_by_frame_100() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    for _ in 0..50 {
        sim.advance(1.0);
    }
    assert_eq!(sim.frame().particle_count(), 100);
    for _ in 50..99 {
        sim.advance(1.0);
    }
    let frame = sim.frame();
    assert_eq!(frame.particle_count(), 100);
    assert!(frame.particles().all(|p| (p.alpha - 0.01).abs() < 1e-6));

    let frame = sim.advance(1.0);
    assert_eq!(frame.particle_count(), 0);
    assert_eq!(frame.phase, BurstPhase::Idle);
    assert!(frame.shockwave().is_none());
}

#[test]
fn random_burst_terminates_in_finite_frames() {
    let mut sim = ignited(&mut SeededRandom::from_seed(3));
    let mut frames = 0;
    while sim.is_active() {
        sim.advance(1.0);
        frames += 1;
        assert!(frames <= 1_000, "burst never terminated");
    }
    assert_eq!(frames, 100);
    assert!(sim.particles().is_empty());
}

#[test]
fn ignite_while_active_is_rejected_without_doubling() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    sim.advance(1.0);
    let err = sim
        .ignite(Vec2::ZERO, VIEWPORT, Realm::Shadow, &mut FixedRandom(0.1))
        .unwrap_err();
    assert_eq!(err, EngineError::BurstInFlight);
    assert_eq!(sim.particles().len(), 100);
    assert_eq!(sim.particles()[0].life, 198.0);
}

#[test]
fn clear_returns_to_idle_and_allows_next_burst() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    sim.advance(1.0);
    sim.clear();
    assert_eq!(sim.phase(), BurstPhase::Idle);
    assert!(sim.particles().is_empty());
    assert!(sim.shockwave().is_none());

    sim.ignite(CENTER, VIEWPORT, Realm::Shadow, &mut FixedRandom(0.0))
        .expect("cleared simulator accepts a new burst");
    assert_eq!(sim.particles().len(), 100);
    assert_eq!(sim.particles()[0].color, "#e9dcff");
}

#[test]
fn idle_advance_is_a_no_op() {
    let mut sim = BurstSimulator::default();
    let frame = sim.advance(1.0);
    assert_eq!(frame.phase, BurstPhase::Idle);
    assert_eq!(frame.particle_count(), 0);
    assert!(frame.shockwave().is_none());
}

#[test]
fn degenerate_steps_use_minimum_step() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    sim.advance(f32::NAN);
    sim.advance(-5.0);
    sim.advance(f32::INFINITY);
    for p in sim.particles() {
        assert!(p.position.is_finite());
        assert!(p.life < 200.0 && p.life > 199.9);
    }
}

#[test]
fn oversized_steps_are_capped() {
    let mut sim = ignited(&mut FixedRandom(0.5));
    sim.advance(1_000.0);
    assert_eq!(sim.particles()[0].life, 192.0);
}

#[test]
fn config_validation_rejects_bad_tuning() {
    let bad = [
        BurstConfig {
            particle_count: 0,
            ..BurstConfig::default()
        },
        BurstConfig {
            speed_min: 5.0,
            speed_max: 1.0,
            ..BurstConfig::default()
        },
        BurstConfig {
            decay: 0.0,
            ..BurstConfig::default()
        },
        BurstConfig {
            shrink: 1.5,
            ..BurstConfig::default()
        },
        BurstConfig {
            radius_min: f32::NAN,
            ..BurstConfig::default()
        },
    ];
    for cfg in bad {
        assert!(matches!(
            BurstSimulator::new(cfg),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
