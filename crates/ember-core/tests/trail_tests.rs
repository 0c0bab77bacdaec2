// Host-side tests for the pointer trail engine.

use ember_core::*;
use glam::Vec2;

fn engine() -> PointerTrail<FixedRandom> {
    PointerTrail::new(TrailConfig::default(), FixedRandom(0.5)).expect("default config is valid")
}

fn ids(trail: &PointerTrail<FixedRandom>) -> Vec<u64> {
    trail.frame().particles().map(|p| p.id).collect()
}

#[test]
fn steady_moves_keep_only_the_newest_fifty() {
    let mut trail = engine();
    for i in 0..500 {
        assert!(trail.record_move(Vec2::new(i as f32, 10.0)));
        assert!(trail.len() <= 50);
    }
    assert_eq!(trail.len(), 50);
    assert_eq!(ids(&trail), (450..500).collect::<Vec<_>>());
}

#[test]
fn burst_then_moves_keeps_most_recent_fifty_in_order() {
    let mut trail = engine();
    trail.record_burst(Vec2::new(200.0, 200.0));
    assert_eq!(trail.len(), 15);
    for i in 0..40 {
        trail.record_move(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(trail.len(), 50);
    assert_eq!(ids(&trail), (5..55).collect::<Vec<_>>());

    let origins: Vec<TrailOrigin> = trail.frame().particles().map(|p| p.origin).collect();
    assert!(origins[..10].iter().all(|o| *o == TrailOrigin::Burst));
    assert!(origins[10..].iter().all(|o| *o == TrailOrigin::Move));
}

#[test]
fn bursts_are_capped_at_one_hundred() {
    let mut trail = engine();
    for _ in 0..10 {
        trail.record_burst(Vec2::ZERO);
        assert!(trail.len() <= 100);
    }
    assert_eq!(trail.len(), 100);
    assert_eq!(ids(&trail), (50..150).collect::<Vec<_>>());
}

#[test]
fn suppressed_moves_add_nothing_until_hover_ends() {
    let mut trail = engine();
    trail.record_move(Vec2::ZERO);
    trail.hover_enter();
    assert!(trail.is_suppressed());
    for _ in 0..20 {
        assert!(!trail.record_move(Vec2::new(5.0, 5.0)));
    }
    assert_eq!(trail.len(), 1);

    trail.hover_leave();
    assert!(!trail.is_suppressed());
    assert!(trail.record_move(Vec2::new(5.0, 5.0)));
    assert_eq!(trail.len(), 2);
}

#[test]
fn burst_ignores_suppression() {
    let mut trail = engine();
    trail.hover_enter();
    trail.record_burst(Vec2::ZERO);
    assert_eq!(trail.len(), 15);
}

#[test]
fn press_fires_one_burst_and_release_settles_on_advance() {
    let mut trail = engine();
    let at = Vec2::new(300.0, 120.0);
    trail.hover_enter();
    trail.press(at);
    assert_eq!(trail.interaction(), InteractionState::Pressing);
    assert_eq!(trail.len(), 15);
    for p in trail.frame().particles() {
        assert_eq!(p.origin, TrailOrigin::Burst);
        assert!(p.position.distance(at) <= 40.0 + 1e-3);
    }

    trail.press(at);
    assert_eq!(trail.len(), 15, "repeated press must not burst again");
    assert!(!trail.record_move(at), "pressing suppresses moves");

    trail.release();
    assert_eq!(trail.interaction(), InteractionState::Released);
    let frame = trail.advance(1.0 / 60.0);
    assert_eq!(frame.interaction, InteractionState::Hovering);

    trail.hover_leave();
    trail.press(at);
    trail.release();
    trail.advance(1.0 / 60.0);
    assert_eq!(trail.interaction(), InteractionState::Default);
    assert_eq!(trail.len(), 30);
}

#[test]
fn move_jitter_stays_within_bounds() {
    let mut trail =
        PointerTrail::new(TrailConfig::default(), SeededRandom::from_seed(9)).expect("valid");
    let at = Vec2::new(40.0, 60.0);
    for _ in 0..50 {
        trail.record_move(at);
    }
    for p in trail.frame().particles() {
        let d = p.position - at;
        assert!(d.x.abs() <= 5.0 && d.y.abs() <= 5.0, "jitter too large: {d:?}");
        assert!((0.45..=0.9).contains(&p.duration));
        assert!((0.35..=1.0).contains(&p.weight));
    }
}

#[test]
fn particles_are_stamped_with_engine_clock_and_fade_linearly() {
    let mut trail = engine();
    trail.advance(0.25);
    trail.advance(0.25);
    trail.record_move(Vec2::new(10.0, 10.0));
    let p = trail.frame().particles().next().cloned().expect("one particle");
    assert_eq!(p.born_at, 0.5);
    // FixedRandom(0.5) puts duration and weight at the middle of their ranges.
    assert!((p.duration - 0.675).abs() < 1e-6);
    assert!((p.weight - 0.675).abs() < 1e-6);
    assert_eq!(p.shape, TrailShape::Circle);
    assert_eq!(p.position, Vec2::new(10.0, 10.0));

    assert!((p.alpha_at(0.5) - 0.675).abs() < 1e-6);
    let half = p.alpha_at(0.5 + f64::from(p.duration) / 2.0);
    assert!((half - 0.3375).abs() < 1e-4);
    assert_eq!(p.alpha_at(2.0), 0.0);
    assert!(p.is_faded(2.0));
    assert!(!p.is_faded(0.6));
}

#[test]
fn faded_particles_stay_until_evicted_by_count() {
    let mut trail = engine();
    trail.record_move(Vec2::ZERO);
    for _ in 0..240 {
        trail.advance(1.0 / 60.0);
    }
    let frame = trail.frame();
    assert_eq!(frame.len(), 1);
    assert!(frame.particles().all(|p| p.is_faded(frame.now)));
}

#[test]
fn cursor_snaps_to_first_target_then_follows_smoothly() {
    let mut trail = engine();
    trail.set_target(Vec2::new(100.0, 100.0));
    assert_eq!(trail.frame().cursor, Vec2::new(100.0, 100.0));

    trail.set_target(Vec2::new(150.0, 100.0));
    trail.set_target(Vec2::new(200.0, 100.0));
    let frame = trail.advance(1.0 / 60.0);
    assert_eq!(frame.target, Vec2::new(200.0, 100.0));
    assert!(frame.cursor.x > 100.0 && frame.cursor.x < 200.0);
    assert!((frame.cursor.y - 100.0).abs() < 1e-4);
}

#[test]
fn bad_time_steps_do_not_corrupt_state() {
    let mut trail = engine();
    trail.set_target(Vec2::ZERO);
    trail.set_target(Vec2::new(50.0, 50.0));
    for dt in [f32::NAN, -1.0, 0.0, f32::INFINITY, 10.0] {
        let frame = trail.advance(dt);
        assert!(frame.cursor.is_finite());
        assert!(frame.now.is_finite());
    }
    assert!(trail.now() > 0.0 && trail.now() < 0.3);
}

#[test]
fn reset_drops_trail_but_keeps_counting_ids() {
    let mut trail = engine();
    trail.record_move(Vec2::ZERO);
    trail.record_move(Vec2::ZERO);
    trail.hover_enter();
    trail.reset();
    assert!(trail.is_empty());
    assert_eq!(trail.interaction(), InteractionState::Default);
    trail.record_move(Vec2::ZERO);
    assert_eq!(ids(&trail), vec![2]);
}

#[test]
fn config_validation() {
    let cfg = TrailConfig {
        steady_cap: 120,
        ..TrailConfig::default()
    };
    assert!(matches!(
        PointerTrail::new(cfg, FixedRandom(0.5)),
        Err(EngineError::InvalidConfig(_))
    ));
    let cfg = TrailConfig {
        burst_cap: 0,
        ..TrailConfig::default()
    };
    assert!(matches!(
        PointerTrail::new(cfg, FixedRandom(0.5)),
        Err(EngineError::ZeroCapacity)
    ));
}
