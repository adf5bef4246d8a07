// Host-side tests for trail physics and path drawing.

#![allow(dead_code)]
mod common;

use common::{Op, Recorder};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trail_canvas::core::{ConfigError, Environment, Trail};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn new_trail_rests_at_origin() {
    let origin = DVec2::new(42.0, -7.0);
    let trail = Trail::new(0.45, 0.5, 6, origin).unwrap();
    assert_eq!(trail.nodes().len(), 6);
    for node in trail.nodes() {
        assert_eq!(node.pos, origin);
        assert_eq!(node.vel, DVec2::ZERO);
    }
}

#[test]
fn trail_shorter_than_three_is_rejected() {
    let err = Trail::new(0.45, 0.5, 2, DVec2::ZERO).unwrap_err();
    assert_eq!(err, ConfigError::TrailTooShort { size: 2 });
}

#[test]
fn first_update_moves_only_the_head() {
    let env = Environment::default();
    let mut trail = Trail::new(0.45, 0.5, 3, DVec2::new(100.0, 100.0)).unwrap();
    trail.update(DVec2::new(200.0, 100.0), &env);

    let head = trail.head();
    assert!(approx(head.vel.x, 22.5), "vx = {}", head.vel.x);
    assert!(approx(head.vel.y, 0.0));
    assert!(approx(head.pos.x, 122.5), "x = {}", head.pos.x);

    for node in &trail.nodes()[1..] {
        assert_eq!(node.vel, DVec2::ZERO);
        assert_eq!(node.pos, DVec2::new(100.0, 100.0));
    }
}

#[test]
fn second_update_pulls_the_follower() {
    let env = Environment::default();
    let mut trail = Trail::new(0.45, 0.5, 3, DVec2::new(100.0, 100.0)).unwrap();
    let target = DVec2::new(200.0, 100.0);
    trail.update(target, &env);
    trail.update(target, &env);

    // (122.5 - 100) * 0.45 * 0.99 + 22.5 * 0.025, then friction
    let expected = (22.5 * 0.45 * 0.99 + 22.5 * 0.025) * 0.5;
    let follower = trail.nodes()[1];
    assert!(approx(follower.vel.x, expected), "vx = {}", follower.vel.x);
    assert!(follower.pos.x > 100.0);
    assert_eq!(trail.nodes()[2].vel, DVec2::ZERO);
}

#[test]
fn node_count_is_constant_across_updates() {
    let env = Environment::default();
    let mut trail = Trail::new(0.47, 0.49, env.size, DVec2::ZERO).unwrap();
    for i in 0..200 {
        let t = i as f64 * 0.1;
        trail.update(DVec2::new(t.cos() * 300.0, t.sin() * 300.0), &env);
        assert_eq!(trail.nodes().len(), env.size);
    }
}

#[test]
fn chain_converges_on_a_fixed_target() {
    let env = Environment {
        size: 10,
        ..Environment::default()
    };
    let target = DVec2::new(300.0, -200.0);
    let displacement = target.length();
    let mut trail = Trail::new(0.45, 0.5, env.size, DVec2::ZERO).unwrap();

    let mut head_distances = Vec::new();
    for _ in 0..1000 {
        trail.update(target, &env);
        head_distances.push(trail.head().pos.distance(target));
        for node in trail.nodes() {
            assert!(node.vel.is_finite());
            assert!(node.vel.length() < displacement, "velocity diverged");
        }
    }

    assert!(head_distances[9] < head_distances[0]);
    assert!(head_distances[199] < 1e-6);
    for node in trail.nodes() {
        assert!(node.pos.distance(target) < 1e-6);
        assert!(node.vel.length() < 1e-6);
    }
}

#[test]
fn off_canvas_targets_are_followed() {
    let env = Environment::default();
    let target = DVec2::new(-5000.0, 12000.0);
    let mut trail = Trail::new(0.45, 0.5, 5, DVec2::ZERO).unwrap();
    for _ in 0..500 {
        trail.update(target, &env);
    }
    assert!(trail.head().pos.distance(target) < 1e-3);
}

#[test]
fn jittered_trail_stays_near_base_constants() {
    let env = Environment::default();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let trail = Trail::jittered(0.45, &env, DVec2::new(5.0, 5.0), &mut rng).unwrap();
        assert!((trail.spring() - 0.45).abs() <= 0.05);
        assert!((trail.friction() - env.friction).abs() <= 0.005);
        assert_eq!(trail.nodes().len(), env.size);
    }
}

#[test]
fn drawing_three_nodes_connects_first_to_last() {
    let env = Environment::default();
    let mut trail = Trail::new(0.45, 0.5, 3, DVec2::new(100.0, 100.0)).unwrap();
    for _ in 0..3 {
        trail.update(DVec2::new(200.0, 150.0), &env);
    }
    let mut rec = Recorder::default();
    trail.draw(&mut rec);

    let n = trail.nodes();
    assert_eq!(
        rec.ops,
        vec![
            Op::BeginPath,
            Op::MoveTo(n[0].pos.x, n[0].pos.y),
            Op::Quad(n[1].pos.x, n[1].pos.y, n[2].pos.x, n[2].pos.y),
            Op::Stroke,
            Op::ClosePath,
        ]
    );
}

#[test]
fn interior_segments_end_at_midpoints() {
    let mut trail = Trail::new(0.45, 0.5, 5, DVec2::ZERO).unwrap();
    let env = Environment::default();
    for i in 0..4 {
        trail.update(DVec2::new(100.0 * i as f64, 50.0), &env);
    }
    let mut rec = Recorder::default();
    trail.draw(&mut rec);

    let n = trail.nodes();
    let quads: Vec<Op> = rec
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Quad(..)))
        .cloned()
        .collect();
    assert_eq!(quads.len(), 3);
    for (k, i) in (1..3).enumerate() {
        let mid = (n[i].pos + n[i + 1].pos) * 0.5;
        assert_eq!(quads[k], Op::Quad(n[i].pos.x, n[i].pos.y, mid.x, mid.y));
    }
    assert_eq!(quads[2], Op::Quad(n[3].pos.x, n[3].pos.y, n[4].pos.x, n[4].pos.y));
}
