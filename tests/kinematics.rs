#![cfg(not(target_arch = "wasm32"))]

use rand::rngs::SmallRng;
use rand::SeedableRng;

use stars_wasm::particle::{Motion, Particle};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn star_at(x: f64, y: f64, motion: Motion) -> Particle {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut star = Particle::spawn(&mut rng, W, H);
    star.x = x;
    star.y = y;
    star.motion = motion;
    star
}

#[test]
fn drift_integrates_velocity_inside_bounds() {
    let mut star = star_at(100.0, 100.0, Motion::Drifting { vx: 0.3, vy: -0.2 });
    star.update(W, H);
    assert!((star.x - 100.3).abs() < 1e-12);
    assert!((star.y - 99.8).abs() < 1e-12);
    assert_eq!(star.motion, Motion::Drifting { vx: 0.3, vy: -0.2 });
}

#[test]
fn drift_reflects_at_left_edge() {
    let mut star = star_at(0.0, 300.0, Motion::Drifting { vx: -0.4, vy: 0.0 });
    star.update(W, H);
    assert!(star.x >= 0.0);
    match star.motion {
        Motion::Drifting { vx, .. } => assert!(vx > 0.0),
        other => panic!("expected drifting, got {other:?}"),
    }
}

#[test]
fn drift_reflects_at_right_edge() {
    let mut star = star_at(W, 300.0, Motion::Drifting { vx: 0.4, vy: 0.0 });
    star.update(W, H);
    assert!(star.x <= W);
    match star.motion {
        Motion::Drifting { vx, .. } => assert!(vx < 0.0),
        other => panic!("expected drifting, got {other:?}"),
    }
}

#[test]
fn drift_reflects_at_top_edge() {
    let mut star = star_at(400.0, 0.0, Motion::Drifting { vx: 0.0, vy: -0.4 });
    star.update(W, H);
    assert!(star.y >= 0.0);
    match star.motion {
        Motion::Drifting { vy, .. } => assert!(vy > 0.0),
        other => panic!("expected drifting, got {other:?}"),
    }
}

#[test]
fn drift_reflects_at_bottom_edge() {
    let mut star = star_at(400.0, H, Motion::Drifting { vx: 0.0, vy: 0.4 });
    star.update(W, H);
    assert!(star.y <= H);
    match star.motion {
        Motion::Drifting { vy, .. } => assert!(vy < 0.0),
        other => panic!("expected drifting, got {other:?}"),
    }
}

#[test]
fn convergence_contracts_distance_monotonically() {
    for ease in [0.05, 0.07, 0.3, 0.9, 0.99] {
        let mut star = star_at(10.0, 10.0, Motion::Converging { tx: 400.0, ty: 300.0 });
        star.ease = ease;
        let mut dist = ((star.x - 400.0).powi(2) + (star.y - 300.0).powi(2)).sqrt();
        for _ in 0..10_000 {
            if dist < 1e-9 {
                break;
            }
            star.update(W, H);
            let next = ((star.x - 400.0).powi(2) + (star.y - 300.0).powi(2)).sqrt();
            assert!(next < dist, "ease {ease}: {next} did not contract from {dist}");
            dist = next;
        }
        assert!(dist < 1e-9, "ease {ease} never got close: {dist}");
    }
}

#[test]
fn convergence_never_switches_mode_on_its_own() {
    let mut star = star_at(0.0, 0.0, Motion::Converging { tx: 50.0, ty: 50.0 });
    for _ in 0..1_000 {
        star.update(W, H);
    }
    assert_eq!(star.motion, Motion::Converging { tx: 50.0, ty: 50.0 });
}
