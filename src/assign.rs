//! Distributes a sampled point cloud across the star pool, or releases the
//! pool back into drift. Only motion modes change here; the pool itself is
//! never grown or shrunk.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::particle::{Motion, Particle};
use crate::sampler::Point;

/// Give every star a convergence target. `points` is shuffled first so the
/// front of the pool does not always claim the same region of the shape.
/// Stars beyond the point count are scattered uniformly across the viewport
/// so they keep moving instead of idling at their last target.
pub fn assign_targets(
    pool: &mut [Particle],
    points: &mut [Point],
    width: f64,
    height: f64,
    rng: &mut impl Rng,
) {
    points.shuffle(rng);
    for (i, star) in pool.iter_mut().enumerate() {
        let (tx, ty) = match points.get(i) {
            Some(p) => (p.x, p.y),
            None => (
                width / 2.0 + (rng.gen::<f64>() - 0.5) * width,
                height / 2.0 + (rng.gen::<f64>() - 0.5) * height,
            ),
        };
        star.motion = Motion::Converging { tx, ty };
    }
}

/// Clear every target and reseed drift velocity, returning the field to
/// ambient motion. The reseed band is wider than the spawn band so the
/// release reads as a burst rather than a freeze.
pub fn release(pool: &mut [Particle], rng: &mut impl Rng) {
    for star in pool {
        star.motion = Motion::Drifting {
            vx: (rng.gen::<f64>() - 0.5) * 2.0,
            vy: (rng.gen::<f64>() - 0.5) * 2.0,
        };
    }
}
