//! A single star: creation-time visual attributes plus per-frame kinematics.

use rand::Rng;

/// Warm star palette; particles index into it with [`Particle::color`].
pub const STAR_COLORS: [&str; 5] = [
    "rgba(255, 223, 0, 0.9)",
    "rgba(255, 255, 100, 0.9)",
    "rgba(255, 250, 205, 0.9)",
    "rgba(255, 215, 0, 0.8)",
    "rgba(255, 255, 240, 0.9)",
];

/// Which of the two motion modes a star is in. Exactly one is active at a
/// time; switching modes is the assigner's job, never the update step's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Ambient wander, reflecting off the viewport edges.
    Drifting { vx: f64, vy: f64 },
    /// Exponential approach toward a fixed point.
    Converging { tx: f64, ty: f64 },
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Draw radius in px, fixed at creation.
    pub size: f64,
    /// Index into [`STAR_COLORS`], fixed at creation.
    pub color: usize,
    /// Convergence rate in (0, 1), fixed at creation so a star keeps its
    /// character across retargets.
    pub ease: f64,
    pub motion: Motion,
}

impl Particle {
    /// A fresh star scattered somewhere in the viewport with a slow drift.
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            size: rng.gen::<f64>() * 2.0 + 1.0,
            color: rng.gen_range(0..STAR_COLORS.len()),
            ease: 0.05 + rng.gen::<f64>() * 0.05,
            motion: Motion::Drifting {
                vx: (rng.gen::<f64>() - 0.5) * 0.5,
                vy: (rng.gen::<f64>() - 0.5) * 0.5,
            },
        }
    }

    /// Advance one frame within a `width` x `height` viewport.
    ///
    /// Converging stars close a fixed fraction of the remaining gap every
    /// frame and never "arrive"; drifting stars integrate velocity and
    /// reflect off the viewport edges.
    pub fn update(&mut self, width: f64, height: f64) {
        match &mut self.motion {
            Motion::Converging { tx, ty } => {
                self.x += (*tx - self.x) * self.ease;
                self.y += (*ty - self.y) * self.ease;
            }
            Motion::Drifting { vx, vy } => {
                self.x += *vx;
                self.y += *vy;
                if self.x < 0.0 {
                    self.x = -self.x;
                    *vx = -*vx;
                } else if self.x > width {
                    self.x = 2.0 * width - self.x;
                    *vx = -*vx;
                }
                if self.y < 0.0 {
                    self.y = -self.y;
                    *vy = -*vy;
                } else if self.y > height {
                    self.y = 2.0 * height - self.y;
                    *vy = -*vy;
                }
            }
        }
    }
}
