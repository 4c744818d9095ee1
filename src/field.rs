//! The whole simulation: a fixed pool of stars plus the pattern playlist.
//! The render glue steps it once per frame and retargets it per trigger.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::assign;
use crate::particle::Particle;
use crate::sampler::{self, PatternSpec, TextRaster};
use crate::sequencer::PatternSequencer;

/// Number of stars simulated for the life of the page.
pub const POOL_SIZE: usize = 1500;

pub struct StarField {
    particles: Vec<Particle>,
    sequencer: PatternSequencer,
    rng: SmallRng,
}

impl StarField {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(
            PatternSequencer::playlist(),
            SmallRng::from_entropy(),
            POOL_SIZE,
            width,
            height,
        )
    }

    /// Seedable constructor; tests use it for reproducible runs.
    pub fn with_rng(
        sequencer: PatternSequencer,
        mut rng: SmallRng,
        pool_size: usize,
        width: f64,
        height: f64,
    ) -> Self {
        let particles = (0..pool_size)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            particles,
            sequencer,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn sequencer(&self) -> &PatternSequencer {
        &self.sequencer
    }

    /// Advance every star one frame, in stable pool order.
    pub fn step(&mut self, width: f64, height: f64) {
        for star in &mut self.particles {
            star.update(width, height);
        }
    }

    /// Handle one morph trigger: advance the playlist and retarget the
    /// pool against the viewport as it is *now* (resizes between triggers
    /// are picked up here, not cached).
    pub fn advance_pattern(&mut self, raster: &impl TextRaster, width: f64, height: f64) {
        match self.sequencer.advance() {
            PatternSpec::Drift => assign::release(&mut self.particles, &mut self.rng),
            PatternSpec::Heart => {
                let mut points = sampler::heart_points(&mut self.rng, width, height);
                assign::assign_targets(&mut self.particles, &mut points, width, height, &mut self.rng);
            }
            PatternSpec::Text(text) => {
                let mut points = sampler::text_points(raster, text, width, height);
                assign::assign_targets(&mut self.particles, &mut points, width, height, &mut self.rng);
            }
        }
    }
}
