//! Procedural point cloud for the hero background.
//!
//! Directions are uniform over the sphere (`phi = acos(2u - 1)`), while the
//! radius is sampled linearly across the shell, which concentrates density
//! toward the outer surface. That look is intended and must not be replaced by
//! a volumetric fill.

use crate::constants::{Hue, FIELD_Z_PULL, SCALE_MIN, SCALE_SPAN};
use crate::error::FieldError;
use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub scale: f32,
}

/// Fixed-size, read-only sequence of particles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        palette: &[Hue],
        radius_min: f32,
        spread: f32,
    ) -> Result<Self, FieldError> {
        if palette.is_empty() {
            return Err(FieldError::EmptyPalette);
        }
        let particles = (0..count)
            .map(|_| {
                let theta = rng.gen::<f32>() * TAU;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
                let r = radius_min + rng.gen::<f32>() * spread;
                let position = Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos() - FIELD_Z_PULL,
                );
                // non-empty checked above
                let hue = palette.choose(rng).copied().unwrap_or(palette[0]);
                let scale = SCALE_MIN + rng.gen::<f32>() * SCALE_SPAN;
                Particle {
                    position,
                    color: hue.rgb,
                    scale,
                }
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] generated {} particles, radius [{:.0}, {:.0})",
            particles.len(),
            radius_min,
            radius_min + spread
        );
        Ok(Self { particles })
    }

    /// Wrap externally produced particles, e.g. a frozen scene in tests.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }
}
