//! Faint network overlay connecting nearby particles.
//!
//! Pairs are scanned in lexicographic index order and the scan stops as soon
//! as the edge cap is reached, so low-index particles are connected more
//! often than high-index ones. Output must stay identical for a given field;
//! any spatial index added later has to reproduce the same order.

use crate::field::ParticleField;
use glam::Vec3;

/// `alpha` falls linearly from 1 at zero distance to 0 at the threshold.
/// Only coincident particles reach exactly 1; the threshold itself is never
/// emitted, so `alpha` is always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProximityGraph {
    edges: Vec<Edge>,
}

impl ProximityGraph {
    pub fn build(field: &ParticleField, connect_distance: f32, max_edges: usize) -> Self {
        let mut edges = Vec::with_capacity(max_edges.min(field.len()));
        let particles = field.particles();
        'scan: for i in 0..particles.len() {
            if edges.len() >= max_edges {
                break;
            }
            for j in (i + 1)..particles.len() {
                let d = particles[i].position.distance(particles[j].position);
                if d < connect_distance {
                    edges.push(Edge {
                        a: i,
                        b: j,
                        alpha: 1.0 - d / connect_distance,
                    });
                    if edges.len() >= max_edges {
                        break 'scan;
                    }
                }
            }
        }
        log::debug!(
            "[graph] {} edges (cap {}) at distance < {:.1}",
            edges.len(),
            max_edges,
            connect_distance
        );
        Self { edges }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Resolve edges to endpoint positions in the field's generation-time space.
    pub fn segments<'a>(
        &'a self,
        field: &'a ParticleField,
    ) -> impl Iterator<Item = (Vec3, Vec3, &'a Edge)> + 'a {
        self.edges.iter().filter_map(move |e| {
            let a = field.get(e.a)?;
            let b = field.get(e.b)?;
            Some((a.position, b.position, e))
        })
    }
}
