use crate::camera::Viewport;
use crate::constants::{PARALLAX_RANGE_X, PARALLAX_RANGE_Y};
use glam::Vec2;

/// Map a pointer position to `[-1, 1]` on both axes, `(0, 0)` at the viewport center.
///
/// Returns `None` for a degenerate viewport. Positions outside the viewport are clamped.
#[inline]
pub fn normalize_pointer(x: f64, y: f64, width: f64, height: f64) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let nx = ((x / width - 0.5) * 2.0).clamp(-1.0, 1.0);
    let ny = ((y / height - 0.5) * 2.0).clamp(-1.0, 1.0);
    Some(Vec2::new(nx as f32, ny as f32))
}

/// Holds the latest normalized pointer position. Smoothing belongs to the scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxController {
    normalized: Vec2,
}

impl ParallaxController {
    pub fn pointer_moved(&mut self, x: f64, y: f64, viewport: &Viewport) {
        if let Some(n) = normalize_pointer(x, y, viewport.width, viewport.height) {
            self.normalized = n;
        }
    }

    #[inline]
    pub fn normalized(&self) -> Vec2 {
        self.normalized
    }

    /// Camera offset the scheduler eases toward. Vertical axis is inverted.
    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(
            self.normalized.x * PARALLAX_RANGE_X,
            -self.normalized.y * PARALLAX_RANGE_Y,
        )
    }
}
