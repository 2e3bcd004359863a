//! Camera and viewport types shared with the frontends.
//!
//! These avoid platform APIs so both the browser and the desktop preview can
//! build view/projection matrices from the same description.

use crate::constants::{
    CAMERA_FOVY_DEGREES, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR, MAX_PIXEL_RATIO,
};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Move the eye by the parallax offset and keep looking at the origin.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.eye = Vec3::new(offset.x, offset.y, CAMERA_Z);
        self.target = Vec3::ZERO;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Host viewport in CSS (logical) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    /// Window size in physical pixels at the full device ratio, never zero.
    /// Hosts that own their swapchain size (the desktop preview) use this
    /// instead of the clamped backing size.
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        let w = (self.width.max(0.0) * ratio).round() as u32;
        let h = (self.height.max(0.0) * ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Render-target size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        let w = (self.width.max(0.0) * ratio) as u32;
        let h = (self.height.max(0.0) * ratio) as u32;
        (w.max(1), h.max(1))
    }
}
