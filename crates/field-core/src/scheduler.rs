//! Per-frame animation state and frame-request bookkeeping.
//!
//! The camera easing is a fixed fraction per frame, not scaled by frame time,
//! so the parallax settles faster on high refresh-rate displays. That is an
//! accepted approximation.

use crate::constants::{BOB_AMPLITUDE, BOB_FREQUENCY, PITCH_RATE, YAW_RATE};
use crate::platform::{FrameHandle, Platform};
use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Whole-field transform and camera offset for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTransform {
    pub elapsed: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub bob: f32,
    pub camera_offset: Vec2,
}

impl FrameTransform {
    /// Field rotation plus the z oscillation, applied to every particle and line.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.bob))
            * Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct RenderLoopScheduler {
    smoothing: f32,
    started_at: Option<f64>,
    pending: Option<FrameHandle>,
    camera_offset: Vec2,
    frames: u64,
}

impl RenderLoopScheduler {
    pub fn new(smoothing: f32) -> Self {
        Self {
            smoothing,
            started_at: None,
            pending: None,
            camera_offset: Vec2::ZERO,
            frames: 0,
        }
    }

    /// Request the first frame. The elapsed-time origin is kept across restarts.
    pub fn start<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        if self.started_at.is_none() {
            self.started_at = Some(platform.now_seconds());
        }
        self.schedule_next(platform);
    }

    pub fn stop<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        if let Some(handle) = self.pending.take() {
            platform.cancel_frame(handle);
        }
    }

    pub fn schedule_next<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        if self.pending.is_some() {
            return;
        }
        self.pending = platform.request_frame();
        if self.pending.is_none() {
            log::warn!("[scheduler] host refused a frame request; loop stops");
        }
    }

    /// Mark the pending callback as delivered and compute this frame's transform.
    pub fn tick(&mut self, now_seconds: f64, target: Vec2) -> FrameTransform {
        self.pending = None;
        let origin = *self.started_at.get_or_insert(now_seconds);
        let elapsed = (now_seconds - origin).max(0.0) as f32;
        self.advance(elapsed, target)
    }

    /// Pure step: rotation from elapsed time, camera eased toward `target`.
    pub fn advance(&mut self, elapsed: f32, target: Vec2) -> FrameTransform {
        self.camera_offset += (target - self.camera_offset) * self.smoothing;
        self.frames += 1;
        FrameTransform {
            elapsed,
            yaw: elapsed * YAW_RATE,
            pitch: elapsed * PITCH_RATE,
            bob: (elapsed * BOB_FREQUENCY).sin() * BOB_AMPLITUDE,
            camera_offset: self.camera_offset,
        }
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    #[inline]
    pub fn camera_offset(&self) -> Vec2 {
        self.camera_offset
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
