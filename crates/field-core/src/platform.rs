//! Host capabilities the lifecycle depends on.
//!
//! The browser frontend backs these with `requestAnimationFrame`, `matchMedia`
//! and a WebGPU canvas; the desktop preview with winit; tests with a fake that
//! advances time by hand.

use crate::camera::{Camera, Viewport};
use crate::field::ParticleField;
use crate::graph::ProximityGraph;
use crate::scheduler::FrameTransform;

/// Opaque id of a requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i64);

pub trait Renderer {
    /// Receive the static geometry. Called once, right after construction.
    fn upload(&mut self, field: &ParticleField, graph: &ProximityGraph);
    fn resize(&mut self, viewport: Viewport);
    fn render(&mut self, frame: &FrameTransform, camera: &Camera) -> anyhow::Result<()>;
    /// Hide the drawing surface for the rest of the session.
    fn hide(&mut self);
}

pub trait Platform {
    type Renderer: Renderer;

    fn viewport(&self) -> Viewport;
    fn prefers_reduced_motion(&self) -> bool;
    /// Monotonic seconds from an arbitrary origin.
    fn now_seconds(&self) -> f64;
    /// Ask the host to deliver one frame callback before the next paint.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    fn create_renderer(&mut self) -> anyhow::Result<Self::Renderer>;
}
