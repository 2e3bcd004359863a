// Hand-driven host for lifecycle and scheduler tests: time only moves when a
// test sets `now`, and frame callbacks are delivered by calling `frame()`.

#![allow(dead_code)]
use field_core::{
    Camera, FrameHandle, FrameTransform, ParticleField, Platform, ProximityGraph, Renderer,
    Viewport,
};

#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub uploaded_particles: usize,
    pub uploaded_edges: usize,
    pub uploads: usize,
    pub renders: usize,
    pub resizes: Vec<Viewport>,
    pub hidden: bool,
    pub fail_render: bool,
}

impl Renderer for FakeRenderer {
    fn upload(&mut self, field: &ParticleField, graph: &ProximityGraph) {
        self.uploads += 1;
        self.uploaded_particles = field.len();
        self.uploaded_edges = graph.len();
    }

    fn resize(&mut self, viewport: Viewport) {
        self.resizes.push(viewport);
    }

    fn render(&mut self, _frame: &FrameTransform, _camera: &Camera) -> anyhow::Result<()> {
        if self.fail_render {
            anyhow::bail!("device lost");
        }
        self.renders += 1;
        Ok(())
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

#[derive(Debug)]
pub struct FakePlatform {
    pub viewport: Viewport,
    pub reduced_motion: bool,
    pub now: f64,
    pub next_handle: i64,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub renderers_created: usize,
    pub renderer_unavailable: bool,
    pub fail_render: bool,
    pub refuse_frames: bool,
}

impl FakePlatform {
    pub fn desktop() -> Self {
        Self::with_size(1280.0, 720.0)
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height, 1.0),
            reduced_motion: false,
            now: 0.0,
            next_handle: 0,
            requested: Vec::new(),
            cancelled: Vec::new(),
            renderers_created: 0,
            renderer_unavailable: false,
            fail_render: false,
            refuse_frames: false,
        }
    }
}

impl Platform for FakePlatform {
    type Renderer = FakeRenderer;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn now_seconds(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse_frames {
            return None;
        }
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }

    fn create_renderer(&mut self) -> anyhow::Result<FakeRenderer> {
        if self.renderer_unavailable {
            anyhow::bail!("no adapter");
        }
        self.renderers_created += 1;
        Ok(FakeRenderer {
            fail_render: self.fail_render,
            ..FakeRenderer::default()
        })
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
