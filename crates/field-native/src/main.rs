use std::sync::Arc;
use std::time::Instant;

use field_core::{
    AmbientField, Camera, FieldConfig, FrameHandle, FrameTransform, LifecyclePhase, ParticleField,
    Platform, ProximityGraph, Renderer, Viewport,
};
use field_gpu::GpuState;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

const REDUCED_MOTION_ENV: &str = "HERO_FIELD_REDUCED_MOTION";

/// Desktop stand-in for the browser: redraw requests act as animation frames,
/// window occlusion as viewport intersection.
struct NativePlatform {
    window: Arc<Window>,
    clock: Instant,
    next_handle: i64,
    pending: Option<FrameHandle>,
    reduced_motion: bool,
}

impl NativePlatform {
    fn new(window: Arc<Window>) -> Self {
        let reduced_motion = std::env::var(REDUCED_MOTION_ENV)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            window,
            clock: Instant::now(),
            next_handle: 0,
            pending: None,
            reduced_motion,
        }
    }

    /// Consume the pending frame request, if any, when the window is asked to redraw.
    fn take_due_frame(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// The window owns its swapchain size, so the surface follows the full
/// physical size rather than the browser's clamped backing store.
struct NativeRenderer {
    gpu: GpuState,
}

impl Renderer for NativeRenderer {
    fn upload(&mut self, field: &ParticleField, graph: &ProximityGraph) {
        self.gpu.upload_scene(field, graph);
    }

    fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.physical_size();
        self.gpu.resize_if_needed(w, h);
    }

    fn render(&mut self, frame: &FrameTransform, camera: &Camera) -> anyhow::Result<()> {
        self.gpu.render(frame, camera)
    }

    fn hide(&mut self) {
        self.gpu.hide();
    }
}

impl Platform for NativePlatform {
    type Renderer = NativeRenderer;

    fn viewport(&self) -> Viewport {
        let scale = self.window.scale_factor();
        let size: LogicalSize<f64> = self.window.inner_size().to_logical(scale);
        Viewport::new(size.width, size.height, scale)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn now_seconds(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending = Some(handle);
        self.window.request_redraw();
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn create_renderer(&mut self) -> anyhow::Result<NativeRenderer> {
        let size = self.window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&self.window))?;
        let gpu = pollster::block_on(GpuState::new(&instance, surface, size.width, size.height))?;
        Ok(NativeRenderer { gpu })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("hero-field (native preview)")
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?,
    );

    let platform = NativePlatform::new(Arc::clone(&window));
    let mut rng = rand::thread_rng();
    let mut field = AmbientField::init(platform, FieldConfig::default(), &mut rng)?;
    if field.phase() == LifecyclePhase::Disabled {
        log::info!(
            "[native] field disabled ({:?}); window stays empty",
            field.disable_reason()
        );
    }

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent { event, .. } = event {
            match event {
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                    field.resized()
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = position.to_logical::<f64>(window.scale_factor());
                    field.pointer_moved(logical.x, logical.y);
                }
                WindowEvent::Occluded(occluded) => field.visibility_changed(!occluded),
                WindowEvent::RedrawRequested => {
                    if field.platform_mut().take_due_frame() {
                        field.frame();
                    }
                }
                WindowEvent::CloseRequested => elwt.exit(),
                _ => {}
            }
        }
    })?;
    Ok(())
}
