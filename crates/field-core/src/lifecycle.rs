//! Owned controller tying the field, the graph and the render loop to host
//! events.
//!
//! ```text
//! init ─┬─> Disabled                      (narrow viewport, reduced motion, no renderer)
//!       └─> Running <──> Suspended        (viewport intersection)
//!              └──────────┴──> Halted     (resize below the width threshold)
//! ```
//!
//! `Disabled` and `Halted` are terminal. Every transition out of `Running`
//! cancels the frame that is already requested.

use crate::camera::Camera;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::graph::ProximityGraph;
use crate::parallax::ParallaxController;
use crate::platform::{Platform, Renderer};
use crate::scheduler::{FrameTransform, RenderLoopScheduler};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Disabled,
    Running,
    Suspended,
    Halted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisableReason {
    NarrowViewport { width: f64 },
    ReducedMotion,
    RendererUnavailable,
}

struct Scene<R> {
    renderer: R,
    field: ParticleField,
    graph: ProximityGraph,
}

pub struct AmbientField<P: Platform> {
    platform: P,
    config: FieldConfig,
    scene: Option<Scene<P::Renderer>>,
    parallax: ParallaxController,
    scheduler: RenderLoopScheduler,
    camera: Camera,
    phase: LifecyclePhase,
    disable_reason: Option<DisableReason>,
    last_frame: Option<FrameTransform>,
}

/// Startup gate: `Some` when the field must stay a complete no-op.
pub fn disable_reason(
    config: &FieldConfig,
    width: f64,
    prefers_reduced_motion: bool,
) -> Option<DisableReason> {
    if width < config.min_viewport_width {
        Some(DisableReason::NarrowViewport { width })
    } else if prefers_reduced_motion {
        Some(DisableReason::ReducedMotion)
    } else {
        None
    }
}

impl<P: Platform> AmbientField<P> {
    /// Check the environment, then generate, connect, upload and start the loop.
    ///
    /// Only configuration errors are returned; an unsupported environment or a
    /// renderer that cannot be built yields a `Disabled` field instead.
    pub fn init<R: Rng + ?Sized>(
        platform: P,
        config: FieldConfig,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        config.validate()?;
        let viewport = platform.viewport();
        let mut this = Self {
            scheduler: RenderLoopScheduler::new(config.camera_smoothing),
            camera: Camera::new(viewport.aspect()),
            parallax: ParallaxController::default(),
            scene: None,
            phase: LifecyclePhase::Disabled,
            disable_reason: None,
            last_frame: None,
            config,
            platform,
        };

        let reduced_motion = this.platform.prefers_reduced_motion();
        if let Some(reason) = disable_reason(&this.config, viewport.width, reduced_motion) {
            log::info!("[lifecycle] disabled at startup: {:?}", reason);
            this.disable_reason = Some(reason);
            return Ok(this);
        }

        let mut renderer = match this.platform.create_renderer() {
            Ok(r) => r,
            Err(e) => {
                log::error!("[lifecycle] renderer unavailable: {:?}", e);
                this.disable_reason = Some(DisableReason::RendererUnavailable);
                return Ok(this);
            }
        };

        let field = ParticleField::generate(
            rng,
            this.config.count,
            this.config.palette,
            this.config.radius_min,
            this.config.radius_spread,
        )?;
        let graph =
            ProximityGraph::build(&field, this.config.connect_distance, this.config.max_edges);
        renderer.upload(&field, &graph);
        renderer.resize(viewport);
        log::info!(
            "[lifecycle] field ready: {} particles, {} edges, viewport {:.0}x{:.0}",
            field.len(),
            graph.len(),
            viewport.width,
            viewport.height
        );
        this.scene = Some(Scene {
            renderer,
            field,
            graph,
        });
        this.phase = LifecyclePhase::Running;
        this.scheduler.start(&mut this.platform);
        Ok(this)
    }

    /// Frame callback entry point. Callbacks delivered outside `Running` are ignored.
    pub fn frame(&mut self) {
        if self.phase != LifecyclePhase::Running {
            return;
        }
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let now = self.platform.now_seconds();
        let frame = self.scheduler.tick(now, self.parallax.target());
        self.camera.set_offset(frame.camera_offset);
        self.last_frame = Some(frame);
        log::trace!(
            "[lifecycle] frame {} t={:.3}",
            self.scheduler.frames(),
            frame.elapsed
        );
        if let Err(e) = scene.renderer.render(&frame, &self.camera) {
            log::error!("[lifecycle] render failed, halting: {:?}", e);
            self.halt();
            return;
        }
        self.scheduler.schedule_next(&mut self.platform);
    }

    /// Pointer position in viewport (CSS) pixels.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.scene.is_none() {
            return;
        }
        let viewport = self.platform.viewport();
        self.parallax.pointer_moved(x, y, &viewport);
    }

    /// Hosting section entered (`true`) or left (`false`) the viewport.
    pub fn visibility_changed(&mut self, visible: bool) {
        match (self.phase, visible) {
            (LifecyclePhase::Running, false) => {
                self.scheduler.stop(&mut self.platform);
                self.phase = LifecyclePhase::Suspended;
                log::info!("[lifecycle] suspended (off-screen)");
            }
            (LifecyclePhase::Running, true) => {
                // Re-arm a loop whose last frame request the host refused.
                self.scheduler.schedule_next(&mut self.platform);
            }
            (LifecyclePhase::Suspended, true) => {
                self.phase = LifecyclePhase::Running;
                self.scheduler.start(&mut self.platform);
                log::info!("[lifecycle] resumed");
            }
            _ => {}
        }
    }

    /// Re-read the viewport after a host resize.
    pub fn resized(&mut self) {
        if !matches!(self.phase, LifecyclePhase::Running | LifecyclePhase::Suspended) {
            return;
        }
        let viewport = self.platform.viewport();
        if viewport.width < self.config.min_viewport_width {
            log::info!(
                "[lifecycle] viewport narrowed to {:.0}px, halting for this session",
                viewport.width
            );
            self.halt();
            return;
        }
        self.camera.aspect = viewport.aspect();
        if let Some(scene) = self.scene.as_mut() {
            scene.renderer.resize(viewport);
        }
    }

    /// Cancel any pending frame and release the renderer, returning the platform.
    pub fn dispose(mut self) -> P {
        self.scheduler.stop(&mut self.platform);
        self.scene = None;
        log::info!("[lifecycle] disposed");
        self.platform
    }

    fn halt(&mut self) {
        self.scheduler.stop(&mut self.platform);
        if let Some(scene) = self.scene.as_mut() {
            scene.renderer.hide();
        }
        self.phase = LifecyclePhase::Halted;
    }

    #[inline]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[inline]
    pub fn disable_reason(&self) -> Option<DisableReason> {
        self.disable_reason
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn field(&self) -> Option<&ParticleField> {
        self.scene.as_ref().map(|s| &s.field)
    }

    #[inline]
    pub fn graph(&self) -> Option<&ProximityGraph> {
        self.scene.as_ref().map(|s| &s.graph)
    }

    #[inline]
    pub fn renderer(&self) -> Option<&P::Renderer> {
        self.scene.as_ref().map(|s| &s.renderer)
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn parallax(&self) -> &ParallaxController {
        &self.parallax
    }

    #[inline]
    pub fn scheduler(&self) -> &RenderLoopScheduler {
        &self.scheduler
    }

    #[inline]
    pub fn last_frame(&self) -> Option<&FrameTransform> {
        self.last_frame.as_ref()
    }

    #[inline]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    #[inline]
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
