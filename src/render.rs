//! WebGPU renderer whose device arrives asynchronously.
//!
//! The surface is created synchronously from the canvas; adapter and device
//! acquisition complete later on the microtask queue. Until then frames are
//! skipped and the uploaded scene is parked.

use crate::dom;
use field_core::{Camera, FrameTransform, ParticleField, ProximityGraph, Renderer, Viewport};
use field_gpu::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

enum GpuSlot {
    Pending(Option<(ParticleField, ProximityGraph)>),
    Ready(GpuState),
    Failed,
}

pub struct WebRenderer {
    canvas: web::HtmlCanvasElement,
    slot: Rc<RefCell<GpuSlot>>,
    backing: Rc<Cell<(u32, u32)>>,
}

impl WebRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, viewport: Viewport) -> anyhow::Result<Self> {
        dom::sync_canvas_backing_size(&canvas, &viewport);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let slot = Rc::new(RefCell::new(GpuSlot::Pending(None)));
        let backing = Rc::new(Cell::new(viewport.backing_size()));

        let slot_init = slot.clone();
        let backing_init = backing.clone();
        spawn_local(async move {
            let (w, h) = backing_init.get();
            match GpuState::new(&instance, surface, w, h).await {
                Ok(mut gpu) => {
                    let mut slot = slot_init.borrow_mut();
                    if let GpuSlot::Pending(Some((field, graph))) = &*slot {
                        gpu.upload_scene(field, graph);
                    }
                    let (w, h) = backing_init.get();
                    gpu.resize_if_needed(w, h);
                    *slot = GpuSlot::Ready(gpu);
                    log::info!("[web] WebGPU ready");
                }
                Err(e) => {
                    log::error!("[web] WebGPU init error: {:?}", e);
                    *slot_init.borrow_mut() = GpuSlot::Failed;
                }
            }
        });

        Ok(Self {
            canvas,
            slot,
            backing,
        })
    }
}

impl Renderer for WebRenderer {
    fn upload(&mut self, field: &ParticleField, graph: &ProximityGraph) {
        match &mut *self.slot.borrow_mut() {
            GpuSlot::Pending(parked) => *parked = Some((field.clone(), graph.clone())),
            GpuSlot::Ready(gpu) => gpu.upload_scene(field, graph),
            GpuSlot::Failed => {}
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        self.backing.set(viewport.backing_size());
        if let GpuSlot::Ready(gpu) = &mut *self.slot.borrow_mut() {
            let (w, h) = viewport.backing_size();
            gpu.resize_if_needed(w, h);
        }
    }

    fn render(&mut self, frame: &FrameTransform, camera: &Camera) -> anyhow::Result<()> {
        match &mut *self.slot.borrow_mut() {
            GpuSlot::Pending(_) => Ok(()),
            GpuSlot::Ready(gpu) => Renderer::render(gpu, frame, camera),
            GpuSlot::Failed => Err(anyhow::anyhow!("WebGPU device unavailable")),
        }
    }

    fn hide(&mut self) {
        dom::hide(&self.canvas);
        if let GpuSlot::Ready(gpu) = &mut *self.slot.borrow_mut() {
            gpu.hide();
        }
    }
}
