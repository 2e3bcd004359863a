use crate::dom;
use crate::render::WebRenderer;
use field_core::{FrameHandle, Platform, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `requestAnimationFrame` callback, shared so it can be re-issued every frame.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct WebPlatform {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    clock: Instant,
    tick: FrameCallback,
}

impl WebPlatform {
    pub fn new(window: web::Window, canvas: web::HtmlCanvasElement, tick: FrameCallback) -> Self {
        Self {
            window,
            canvas,
            clock: Instant::now(),
            tick,
        }
    }
}

impl Platform for WebPlatform {
    type Renderer = WebRenderer;

    fn viewport(&self) -> Viewport {
        dom::viewport(&self.window)
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(&self.window)
    }

    fn now_seconds(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
            .map(|id| FrameHandle(id as i64))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0 as i32);
    }

    fn create_renderer(&mut self) -> anyhow::Result<WebRenderer> {
        WebRenderer::new(self.canvas.clone(), dom::viewport(&self.window))
    }
}
