use crate::dom;
use crate::SharedField;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ViewportWiring {
    on_resize: Closure<dyn FnMut()>,
    observer: Option<(web::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>,
}

pub fn wire_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &SharedField,
) -> anyhow::Result<ViewportWiring> {
    let weak = Rc::downgrade(field);
    let on_resize = Closure::wrap(Box::new(move || {
        let Some(field) = weak.upgrade() else {
            return;
        };
        if let Ok(mut f) = field.try_borrow_mut() {
            f.resized();
        };
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("resize listener: {:?}", e)))?;

    let observer = match observe_host(canvas, field) {
        Ok(o) => Some(o),
        Err(e) => {
            // Without intersection events the loop simply never suspends.
            log::warn!("[web] IntersectionObserver unavailable: {:?}", e);
            None
        }
    };

    Ok(ViewportWiring {
        on_resize,
        observer,
    })
}

fn observe_host(
    canvas: &web::HtmlCanvasElement,
    field: &SharedField,
) -> anyhow::Result<(web::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> {
    let weak = Rc::downgrade(field);
    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        // The most recent entry wins when several are batched together.
        let Some(entry) = entries
            .iter()
            .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            .last()
        else {
            return;
        };
        let Some(field) = weak.upgrade() else {
            return;
        };
        if let Ok(mut f) = field.try_borrow_mut() {
            f.visibility_changed(entry.is_intersecting());
        };
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let host = dom::host_element(canvas);
    observer.observe(&host);
    Ok((observer, on_intersect))
}

impl ViewportWiring {
    pub fn unwire(self, window: &web::Window) {
        _ = window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Some((observer, _callback)) = self.observer {
            observer.disconnect();
        }
    }
}
