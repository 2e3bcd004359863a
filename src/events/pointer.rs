use crate::SharedField;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PointerWiring {
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
}

/// Parallax follows the pointer anywhere in the window, not only over the canvas.
pub fn wire_pointermove(
    window: &web::Window,
    field: &SharedField,
) -> anyhow::Result<PointerWiring> {
    let field = Rc::downgrade(field);
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(field) = field.upgrade() else {
            return;
        };
        if let Ok(mut f) = field.try_borrow_mut() {
            f.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
        };
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("pointermove listener: {:?}", e)))?;
    Ok(PointerWiring { on_move })
}

impl PointerWiring {
    pub fn unwire(self, window: &web::Window) {
        _ = window
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
    }
}
