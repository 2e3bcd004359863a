pub mod pointer;
pub mod viewport;

use crate::SharedField;
use web_sys as web;

/// Listeners installed for one mounted field, removed again on dispose.
pub struct EventWiring {
    pointer: pointer::PointerWiring,
    viewport: viewport::ViewportWiring,
}

pub fn wire(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &SharedField,
) -> anyhow::Result<EventWiring> {
    Ok(EventWiring {
        pointer: pointer::wire_pointermove(window, field)?,
        viewport: viewport::wire_viewport(window, canvas, field)?,
    })
}

impl EventWiring {
    pub fn unwire(self, window: &web::Window) {
        self.pointer.unwire(window);
        self.viewport.unwire(window);
    }
}
