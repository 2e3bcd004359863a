#![cfg(target_arch = "wasm32")]
use field_core::{AmbientField, FieldConfig, LifecyclePhase};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod platform;
mod render;

use platform::{FrameCallback, WebPlatform};

pub(crate) type HeroField = AmbientField<WebPlatform>;
pub(crate) type SharedField = Rc<RefCell<HeroField>>;

struct Mounted {
    window: web::Window,
    field: SharedField,
    wiring: events::EventWiring,
    tick: FrameCallback,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    init_hero_field();
    Ok(())
}

/// Mount the field on `#hero-particles`. No-op when already mounted, when the
/// canvas is missing, or when the environment disables the effect.
#[wasm_bindgen]
pub fn init_hero_field() {
    if let Err(e) = mount() {
        // cosmetic feature: never let a failure reach the page
        log::error!("[web] init error: {:?}", e);
    }
}

/// Cancel the loop, remove listeners and release the GPU surface.
#[wasm_bindgen]
pub fn dispose_hero_field() {
    let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) else {
        return;
    };
    mounted.wiring.unwire(&mounted.window);
    match Rc::try_unwrap(mounted.field) {
        Ok(cell) => {
            cell.into_inner().dispose();
        }
        Err(_) => log::warn!("[web] field still referenced at dispose; it will stop on drop"),
    }
    mounted.tick.borrow_mut().take();
}

fn mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        return Ok(());
    }
    let Some((window, document)) = dom::window_document() else {
        return Ok(());
    };
    let Some(canvas) = dom::find_canvas(&document, constants::CANVAS_ID) else {
        log::debug!("[web] #{} not found; nothing to do", constants::CANVAS_ID);
        return Ok(());
    };
    let config = config::apply_overrides(FieldConfig::default(), |name| canvas.get_attribute(name));

    // The frame callback is created before the field exists, so it resolves
    // the field through a slot filled in once init returns.
    let target: Rc<RefCell<Weak<RefCell<HeroField>>>> = Rc::new(RefCell::new(Weak::new()));
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    {
        let target = target.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let Some(field) = target.borrow().upgrade() else {
                return;
            };
            if let Ok(mut f) = field.try_borrow_mut() {
                f.frame();
            };
        }) as Box<dyn FnMut(f64)>));
    }

    let platform = WebPlatform::new(window.clone(), canvas.clone(), tick.clone());
    let field = AmbientField::init(platform, config, &mut rand::thread_rng())?;
    if field.phase() == LifecyclePhase::Disabled {
        log::info!("[web] hero field disabled: {:?}", field.disable_reason());
        return Ok(());
    }

    let field: SharedField = Rc::new(RefCell::new(field));
    *target.borrow_mut() = Rc::downgrade(&field);
    let wiring = match events::wire(&window, &canvas, &field) {
        Ok(w) => w,
        Err(e) => {
            if let Ok(cell) = Rc::try_unwrap(field) {
                cell.into_inner().dispose();
            }
            return Err(e);
        }
    };
    log::info!("[web] hero field mounted");
    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            window,
            field,
            wiring,
            tick,
        })
    });
    Ok(())
}
