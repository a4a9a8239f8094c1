#![cfg(target_arch = "wasm32")]

pub mod constants;
pub mod demo;
pub mod dom;
pub mod frame;
pub mod knob;
pub mod morph;
pub mod names;
pub mod skins;
pub mod svg;

pub use frame::FrameScheduler;
pub use knob::KnobInput;
pub use morph::{HoverMorph, MorphHandle};
pub use skins::{
    GripDialOptions, ReactiveGripDial, RotationSkin, Skin, StandardKnob, StandardKnobOptions,
};
pub use svg::DefsRegistry;

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static PAGE: RefCell<Option<(DefsRegistry, demo::Demos)>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("knob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already initialized; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut defs = DefsRegistry::new(&document)?;
    let demos = demo::setup(&document, &mut defs)?;
    PAGE.with(|slot| *slot.borrow_mut() = Some((defs, demos)));
    log::info!("[init] demo page ready");
    Ok(())
}
