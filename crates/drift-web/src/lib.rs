#![cfg(target_arch = "wasm32")]

pub mod cursor;
pub mod dom;
pub mod events;
pub mod field;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod reveal;
pub mod scroll;
pub mod tilt;

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::wire(&document);
    scroll::wire(&window, &document);
    cursor::wire(&window, &document);
    reveal::wire(&document);
    tilt::wire(&document);

    // The background keeps running for the page's lifetime; the handle is
    // only interesting to an embedder that wants to tear it down early.
    let _sim = field::start(&window, &document);

    Ok(())
}
