//! WebAssembly entry point and platform-specific code.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

const CANVAS_ID: &str = "shapeboard-canvas";

/// Find or create the canvas the window renders into.
///
/// The canvas is appended to `#app` and sized to the viewport at the device
/// pixel ratio. The `#loading` placeholder is removed once the canvas exists.
pub fn attach_canvas() -> Option<web_sys::HtmlCanvasElement> {
    let web_window = web_sys::window()?;
    let document = web_window.document()?;

    let viewport_width = web_window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);
    let viewport_height = web_window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .or_else(|| {
            let app_div = document.get_element_by_id("app")?;
            let canvas = document.create_element("canvas").ok()?;
            canvas.set_id(CANVAS_ID);
            app_div.append_child(&canvas).ok()?;
            canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
        });

    let Some(canvas) = canvas else {
        log::error!("No #app element to attach the canvas to");
        return None;
    };

    if let Some(loading) = document.get_element_by_id("loading") {
        loading.remove();
    }

    let dpr = web_window.device_pixel_ratio();
    let physical_width = (viewport_width * dpr) as u32;
    let physical_height = (viewport_height * dpr) as u32;
    canvas.set_width(physical_width);
    canvas.set_height(physical_height);

    let style = canvas.style();
    for (property, value) in [
        ("width", "100%"),
        ("height", "100%"),
        ("display", "block"),
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
    ] {
        let _ = style.set_property(property, value);
    }

    log::info!(
        "Canvas attached: {}x{} (physical: {}x{}, dpr: {})",
        viewport_width,
        viewport_height,
        physical_width,
        physical_height,
        dpr
    );

    Some(canvas)
}

#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger already set: {}", e).into());
    }

    log::info!("Starting ShapeBoard (WASM)");

    if let Err(e) = crate::App::run(AppConfig::default()) {
        log::error!("{}", e);
    }
}
