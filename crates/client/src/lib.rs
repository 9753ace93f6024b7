// WASM entry point for display-kit
// Exposes the fullscreen adapter and the numeric helpers to JavaScript UI code.

use display::{AdapterConfig, FullscreenAdapter, HostError, Remap, Toggle};
use wasm_bindgen::prelude::*;
use web_sys::Element;

mod host;  // FullscreenHost / DisplaySurface over the real DOM
mod utils; // Console logging, JS error text

pub use host::{WebDocument, WebSurface};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn host_error(err: HostError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Fullscreen adapter bound to the page document.
#[wasm_bindgen]
pub struct FullscreenHelper {
    adapter: FullscreenAdapter<WebDocument>,
}

#[wasm_bindgen]
impl FullscreenHelper {
    /// Create a helper. `config` is an optional `{ probeTag }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FullscreenHelper, JsValue> {
        let config: AdapterConfig = if config.is_undefined() || config.is_null() {
            AdapterConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let document = WebDocument::current()?;
        Ok(FullscreenHelper {
            adapter: FullscreenAdapter::with_config(document, config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn supported(&self) -> bool {
        self.adapter.is_supported()
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.adapter.is_active()
    }

    /// Exit fullscreen if active, otherwise put `element` in fullscreen.
    /// Returns false when the browser offers no way to do it.
    pub fn toggle(&self, element: &Element) -> Result<bool, JsValue> {
        match self.adapter.toggle(&WebSurface(element)).map_err(host_error)? {
            Toggle::Entered(method) | Toggle::Exited(method) => {
                console_log!("fullscreen: {}", method.name);
                Ok(true)
            }
            Toggle::Unavailable => Ok(false),
        }
    }
}

fn page_adapter() -> Option<FullscreenAdapter<WebDocument>> {
    WebDocument::current().ok().map(FullscreenAdapter::new)
}

#[wasm_bindgen(js_name = fullscreenSupported)]
pub fn fullscreen_supported() -> bool {
    page_adapter().is_some_and(|adapter| adapter.is_supported())
}

#[wasm_bindgen(js_name = fullscreenActive)]
pub fn fullscreen_active() -> bool {
    page_adapter().is_some_and(|adapter| adapter.is_active())
}

#[wasm_bindgen(js_name = toggleFullscreen)]
pub fn toggle_fullscreen(element: &Element) -> Result<(), JsValue> {
    let Some(adapter) = page_adapter() else {
        return Ok(());
    };
    adapter.toggle(&WebSurface(element)).map_err(host_error)?;
    Ok(())
}

#[wasm_bindgen(js_name = clamp)]
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    display::clamp(value, min, max)
}

#[wasm_bindgen(js_name = lerp)]
pub fn lerp_value(value1: f64, value2: f64, amount: f64, is_clamped: Option<bool>) -> f64 {
    display::lerp(value1, value2, amount, is_clamped.unwrap_or(false))
}

#[wasm_bindgen(js_name = mapRange)]
pub fn map_range(
    value: f64,
    min1: f64,
    max1: f64,
    min2: f64,
    max2: f64,
    is_clamped: Option<bool>,
) -> f64 {
    display::map(value, min1, max1, min2, max2, is_clamped.unwrap_or(false))
}

/// Apply a `{ from: [a, b], to: [c, d], clamped? }` remap to `value`.
#[wasm_bindgen(js_name = applyRemap)]
pub fn apply_remap(remap: JsValue, value: f64) -> Result<f64, JsValue> {
    let remap: Remap = serde_wasm_bindgen::from_value(remap)?;
    Ok(remap.apply(value))
}
