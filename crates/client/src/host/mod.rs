// Browser host - fullscreen traits over web_sys::Document / web_sys::Element
//
// Vendor-prefixed members are not in web-sys, so every lookup goes through
// Reflect on the raw JS object.
use display::{DisplaySurface, FullscreenHost, HostError, HostMethod};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

use crate::utils::js_error_message;

fn property(target: &JsValue, name: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

fn function(target: &JsValue, name: &str) -> Option<Function> {
    property(target, name).dyn_into::<Function>().ok()
}

/// Call `method` on `target`. Returned promises are not awaited; a rejection
/// is only logged.
fn invoke(target: &JsValue, method: HostMethod) -> Result<(), HostError> {
    let func = function(target, method.name).ok_or_else(|| HostError::CallFailed {
        method: method.name,
        reason: "not a function".to_string(),
    })?;
    let result = func.call0(target).map_err(|e| HostError::CallFailed {
        method: method.name,
        reason: js_error_message(&e),
    })?;

    if let Ok(promise) = result.dyn_into::<Promise>() {
        let name = method.name;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                crate::console_error!("{} rejected: {}", name, js_error_message(&e));
            }
        });
    }
    Ok(())
}

/// The page document as a fullscreen host.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window.
    pub fn current() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        Ok(Self::new(document))
    }
}

impl FullscreenHost for WebDocument {
    fn is_truthy(&self, name: &str) -> bool {
        property(&self.document, name).is_truthy()
    }

    fn has_method(&self, name: &str) -> bool {
        function(&self.document, name).is_some()
    }

    fn call_method(&self, method: HostMethod) -> Result<(), HostError> {
        invoke(&self.document, method)
    }

    fn element_has_method(&self, tag: &str, name: &str) -> bool {
        self.document
            .create_element(tag)
            .map(|el| property(&el, name).is_truthy())
            .unwrap_or(false)
    }
}

/// An element to promote to fullscreen.
#[derive(Debug, Clone, Copy)]
pub struct WebSurface<'a>(pub &'a Element);

impl DisplaySurface for WebSurface<'_> {
    fn has_method(&self, name: &str) -> bool {
        function(self.0, name).is_some()
    }

    fn call_method(&self, method: HostMethod) -> Result<(), HostError> {
        invoke(self.0, method)
    }
}
