//! The `toggleCard(header)` hook fragments call from inline `onclick`.

use folio_core::card;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

use crate::dom::DomCard;

const HOOK_NAME: &str = "toggleCard";

/// Expose `window.toggleCard` for the life of the page.
pub fn install(window: &Window) {
    let hook = Closure::<dyn Fn(Element)>::new(|header: Element| {
        let Some(mut card) = DomCard::from_header(&header) else {
            return;
        };
        let collapsed = card::toggle(&mut card);
        tracing::debug!(collapsed, "Toggled card");
    });

    let installed = js_sys::Reflect::set(window, &JsValue::from_str(HOOK_NAME), hook.as_ref());
    if !matches!(installed, Ok(true)) {
        tracing::warn!("Could not install window.{}; cards will not collapse", HOOK_NAME);
    }
    hook.forget();
}
