//! Reference link listeners.

use folio_core::reference::REFERENCE_LINK_SELECTOR;
use folio_core::{Highlight, ReferenceLinker};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::Element;

use crate::dom::{query_all, DomDocument};
use crate::fetch::BrowserClock;

/// Hover and click listeners for every `.ref-link` under `root`.
pub fn bind(root: &Element, doc: &DomDocument, linker: ReferenceLinker) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for link in query_all(root, REFERENCE_LINK_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();

        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let mut doc = doc.clone();
            let href = href.clone();
            listeners.push(EventListener::new(&link, event, move |_| {
                linker.hover(&mut doc, &href, entering);
            }));
        }

        let mut doc = doc.clone();
        listeners.push(EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(highlight) = linker.activate(&mut doc, &href) {
                    event.prevent_default();
                    schedule_clear(doc.clone(), linker, highlight);
                }
            },
        ));
    }

    listeners
}

/// Remove a highlight once its time is up. The element may be gone by then,
/// in which case nothing happens.
pub fn schedule_clear(mut doc: DomDocument, linker: ReferenceLinker, highlight: Highlight) {
    wasm_bindgen_futures::spawn_local(async move {
        linker.expire(&mut doc, &BrowserClock, highlight).await;
    });
}
