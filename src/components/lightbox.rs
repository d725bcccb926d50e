//! Lightbox modal: DOM view, persistent controls, and per-content gallery
//! anchors.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::lightbox::GALLERY_SELECTOR;
use folio_core::{Frame, Gallery, GalleryLink, Lightbox, LightboxView};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlImageElement,
    KeyboardEvent,
};

use crate::dom::{query_all, set_display};

const OVERLAY_ID: &str = "lightbox-overlay";
const IMAGE_ID: &str = "lightbox-img";
const CAPTION_ID: &str = "lightbox-caption";
const CLOSE_ID: &str = "lightbox-close";
const PREV_ID: &str = "lightbox-prev";
const NEXT_ID: &str = "lightbox-next";

/// The modal's elements. Only the overlay is required.
pub struct DomLightbox {
    overlay: Element,
    image: Option<HtmlImageElement>,
    caption: Option<Element>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    body: Option<HtmlElement>,
}

impl DomLightbox {
    pub fn find(document: &Document) -> Option<Self> {
        let by_id = |id: &str| document.get_element_by_id(id);
        Some(Self {
            overlay: by_id(OVERLAY_ID)?,
            image: by_id(IMAGE_ID).and_then(|el| el.dyn_into().ok()),
            caption: by_id(CAPTION_ID),
            prev: by_id(PREV_ID).and_then(|el| el.dyn_into().ok()),
            next: by_id(NEXT_ID).and_then(|el| el.dyn_into().ok()),
            body: document.body(),
        })
    }
}

impl LightboxView for DomLightbox {
    fn set_open(&mut self, open: bool) {
        set_display(&self.overlay, if open { "flex" } else { "none" });
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }

    fn show_frame(&mut self, frame: &Frame) {
        if let Some(image) = &self.image {
            image.set_src(&frame.src);
        }
        if let Some(caption) = &self.caption {
            caption.set_text_content(Some(&frame.caption));
        }
        if let Some(prev) = &self.prev {
            prev.set_disabled(frame.prev_disabled);
        }
        if let Some(next) = &self.next {
            next.set_disabled(frame.next_disabled);
        }
    }
}

struct LightboxInner {
    machine: Lightbox,
    dom: DomLightbox,
}

/// Shared lightbox state for every listener that drives it.
#[derive(Clone)]
pub struct LightboxHandle(Rc<RefCell<LightboxInner>>);

impl LightboxHandle {
    /// Find the modal and bind its controls once. `None` when the shell has
    /// no lightbox overlay.
    pub fn install(document: &Document) -> Option<Self> {
        let dom = DomLightbox::find(document)?;
        let handle = Self(Rc::new(RefCell::new(LightboxInner {
            machine: Lightbox::new(),
            dom,
        })));
        handle.bind_controls(document);
        Some(handle)
    }

    fn with<R>(&self, f: impl FnOnce(&mut Lightbox, &mut DomLightbox) -> R) -> R {
        let mut inner = self.0.borrow_mut();
        let LightboxInner { machine, dom } = &mut *inner;
        f(machine, dom)
    }

    pub fn open(&self, gallery: Gallery, index: usize) {
        self.with(|machine, dom| machine.open(dom, gallery, index));
    }

    fn bind_controls(&self, document: &Document) {
        let inner = self.0.borrow();
        let dom = &inner.dom;

        if let Some(prev) = &dom.prev {
            let handle = self.clone();
            EventListener::new(prev, "click", move |_| {
                handle.with(|machine, dom| machine.prev(dom));
            })
            .forget();
        }
        if let Some(next) = &dom.next {
            let handle = self.clone();
            EventListener::new(next, "click", move |_| {
                handle.with(|machine, dom| machine.next(dom));
            })
            .forget();
        }
        if let Some(close) = document.get_element_by_id(CLOSE_ID) {
            let handle = self.clone();
            EventListener::new(&close, "click", move |_| {
                handle.with(|machine, dom| machine.close(dom));
            })
            .forget();
        }

        // Backdrop click: only when the overlay itself is the target.
        let overlay: JsValue = dom.overlay.clone().into();
        let handle = self.clone();
        EventListener::new(&dom.overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .map(JsValue::from)
                .is_some_and(|target| target == overlay);
            if on_backdrop {
                handle.with(|machine, dom| machine.close(dom));
            }
        })
        .forget();

        let handle = self.clone();
        EventListener::new(document, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                handle.with(|machine, dom| machine.handle_key(dom, &key));
            }
        })
        .forget();
    }

    /// Scan the galleries under `root` and bind their anchors.
    pub fn bind_galleries(&self, root: &Element) -> Vec<EventListener> {
        let mut listeners = Vec::new();

        for container in query_all(root, GALLERY_SELECTOR) {
            let anchors = query_all(&container, "a");
            let gallery: Gallery = anchors.iter().map(gallery_link).collect::<Vec<_>>().into();

            for (index, anchor) in anchors.iter().enumerate() {
                let handle = self.clone();
                let gallery = gallery.clone();
                listeners.push(EventListener::new_with_options(
                    anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        handle.open(gallery.clone(), index);
                    },
                ));
            }
        }

        listeners
    }
}

fn gallery_link(anchor: &Element) -> GalleryLink {
    // `HtmlAnchorElement::href` is the resolved absolute URL.
    let href = anchor
        .dyn_ref::<HtmlAnchorElement>()
        .map(HtmlAnchorElement::href)
        .or_else(|| anchor.get_attribute("href"))
        .unwrap_or_default();

    GalleryLink {
        href,
        caption: anchor.get_attribute("data-caption"),
        figure_caption: anchor
            .closest("figure")
            .ok()
            .flatten()
            .and_then(|figure| figure.query_selector("figcaption").ok().flatten())
            .and_then(|caption| caption.text_content()),
    }
}
