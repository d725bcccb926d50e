//! Behaviour bound onto the page shell and onto rendered content.
//!
//! Two lifetimes:
//!
//! - **Shell** bindings (theme, floating logo, scroll-to-top, home link,
//!   lightbox controls, `toggleCard`) are attached once at startup and live
//!   for the page lifetime.
//! - **Content** bindings (reference links, gallery anchors) belong to one
//!   rendered fragment. [`ContentBindings::attach`] replaces the previous set,
//!   and dropping an `EventListener` detaches it.

pub mod ambient;
pub mod collapse;
pub mod lightbox;
pub mod references;

use std::cell::RefCell;

use folio_core::ReferenceLinker;
use gloo::events::EventListener;
use web_sys::Element;

use crate::dom::DomDocument;

use self::lightbox::LightboxHandle;

pub struct ContentBindings {
    doc: DomDocument,
    linker: ReferenceLinker,
    lightbox: Option<LightboxHandle>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ContentBindings {
    pub fn new(
        doc: DomDocument,
        linker: ReferenceLinker,
        lightbox: Option<LightboxHandle>,
    ) -> Self {
        Self {
            doc,
            linker,
            lightbox,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Bind the content subtree under `root`, detaching the previous one.
    pub fn attach(&self, root: &Element) {
        let mut listeners = references::bind(root, &self.doc, self.linker);
        if let Some(lightbox) = &self.lightbox {
            listeners.extend(lightbox.bind_galleries(root));
        }

        let count = listeners.len();
        let previous = self.listeners.replace(listeners);
        tracing::debug!(bound = count, detached = previous.len(), "Mounted content bindings");
    }
}
