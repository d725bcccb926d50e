//! DOM implementations of the core's view traits.
//!
//! Every lookup is by id or selector at call time. A missing element
//! short-circuits that one operation; nothing here panics on an incomplete
//! page shell.

use std::rc::Rc;

use folio_core::card::{CARD_SELECTOR, COLLAPSED_CLASS, TOGGLE_SELECTOR};
use folio_core::{CollapsibleCard, ReferenceDocument, View, HIGHLIGHT_CLASS};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::components::ContentBindings;

/// Render target.
pub const APP_ID: &str = "app";
/// Loading indicator.
pub const LOADER_ID: &str = "loader";
const ACTIVE_CLASS: &str = "active";

pub fn set_display(element: &Element, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("display", value);
    }
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// The live document, as seen by reference links.
#[derive(Clone)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl ReferenceDocument for DomDocument {
    type Card = DomCard;

    fn has_element(&self, id: &str) -> bool {
        !id.is_empty() && self.by_id(id).is_some()
    }

    fn enclosing_card(&self, id: &str) -> Option<DomCard> {
        let element = self.by_id(id)?;
        element.closest(CARD_SELECTOR).ok().flatten().map(DomCard)
    }

    fn set_highlight(&mut self, id: &str, on: bool) {
        if let Some(element) = self.by_id(id) {
            let _ = element.class_list().toggle_with_force(HIGHLIGHT_CLASS, on);
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        if let Some(element) = self.by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// A `.task-card1` container.
pub struct DomCard(Element);

impl DomCard {
    /// Card enclosing a clicked header.
    pub fn from_header(header: &Element) -> Option<Self> {
        header.closest(CARD_SELECTOR).ok().flatten().map(DomCard)
    }
}

impl CollapsibleCard for DomCard {
    fn is_collapsed(&self) -> bool {
        self.0.class_list().contains(COLLAPSED_CLASS)
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        let _ = self.0.class_list().toggle_with_force(COLLAPSED_CLASS, collapsed);
    }

    fn set_glyph(&mut self, glyph: &str) {
        if let Ok(Some(button)) = self.0.query_selector(TOGGLE_SELECTOR) {
            button.set_text_content(Some(glyph));
        }
    }
}

/// The page shell as the renderer sees it.
///
/// Clones share one [`ContentBindings`], so whichever render finishes last
/// owns the live bindings.
#[derive(Clone)]
pub struct DomView {
    doc: DomDocument,
    bindings: Rc<ContentBindings>,
}

impl DomView {
    pub fn new(doc: DomDocument, bindings: Rc<ContentBindings>) -> Self {
        Self { doc, bindings }
    }

    pub fn document(&self) -> &DomDocument {
        &self.doc
    }

    fn show(&self, id: &str, visible: bool) {
        if let Some(element) = self.doc.by_id(id) {
            set_display(&element, if visible { "block" } else { "none" });
        }
    }
}

impl View for DomView {
    fn set_loader_visible(&mut self, visible: bool) {
        self.show(LOADER_ID, visible);
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.show(APP_ID, visible);
    }

    fn set_content(&mut self, html: &str) {
        match self.doc.by_id(APP_ID) {
            Some(app) => app.set_inner_html(html),
            None => tracing::warn!("No #{} element, content not rendered", APP_ID),
        }
    }

    fn set_nav_active(&mut self, nav_id: &str, active: bool) -> bool {
        match self.doc.by_id(nav_id) {
            Some(nav) => {
                let _ = nav.class_list().toggle_with_force(ACTIVE_CLASS, active);
                true
            }
            None => false,
        }
    }

    fn scroll_to_top(&mut self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn mount(&mut self) {
        if let Some(app) = self.doc.by_id(APP_ID) {
            self.bindings.attach(&app);
        }
    }
}
