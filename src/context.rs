//! Shared state behind every routing listener.

use std::rc::Rc;

use folio_core::{Route, Site};
use web_sys::Window;

use crate::components::references;
use crate::dom::DomView;
use crate::fetch::BrowserClock;

/// The bootstrapped site plus the view it paints into.
///
/// Built once after content has loaded; listeners hold it through `Rc`.
pub struct SiteContext {
    site: Site,
    view: DomView,
    window: Window,
}

impl SiteContext {
    pub fn new(site: Site, view: DomView, window: Window) -> Self {
        Self { site, view, window }
    }

    fn hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    /// First paint: always a page render, whatever the hash looks like.
    pub fn render_initial(self: &Rc<Self>) {
        let page = self.site.router().current_page(&self.hash());
        self.render(page);
    }

    pub fn on_hash_change(self: &Rc<Self>) {
        match self.site.router().route(&self.hash()) {
            Route::Reference(id) => {
                let mut doc = self.view.document().clone();
                let linker = *self.site.linker();
                if let Some(highlight) = linker.focus(&mut doc, &id) {
                    references::schedule_clear(doc, linker, highlight);
                }
            }
            Route::Page(page) => self.render(page),
        }
    }

    fn render(self: &Rc<Self>, page: String) {
        let context = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let mut view = context.view.clone();
            context
                .site
                .renderer()
                .render(&mut view, &BrowserClock, &page)
                .await;
        });
    }
}
