use std::rc::Rc;

use folio_core::{Site, SiteConfig, SiteEdition};
use gloo::events::EventListener;
use web_sys::{Document, Window};

use crate::components::lightbox::LightboxHandle;
use crate::components::{ambient, collapse, ContentBindings};
use crate::context::SiteContext;
use crate::dom::{DomDocument, DomView};
use crate::fetch::HttpSource;

/// Bind the shell, load all content, then start routing.
///
/// Shell controls work while content is still loading. Hash changes are only
/// listened to once the cache is complete, so no route ever renders against
/// a partial cache.
pub async fn launch(config: SiteConfig, window: Window, document: Document) {
    ambient::bind(&window, &document, &config);
    collapse::install(&window);
    let lightbox = LightboxHandle::install(&document);
    if lightbox.is_none() {
        tracing::debug!("No lightbox overlay in shell, galleries stay plain links");
    }

    let pathname = window.location().pathname().unwrap_or_default();
    let edition = SiteEdition::detect(&pathname, &config.edition_marker);
    let site = Site::bootstrap(config, edition, &HttpSource).await;

    let doc = DomDocument::new(document);
    let bindings = Rc::new(ContentBindings::new(doc.clone(), *site.linker(), lightbox));
    let context = Rc::new(SiteContext::new(site, DomView::new(doc, bindings), window.clone()));

    let listener_context = Rc::clone(&context);
    EventListener::new(&window, "hashchange", move |_| {
        listener_context.on_hash_change();
    })
    .forget();

    context.render_initial();
}
