//! The assembled site: everything routing and rendering need, built once by
//! the bootstrap routine and handed to the shell.

use std::rc::Rc;

use crate::bootstrap::load_content;
use crate::cache::ContentCache;
use crate::config::SiteConfig;
use crate::pages::{PageRegistry, SiteEdition};
use crate::reference::ReferenceLinker;
use crate::render::Renderer;
use crate::router::Router;
use crate::source::ContentSource;

pub struct Site {
    config: SiteConfig,
    edition: SiteEdition,
    registry: Rc<PageRegistry>,
    router: Router,
    renderer: Renderer,
    linker: ReferenceLinker,
}

impl Site {
    /// Load every page of `edition` from `source` and assemble the site.
    pub async fn bootstrap<S: ContentSource>(
        config: SiteConfig,
        edition: SiteEdition,
        source: &S,
    ) -> Self {
        tracing::info!(%edition, "Bootstrapping site");
        let registry = PageRegistry::for_edition(edition);
        let cache = load_content(&registry, source).await;
        Self::from_parts(config, edition, registry, cache)
    }

    pub fn from_parts(
        config: SiteConfig,
        edition: SiteEdition,
        registry: PageRegistry,
        cache: ContentCache,
    ) -> Self {
        let registry = Rc::new(registry);
        let renderer = Renderer::new(registry.clone(), Rc::new(cache), config.render_delay());
        Self {
            router: Router::new(&config),
            linker: ReferenceLinker::new(&config),
            config,
            edition,
            registry,
            renderer,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn edition(&self) -> SiteEdition {
        self.edition
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &ContentCache {
        self.renderer.cache()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn linker(&self) -> &ReferenceLinker {
        &self.linker
    }
}
