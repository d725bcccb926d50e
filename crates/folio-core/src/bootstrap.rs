//! Startup content load.
//!
//! One retrieval per registered page, all in flight at once, joined before the
//! cache is built. The site is "ready" exactly when this future resolves.

use futures::future::join_all;

use crate::cache::ContentCache;
use crate::pages::PageRegistry;
use crate::source::ContentSource;

/// Fetch every registered page and build the cache.
///
/// Never fails: a page whose fetch errors, or that has no source in this
/// edition, is cached as an empty string.
pub async fn load_content<S: ContentSource>(registry: &PageRegistry, source: &S) -> ContentCache {
    let fetches = registry.iter().map(|entry| async move {
        let html = match entry.source.as_deref() {
            None => {
                tracing::debug!(page = %entry.name, "No source for page in this edition");
                String::new()
            }
            Some(path) => match source.fetch(path).await {
                Ok(html) => {
                    tracing::debug!(page = %entry.name, path, bytes = html.len(), "Loaded page");
                    html
                }
                Err(e) => {
                    tracing::warn!(
                        page = %entry.name,
                        path,
                        error = %e,
                        "Page unavailable, will render as not found"
                    );
                    String::new()
                }
            },
        };
        (entry.name.clone(), html)
    });

    let cache = ContentCache::from_pages(join_all(fetches).await);
    tracing::info!(
        pages = cache.len(),
        loaded = cache.loaded_count(),
        "Content cache ready"
    );
    cache
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::SiteEdition;
    use crate::source::MemorySource;

    #[tokio::test]
    async fn test_every_page_has_an_entry() {
        let registry = PageRegistry::for_edition(SiteEdition::Standard);
        let source = MemorySource::new().with_file("Home.html", "<h1>Home</h1>");

        let cache = load_content(&registry, &source).await;

        assert_eq!(cache.len(), registry.len());
        for entry in registry.iter() {
            assert!(cache.contains(&entry.name), "missing entry for {}", entry.name);
        }
        assert_eq!(cache.get("home"), Some("<h1>Home</h1>"));
        assert_eq!(cache.get("task1"), Some(""));
    }

    #[tokio::test]
    async fn test_page_without_source_is_not_fetched() {
        let registry = PageRegistry::for_edition(SiteEdition::Standard);
        // Even if a conclusion file exists, the standard edition never asks for it.
        let source = MemorySource::new().with_file("Conclusion.html", "<h1>Done</h1>");

        let cache = load_content(&registry, &source).await;
        assert_eq!(cache.get("conclusion"), Some(""));
    }
}
