//! Hash routing.
//!
//! The URL fragment is the only routing input. It is never validated here:
//! an unknown page id flows through to the renderer, which shows not-found.

use crate::config::SiteConfig;
use crate::pages::DEFAULT_PAGE;

/// What a hash change asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Render this page id
    Page(String),
    /// Scroll to this element id in the current content, without rendering
    Reference(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    default_page: String,
    reference_prefix: String,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE.to_string(),
            reference_prefix: "ref".to_string(),
        }
    }
}

impl Router {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            default_page: config.default_page.clone(),
            reference_prefix: config.reference_prefix.clone(),
        }
    }

    /// Page id for a `location.hash` value (with or without its leading `#`).
    pub fn current_page(&self, hash: &str) -> String {
        let fragment = strip_marker(hash);
        if fragment.is_empty() {
            self.default_page.clone()
        } else {
            fragment.to_string()
        }
    }

    pub fn route(&self, hash: &str) -> Route {
        let fragment = strip_marker(hash);
        if !self.reference_prefix.is_empty() && fragment.starts_with(&self.reference_prefix) {
            Route::Reference(fragment.to_string())
        } else {
            Route::Page(self.current_page(hash))
        }
    }
}

fn strip_marker(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_default_page() {
        let router = Router::default();
        assert_eq!(router.current_page(""), "home");
        assert_eq!(router.current_page("#"), "home");
    }

    #[test]
    fn test_hash_passes_through_unvalidated() {
        let router = Router::default();
        assert_eq!(router.current_page("#task2"), "task2");
        assert_eq!(router.current_page("task2"), "task2");
        assert_eq!(router.current_page("#no-such-page"), "no-such-page");
        assert_eq!(router.current_page("##double"), "#double");
    }

    #[test]
    fn test_reference_route() {
        let router = Router::default();
        assert_eq!(router.route("#ref7"), Route::Reference("ref7".to_string()));
        assert_eq!(router.route("#task1"), Route::Page("task1".to_string()));
        assert_eq!(router.route(""), Route::Page("home".to_string()));
    }

    #[test]
    fn test_custom_config() {
        let config = SiteConfig {
            default_page: "task1".to_string(),
            reference_prefix: "cite-".to_string(),
            ..SiteConfig::default()
        };
        let router = Router::new(&config);
        assert_eq!(router.current_page(""), "task1");
        assert_eq!(router.route("#cite-3"), Route::Reference("cite-3".to_string()));
        assert_eq!(router.route("#ref7"), Route::Page("ref7".to_string()));
    }
}
