//! In-memory content cache, populated once by [`crate::bootstrap`].

use std::collections::HashMap;

use crate::pages::NOT_FOUND_HTML;

/// What the renderer will show for a page id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Cached fragment text (never empty)
    Page(&'a str),
    /// Unknown page, or a page whose fetch failed or had no source
    NotFound,
}

impl<'a> Resolved<'a> {
    pub fn html(&self) -> &'a str {
        match self {
            Resolved::Page(html) => html,
            Resolved::NotFound => NOT_FOUND_HTML,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolved::NotFound)
    }
}

/// Page name → fragment text. Empty text means "not available".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCache {
    pages: HashMap<String, String>,
}

impl ContentCache {
    pub fn from_pages(pages: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
        }
    }

    /// Raw cache entry, empty string included.
    pub fn get(&self, page: &str) -> Option<&str> {
        self.pages.get(page).map(String::as_str)
    }

    pub fn resolve(&self, page: &str) -> Resolved<'_> {
        match self.get(page) {
            Some(html) if !html.is_empty() => Resolved::Page(html),
            _ => Resolved::NotFound,
        }
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages with non-empty content.
    pub fn loaded_count(&self) -> usize {
        self.pages.values().filter(|html| !html.is_empty()).count()
    }
}
