//! Page registry: the fixed set of logical pages and where their fragments live.
//!
//! ## Editions
//!
//! The same shell script serves two portfolios. The document path decides
//! which set of fragment files is loaded:
//!
//! ```text
//! page        Standard        Ssb
//! ----------  --------------  --------------------
//! home        Home.html       SSB_Home.html
//! task1..4    TaskN.html      SSB_TaskN.html
//! conclusion  (none)          SSB_Conclusion.html
//! ```
//!
//! A page without a source is still registered. It is cached as empty and
//! therefore renders the not-found fragment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page shown when the URL has no fragment.
pub const DEFAULT_PAGE: &str = "home";

/// Navigation element ids, in menu order.
pub const NAV_IDS: [&str; 6] = ["navHome", "nav1", "nav2", "nav3", "nav4", "navConclusion"];

/// Built-in fragment for unknown or empty pages.
pub const NOT_FOUND_HTML: &str = r##"
    <div class="task-card" style="text-align: center;">
      <h1>404: Page Not Found</h1>
      <p>Sorry, the page you are looking for does not exist.</p>
      <a href="#home" class="pdf-button" style="background-color: var(--link-color);">Return to Home</a>
    </div>
"##;

const STANDARD_SOURCES: [(&str, Option<&str>); 6] = [
    ("home", Some("Home.html")),
    ("task1", Some("Task1.html")),
    ("task2", Some("Task2.html")),
    ("task3", Some("Task3.html")),
    ("task4", Some("Task4.html")),
    ("conclusion", None),
];

const SSB_SOURCES: [(&str, Option<&str>); 6] = [
    ("home", Some("SSB_Home.html")),
    ("task1", Some("SSB_Task1.html")),
    ("task2", Some("SSB_Task2.html")),
    ("task3", Some("SSB_Task3.html")),
    ("task4", Some("SSB_Task4.html")),
    ("conclusion", Some("SSB_Conclusion.html")),
];

/// Which portfolio the shell document belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteEdition {
    #[default]
    Standard,
    Ssb,
}

impl SiteEdition {
    /// Pick the edition from the document path. An empty marker matches
    /// every path.
    pub fn detect(pathname: &str, marker: &str) -> Self {
        if pathname.contains(marker) {
            SiteEdition::Ssb
        } else {
            SiteEdition::Standard
        }
    }

    fn sources(&self) -> &'static [(&'static str, Option<&'static str>); 6] {
        match self {
            SiteEdition::Standard => &STANDARD_SOURCES,
            SiteEdition::Ssb => &SSB_SOURCES,
        }
    }
}

impl fmt::Display for SiteEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteEdition::Standard => write!(f, "standard"),
            SiteEdition::Ssb => write!(f, "ssb"),
        }
    }
}

/// One registered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Logical page name (also the hash that routes to it)
    pub name: String,
    /// Relative path of the fragment, if this edition has one
    pub source: Option<String>,
}

/// Fixed mapping from logical page to content source.
///
/// Built once at load time and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
}

impl PageRegistry {
    pub fn for_edition(edition: SiteEdition) -> Self {
        let entries = edition
            .sources()
            .iter()
            .map(|(name, source)| PageEntry {
                name: (*name).to_string(),
                source: source.map(str::to_string),
            })
            .collect();
        Self { entries }
    }

    pub fn contains(&self, page: &str) -> bool {
        self.get(page).is_some()
    }

    pub fn get(&self, page: &str) -> Option<&PageEntry> {
        self.entries.iter().find(|entry| entry.name == page)
    }

    /// Entries in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Navigation element id for a registered page.
    ///
    /// `home` → `navHome`, `conclusion` → `navConclusion`, `taskN` → `navN`.
    pub fn nav_id(&self, page: &str) -> Option<String> {
        if !self.contains(page) {
            return None;
        }
        match page {
            "home" => Some("navHome".to_string()),
            "conclusion" => Some("navConclusion".to_string()),
            other => Some(format!("nav{}", other.replacen("task", "", 1))),
        }
    }
}
