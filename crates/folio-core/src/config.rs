//! Site configuration.
//!
//! Every field has a default matching the stock portfolio shell, so an empty
//! JSON object (or no config at all) yields a working site.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;
use crate::pages::DEFAULT_PAGE;

/// Tunables for routing, rendering and the ambient controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page shown when the hash is empty
    pub default_page: String,
    /// Hash prefix that marks a reference scroll target instead of a page
    pub reference_prefix: String,
    /// Substring of the document path that selects the SSB edition. Empty
    /// selects it everywhere.
    pub edition_marker: String,
    /// Pause between showing the loader and swapping content
    pub render_delay_ms: u64,
    /// How long a focused reference keeps its highlight
    pub highlight_ms: u64,
    /// Vertical scroll after which the scroll-to-top button shows
    pub scroll_top_threshold: f64,
    /// Gap between the floating logo and the viewport bottom or footer
    pub logo_margin: f64,
    /// `tracing_subscriber::EnvFilter` directive for the shell's logger
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE.to_string(),
            reference_prefix: "ref".to_string(),
            edition_marker: "ssb.html".to_string(),
            render_delay_ms: 150,
            highlight_ms: 5000,
            scroll_top_threshold: 300.0,
            logo_margin: 18.0,
            log_filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn render_delay(&self) -> Duration {
        Duration::from_millis(self.render_delay_ms)
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}
