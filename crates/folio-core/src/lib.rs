//! Folio Core Library
//!
//! Hash-routed portfolio site runtime, independent of any browser API.
//!
//! ## Overview
//!
//! A portfolio page is a single shell document. Its body is swapped between a
//! fixed set of HTML fragments ("logical pages") selected by the URL hash. The
//! browser shell supplies the DOM; this crate supplies everything else:
//!
//! - **Registry**: which pages exist and which file holds each one
//! - **Bootstrap**: concurrent fetch of every fragment, joined before first paint
//! - **Router**: hash → page id, or hash → reference scroll target
//! - **Renderer**: loader transition, content swap, navigation highlight, remount
//! - **Reference linker**, **collapsible cards**, **lightbox**, **theme**
//!
//! Every DOM effect goes through a small trait ([`View`], [`ReferenceDocument`],
//! [`LightboxView`], [`CollapsibleCard`], [`PreferenceStore`]) so the whole
//! flow runs natively against [`MemoryView`] in tests and in the CLI.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{MemoryView, Route, Site, SiteConfig, SiteEdition};
//!
//! let site = Site::bootstrap(SiteConfig::default(), SiteEdition::Standard, &source).await;
//! let mut view = MemoryView::with_shell();
//!
//! if let Route::Page(page) = site.router().route("#task2") {
//!     site.renderer().render(&mut view, &clock, &page).await;
//! }
//! assert!(view.is_nav_active("nav2"));
//! ```

pub mod ambient;
pub mod bootstrap;
pub mod cache;
pub mod card;
pub mod config;
pub mod error;
pub mod lightbox;
pub mod logging;
pub mod pages;
pub mod reference;
pub mod render;
pub mod router;
pub mod site;
pub mod source;
pub mod theme;
pub mod view;

// Re-exports
pub use ambient::{FloatingLogo, ScrollToTop};
pub use bootstrap::load_content;
pub use cache::{ContentCache, Resolved};
pub use card::{CollapsibleCard, COLLAPSED_GLYPH, EXPANDED_GLYPH};
pub use config::SiteConfig;
pub use error::{FolioError, FolioResult};
pub use lightbox::{Frame, Gallery, GalleryLink, Lightbox, LightboxView};
pub use pages::{PageEntry, PageRegistry, SiteEdition, DEFAULT_PAGE, NAV_IDS, NOT_FOUND_HTML};
pub use reference::{Highlight, ReferenceDocument, ReferenceLinker, HIGHLIGHT_CLASS};
pub use render::{Clock, RenderTicket, Rendered, Renderer};
pub use router::{Route, Router};
pub use site::Site;
pub use source::{ContentSource, MemorySource};
pub use theme::{MemoryPreferences, PreferenceStore, Theme, ThemeToggle, THEME_KEY};
pub use view::{MemoryCard, MemoryView, View};
