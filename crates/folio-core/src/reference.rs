//! Reference links: in-content citations that point at another element on
//! the same rendered page.
//!
//! Hovering a link highlights its target. Clicking it (or navigating to a
//! reference hash) opens the card that hides the target, highlights it,
//! scrolls it into view, and hands back a [`Highlight`]. The caller passes
//! it to [`ReferenceLinker::expire`] to drop the highlight once its time is
//! up.

use std::time::Duration;

use crate::card::{self, CollapsibleCard};
use crate::config::SiteConfig;
use crate::render::Clock;

/// Class added to a highlighted reference target.
pub const HIGHLIGHT_CLASS: &str = "ref-highlight";
/// Selector for reference links inside content.
pub const REFERENCE_LINK_SELECTOR: &str = ".ref-link";

/// Target element id for a reference link's `href`.
pub fn reference_id(href: &str) -> String {
    href.replacen('#', "", 1)
}

/// Document operations the linker needs.
pub trait ReferenceDocument {
    type Card: CollapsibleCard;

    fn has_element(&self, id: &str) -> bool;
    /// Nearest collapsible card containing the element.
    fn enclosing_card(&self, id: &str) -> Option<Self::Card>;
    fn set_highlight(&mut self, id: &str, on: bool);
    /// Smooth scroll, element centred vertically.
    fn scroll_into_view(&mut self, id: &str);
}

/// A highlight that must be removed after `clear_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub id: String,
    pub clear_after: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLinker {
    highlight_duration: Duration,
}

impl Default for ReferenceLinker {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl ReferenceLinker {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            highlight_duration: config.highlight_duration(),
        }
    }

    pub fn highlight_duration(&self) -> Duration {
        self.highlight_duration
    }

    /// Mouse entering (`true`) or leaving (`false`) a reference link.
    pub fn hover<D: ReferenceDocument>(&self, doc: &mut D, href: &str, entering: bool) {
        let id = reference_id(href);
        if doc.has_element(&id) {
            doc.set_highlight(&id, entering);
        }
    }

    /// Bring a reference target into view.
    ///
    /// Returns `None` when the element is not in the current content; that is
    /// a silent no-op.
    pub fn focus<D: ReferenceDocument>(&self, doc: &mut D, id: &str) -> Option<Highlight> {
        if !doc.has_element(id) {
            tracing::debug!(id, "Reference target not in current content");
            return None;
        }

        if let Some(mut card) = doc.enclosing_card(id) {
            if card::expand(&mut card) {
                tracing::debug!(id, "Expanded card around reference");
            }
        }
        doc.set_highlight(id, true);
        doc.scroll_into_view(id);

        Some(Highlight {
            id: id.to_string(),
            clear_after: self.highlight_duration,
        })
    }

    /// Remove a highlight now. A target that has left the document is
    /// ignored.
    pub fn clear<D: ReferenceDocument>(&self, doc: &mut D, highlight: &Highlight) {
        if doc.has_element(&highlight.id) {
            doc.set_highlight(&highlight.id, false);
        }
    }

    /// Wait out `highlight.clear_after`, then [`clear`](Self::clear) it.
    pub async fn expire<D, C>(&self, doc: &mut D, clock: &C, highlight: Highlight)
    where
        D: ReferenceDocument,
        C: Clock,
    {
        clock.sleep(highlight.clear_after).await;
        self.clear(doc, &highlight);
        tracing::trace!(id = %highlight.id, "Reference highlight expired");
    }

    /// Click on a reference link. `Some` means default navigation must be
    /// suppressed.
    pub fn activate<D: ReferenceDocument>(&self, doc: &mut D, href: &str) -> Option<Highlight> {
        self.focus(doc, &reference_id(href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{MemoryView, View};

    #[test]
    fn test_reference_id_strips_first_marker() {
        assert_eq!(reference_id("#ref3"), "ref3");
        assert_eq!(reference_id("ref3"), "ref3");
        assert_eq!(reference_id(""), "");
    }

    #[test]
    fn test_hover_highlights_target() {
        let mut view = MemoryView::new();
        view.add_element("ref1");
        let linker = ReferenceLinker::default();

        linker.hover(&mut view, "#ref1", true);
        assert!(view.is_highlighted("ref1"));

        linker.hover(&mut view, "#ref1", false);
        assert!(!view.is_highlighted("ref1"));
    }

    #[test]
    fn test_focus_missing_target_is_noop() {
        let mut view = MemoryView::new();
        let linker = ReferenceLinker::default();

        assert_eq!(linker.focus(&mut view, "ref9"), None);
        assert!(view.scrolled_into_view().is_empty());
    }

    #[test]
    fn test_activate_returns_highlight() {
        let mut view = MemoryView::new();
        view.add_element("ref2");
        let linker = ReferenceLinker::default();

        let highlight = linker.activate(&mut view, "#ref2").unwrap();
        assert_eq!(highlight.id, "ref2");
        assert_eq!(highlight.clear_after, Duration::from_millis(5000));
        assert!(view.is_highlighted("ref2"));
        assert_eq!(view.scrolled_into_view(), ["ref2"]);
    }

    #[test]
    fn test_clear_removes_highlight() {
        let mut view = MemoryView::new();
        view.add_element("ref4");
        let linker = ReferenceLinker::default();

        let highlight = linker.focus(&mut view, "ref4").unwrap();
        linker.clear(&mut view, &highlight);
        assert!(!view.is_highlighted("ref4"));
    }

    #[test]
    fn test_clear_after_content_swap_is_noop() {
        let mut view = MemoryView::new();
        view.add_element("ref4");
        let linker = ReferenceLinker::default();

        let highlight = linker.focus(&mut view, "ref4").unwrap();
        view.set_content("<h1>Elsewhere</h1>");
        linker.clear(&mut view, &highlight);
        assert!(!view.has_element("ref4"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_waits_for_duration() {
        struct TokioClock;
        impl Clock for TokioClock {
            async fn sleep(&self, duration: Duration) {
                tokio::time::sleep(duration).await;
            }
        }

        let mut view = MemoryView::new();
        view.add_element("ref3");
        let linker = ReferenceLinker::default();
        let highlight = linker.focus(&mut view, "ref3").unwrap();

        let start = tokio::time::Instant::now();
        linker.expire(&mut view, &TokioClock, highlight).await;

        assert!(start.elapsed() >= Duration::from_millis(5000));
        assert!(!view.is_highlighted("ref3"));
    }
}
