//! The view abstraction the renderer paints through, and an in-memory
//! implementation of every view trait.
//!
//! [`MemoryView`] stands in for the browser document: the CLI renders into it
//! to preview a hash, and the test suites assert against it.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

use crate::card::CollapsibleCard;
use crate::lightbox::{Frame, LightboxView};
use crate::pages::NAV_IDS;
use crate::reference::{ReferenceDocument, REFERENCE_LINK_SELECTOR};

/// Page-shell operations the renderer needs.
pub trait View {
    fn set_loader_visible(&mut self, visible: bool);
    fn set_content_visible(&mut self, visible: bool);
    /// Replace the content subtree.
    fn set_content(&mut self, html: &str);
    /// Toggle `active` on a navigation element. Returns `false` if it does
    /// not exist.
    fn set_nav_active(&mut self, nav_id: &str, active: bool) -> bool;
    fn scroll_to_top(&mut self);
    /// Register behaviour for the current content subtree, replacing the
    /// bindings of the previous one.
    fn mount(&mut self);
}

#[derive(Debug, Default)]
struct CardState {
    collapsed: bool,
    glyph: String,
    members: HashSet<String>,
}

/// Shared handle to a card inside a [`MemoryView`].
#[derive(Debug, Clone)]
pub struct MemoryCard(Rc<RefCell<CardState>>);

impl MemoryCard {
    pub fn glyph(&self) -> String {
        self.0.borrow().glyph.clone()
    }
}

impl CollapsibleCard for MemoryCard {
    fn is_collapsed(&self) -> bool {
        self.0.borrow().collapsed
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        self.0.borrow_mut().collapsed = collapsed;
    }

    fn set_glyph(&mut self, glyph: &str) {
        self.0.borrow_mut().glyph = glyph.to_string();
    }
}

#[derive(Debug, Default)]
pub struct MemoryView {
    content: String,
    loader_visible: bool,
    content_visible: bool,
    nav: Vec<(String, bool)>,
    elements: HashSet<String>,
    highlighted: BTreeSet<String>,
    scrolled_into_view: Vec<String>,
    cards: Vec<MemoryCard>,
    mounts: usize,
    live_bindings: usize,
    scroll_to_top: usize,
    lightbox_open: bool,
    scroll_locked: bool,
    frame: Option<Frame>,
}

impl MemoryView {
    /// A bare document with no navigation elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with the standard navigation bar.
    pub fn with_shell() -> Self {
        let mut view = Self::new();
        view.nav = NAV_IDS.iter().map(|id| (id.to_string(), false)).collect();
        view
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn loader_visible(&self) -> bool {
        self.loader_visible
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    /// Active navigation ids, in menu order.
    pub fn active_navs(&self) -> Vec<String> {
        self.nav
            .iter()
            .filter(|(_, active)| *active)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn is_nav_active(&self, nav_id: &str) -> bool {
        self.nav.iter().any(|(id, active)| id == nav_id && *active)
    }

    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    /// Reference links with listeners attached. Each mount detaches the
    /// previous set, so this tracks the last mounted content only.
    pub fn live_bindings(&self) -> usize {
        self.live_bindings
    }

    pub fn scroll_to_top_count(&self) -> usize {
        self.scroll_to_top
    }

    /// Add an element id to the current content.
    pub fn add_element(&mut self, id: impl Into<String>) {
        self.elements.insert(id.into());
    }

    /// Add a card to the current content wrapping the given element ids.
    pub fn add_card<I, S>(&mut self, collapsed: bool, members: I) -> MemoryCard
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: HashSet<String> = members.into_iter().map(Into::into).collect();
        self.elements.extend(members.iter().cloned());
        let glyph = if collapsed {
            crate::card::COLLAPSED_GLYPH
        } else {
            crate::card::EXPANDED_GLYPH
        };
        let card = MemoryCard(Rc::new(RefCell::new(CardState {
            collapsed,
            glyph: glyph.to_string(),
            members,
        })));
        self.cards.push(card.clone());
        card
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.contains(id)
    }

    pub fn scrolled_into_view(&self) -> &[String] {
        &self.scrolled_into_view
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn lightbox_frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }
}

impl View for MemoryView {
    fn set_loader_visible(&mut self, visible: bool) {
        self.loader_visible = visible;
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }

    fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
        self.elements = scan_ids(html);
        self.highlighted.clear();
        self.cards.clear();
    }

    fn set_nav_active(&mut self, nav_id: &str, active: bool) -> bool {
        match self.nav.iter_mut().find(|(id, _)| id == nav_id) {
            Some((_, flag)) => {
                *flag = active;
                true
            }
            None => false,
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_to_top += 1;
    }

    fn mount(&mut self) {
        self.mounts += 1;
        self.live_bindings = count_reference_links(&self.content);
    }
}

impl ReferenceDocument for MemoryView {
    type Card = MemoryCard;

    fn has_element(&self, id: &str) -> bool {
        MemoryView::has_element(self, id)
    }

    fn enclosing_card(&self, id: &str) -> Option<MemoryCard> {
        self.cards
            .iter()
            .find(|card| card.0.borrow().members.contains(id))
            .cloned()
    }

    fn set_highlight(&mut self, id: &str, on: bool) {
        if on {
            self.highlighted.insert(id.to_string());
        } else {
            self.highlighted.remove(id);
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scrolled_into_view.push(id.to_string());
    }
}

impl LightboxView for MemoryView {
    fn set_open(&mut self, open: bool) {
        self.lightbox_open = open;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn show_frame(&mut self, frame: &Frame) {
        self.frame = Some(frame.clone());
    }
}

/// Values of every `name="…"` / `name='…'` attribute in a fragment.
fn attribute_values<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let needle = format!("{name}=");
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(&needle) {
        let preceded_by_space = pos == 0
            || rest[..pos]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
        rest = &rest[pos + needle.len()..];
        let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            continue;
        };
        let value = &rest[1..];
        let Some(end) = value.find(quote) else {
            break;
        };
        if preceded_by_space {
            values.push(&value[..end]);
        }
        rest = &value[end + 1..];
    }
    values
}

fn scan_ids(html: &str) -> HashSet<String> {
    attribute_values(html, "id")
        .into_iter()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Elements carrying the reference link class.
fn count_reference_links(html: &str) -> usize {
    let class = REFERENCE_LINK_SELECTOR.trim_start_matches('.');
    attribute_values(html, "class")
        .into_iter()
        .filter(|classes| classes.split_whitespace().any(|c| c == class))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_ids() {
        let ids = scan_ids(
            r#"<p id="ref1">a</p><span data-id="x"></span><li id='ref2'></li><a id="">"#,
        );
        assert!(ids.contains("ref1"));
        assert!(ids.contains("ref2"));
        assert!(!ids.contains("x"));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_count_reference_links() {
        let html = r##"<a class="ref-link" href="#ref1">[1]</a>
            <a class='cite ref-link' href="#ref2">[2]</a>
            <a class="ref-links" href="#x">no</a>
            <a data-class="ref-link">no</a>"##;
        assert_eq!(count_reference_links(html), 2);
    }

    #[test]
    fn test_mount_replaces_previous_bindings() {
        let mut view = MemoryView::new();
        view.set_content(
            r##"<a class="ref-link" href="#ref1">1</a><a class="ref-link" href="#ref2">2</a>"##,
        );
        view.mount();
        assert_eq!(view.live_bindings(), 2);

        view.mount();
        view.mount();
        assert_eq!(view.live_bindings(), 2, "remounting must not stack bindings");

        view.set_content(r##"<a class="ref-link" href="#ref3">3</a>"##);
        assert_eq!(view.live_bindings(), 2, "old bindings live until the next mount");
        view.mount();
        assert_eq!(view.live_bindings(), 1);

        view.set_content("<h1>No links</h1>");
        view.mount();
        assert_eq!(view.live_bindings(), 0);
        assert_eq!(view.mount_count(), 5);
    }

    #[test]
    fn test_set_content_replaces_subtree() {
        let mut view = MemoryView::new();
        view.add_card(true, ["ref1"]);
        view.set_content(r#"<p id="ref5"></p>"#);

        assert!(view.has_element("ref5"));
        assert!(!view.has_element("ref1"));
        assert!(view.enclosing_card("ref1").is_none());
    }

    #[test]
    fn test_unknown_nav_reports_missing() {
        let mut view = MemoryView::with_shell();
        assert!(view.set_nav_active("nav3", true));
        assert!(!view.set_nav_active("nav404", true));
        assert_eq!(view.active_navs(), ["nav3"]);
    }
}
