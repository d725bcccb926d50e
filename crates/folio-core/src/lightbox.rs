//! Lightbox: modal image viewer over one gallery's links.
//!
//! ## States
//!
//! ```text
//! Closed ──open(gallery, i)──▶ Open { gallery, index }
//!   ▲                            │  prev / next (clamped, no wraparound)
//!   └──────── close ◀────────────┘
//! ```
//!
//! A session captures the clicked gallery and index; closing destroys it.

use std::rc::Rc;

/// Selector for gallery containers.
pub const GALLERY_SELECTOR: &str = ".screenshot-gallery, .refworks-gallery";

/// One image link inside a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryLink {
    /// Resolved link target (full-size image URL)
    pub href: String,
    /// Explicit `data-caption` attribute
    pub caption: Option<String>,
    /// Text of the `figcaption` in the link's enclosing `figure`
    pub figure_caption: Option<String>,
}

impl GalleryLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_figure_caption(mut self, caption: impl Into<String>) -> Self {
        self.figure_caption = Some(caption.into());
        self
    }

    /// `data-caption`, else the figure caption, else empty.
    pub fn caption_text(&self) -> &str {
        self.caption
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.figure_caption.as_deref().filter(|c| !c.is_empty()))
            .unwrap_or("")
    }
}

/// Ordered links of one gallery, scanned once per mount.
pub type Gallery = Rc<[GalleryLink]>;

/// Everything the modal shows for the current image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub src: String,
    pub caption: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Modal operations the lightbox drives.
pub trait LightboxView {
    fn set_open(&mut self, open: bool);
    /// Suppress body scrolling while the modal is up.
    fn set_scroll_locked(&mut self, locked: bool);
    fn show_frame(&mut self, frame: &Frame);
}

#[derive(Debug, Clone)]
struct Session {
    gallery: Gallery,
    index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    session: Option<Session>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.index)
    }

    pub fn frame(&self) -> Option<Frame> {
        let session = self.session.as_ref()?;
        let link = session.gallery.get(session.index)?;
        Some(Frame {
            index: session.index,
            src: link.href.clone(),
            caption: link.caption_text().to_string(),
            prev_disabled: session.index == 0,
            next_disabled: session.index + 1 == session.gallery.len(),
        })
    }

    /// Start a session on `gallery` at `index`.
    ///
    /// Refused (returns `false`) for an empty gallery or out-of-range index.
    pub fn open<V>(&mut self, view: &mut V, gallery: Gallery, index: usize) -> bool
    where
        V: LightboxView + ?Sized,
    {
        if index >= gallery.len() {
            tracing::debug!(index, len = gallery.len(), "Ignoring lightbox open outside gallery");
            return false;
        }
        self.session = Some(Session { gallery, index });
        view.set_open(true);
        view.set_scroll_locked(true);
        self.update(view);
        true
    }

    pub fn next<V: LightboxView + ?Sized>(&mut self, view: &mut V) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.index + 1 >= session.gallery.len() {
            return false;
        }
        session.index += 1;
        self.update(view);
        true
    }

    pub fn prev<V: LightboxView + ?Sized>(&mut self, view: &mut V) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.index == 0 {
            return false;
        }
        session.index -= 1;
        self.update(view);
        true
    }

    pub fn close<V: LightboxView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        view.set_open(false);
        view.set_scroll_locked(false);
        true
    }

    /// Keyboard navigation. Keys are ignored while closed.
    pub fn handle_key<V: LightboxView + ?Sized>(&mut self, view: &mut V, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "ArrowLeft" => self.prev(view),
            "ArrowRight" => self.next(view),
            "Escape" => self.close(view),
            _ => false,
        }
    }

    fn update<V: LightboxView + ?Sized>(&self, view: &mut V) {
        if let Some(frame) = self.frame() {
            view.show_frame(&frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemoryView;

    fn gallery(n: usize) -> Gallery {
        (0..n)
            .map(|i| GalleryLink::new(format!("img/{i}.png")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_caption_fallbacks() {
        let explicit = GalleryLink::new("a.png")
            .with_caption("Explicit")
            .with_figure_caption("Figure");
        assert_eq!(explicit.caption_text(), "Explicit");

        let figure = GalleryLink::new("a.png").with_figure_caption("Figure");
        assert_eq!(figure.caption_text(), "Figure");

        let blank = GalleryLink::new("a.png").with_caption("").with_figure_caption("Figure");
        assert_eq!(blank.caption_text(), "Figure");

        assert_eq!(GalleryLink::new("a.png").caption_text(), "");
    }

    #[test]
    fn test_open_shows_frame_and_locks_scroll() {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();

        assert!(lightbox.open(&mut view, gallery(3), 1));
        assert!(view.lightbox_open());
        assert!(view.scroll_locked());

        let frame = view.lightbox_frame().unwrap();
        assert_eq!(frame.src, "img/1.png");
        assert!(!frame.prev_disabled);
        assert!(!frame.next_disabled);
    }

    #[test]
    fn test_open_rejects_out_of_range() {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();

        assert!(!lightbox.open(&mut view, gallery(0), 0));
        assert!(!lightbox.open(&mut view, gallery(2), 2));
        assert!(!view.lightbox_open());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();
        lightbox.open(&mut view, gallery(2), 0);

        assert!(view.lightbox_frame().unwrap().prev_disabled);
        assert!(!lightbox.prev(&mut view));

        assert!(lightbox.next(&mut view));
        let frame = view.lightbox_frame().unwrap();
        assert_eq!(frame.index, 1);
        assert!(!frame.prev_disabled);
        assert!(frame.next_disabled);

        assert!(!lightbox.next(&mut view));
        assert_eq!(lightbox.index(), Some(1));
    }

    #[test]
    fn test_single_image_disables_both() {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();
        lightbox.open(&mut view, gallery(1), 0);

        let frame = view.lightbox_frame().unwrap();
        assert!(frame.prev_disabled);
        assert!(frame.next_disabled);
    }

    #[test]
    fn test_keys_only_while_open() {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();

        assert!(!lightbox.handle_key(&mut view, "Escape"));
        assert!(!lightbox.handle_key(&mut view, "ArrowRight"));

        lightbox.open(&mut view, gallery(3), 0);
        assert!(lightbox.handle_key(&mut view, "ArrowRight"));
        assert_eq!(lightbox.index(), Some(1));
        assert!(lightbox.handle_key(&mut view, "ArrowLeft"));
        assert_eq!(lightbox.index(), Some(0));
        assert!(!lightbox.handle_key(&mut view, "Enter"));

        assert!(lightbox.handle_key(&mut view, "Escape"));
        assert!(!lightbox.is_open());
        assert!(!view.lightbox_open());
        assert!(!view.scroll_locked());
    }

    #[test]
    fn test_reopen_resets_session() {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();

        lightbox.open(&mut view, gallery(4), 3);
        lightbox.close(&mut view);
        assert_eq!(lightbox.index(), None);
        assert!(!lightbox.close(&mut view));

        lightbox.open(&mut view, gallery(2), 0);
        assert_eq!(view.lightbox_frame().unwrap().src, "img/0.png");
    }
}
