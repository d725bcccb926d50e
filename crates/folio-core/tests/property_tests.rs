//! Property-based tests for routing, the lightbox, and the theme toggle.

use folio_core::{
    Gallery, GalleryLink, Lightbox, LightboxView, MemoryPreferences, MemoryView, PreferenceStore,
    Route, Router, ThemeToggle, THEME_KEY,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn gallery_strategy() -> impl Strategy<Value = Gallery> {
    prop::collection::vec("[a-z]{1,8}\\.png", 1..12).prop_map(|hrefs| {
        hrefs
            .into_iter()
            .map(GalleryLink::new)
            .collect::<Vec<_>>()
            .into()
    })
}

#[derive(Debug, Clone)]
enum Nav {
    Prev,
    Next,
    Key(&'static str),
}

fn nav_strategy() -> impl Strategy<Value = Vec<Nav>> {
    prop::collection::vec(
        prop_oneof![
            Just(Nav::Prev),
            Just(Nav::Next),
            Just(Nav::Key("ArrowLeft")),
            Just(Nav::Key("ArrowRight")),
            Just(Nav::Key("Tab")),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Page fragments never start with the reference prefix, so they route to themselves
    #[test]
    fn page_hash_routes_to_itself(page in "[a-qs-z][a-z0-9]{0,10}") {
        let router = Router::default();
        prop_assert_eq!(router.route(&format!("#{page}")), Route::Page(page));
    }

    /// Any reference hash routes to a scroll target, never a render
    #[test]
    fn reference_hash_never_renders(suffix in "[a-z0-9]{0,10}") {
        let router = Router::default();
        let id = format!("ref{suffix}");
        prop_assert_eq!(router.route(&format!("#{id}")), Route::Reference(id));
    }

    /// The lightbox index stays in bounds and the disabled flags match it
    #[test]
    fn lightbox_index_stays_in_bounds(
        (gallery, start) in gallery_strategy().prop_flat_map(|g| {
            let len = g.len();
            (Just(g), 0..len)
        }),
        moves in nav_strategy(),
    ) {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();
        prop_assert!(lightbox.open(&mut view, gallery.clone(), start));

        for mv in moves {
            let before = lightbox.index().unwrap();
            let moved = match mv {
                Nav::Prev => lightbox.prev(&mut view),
                Nav::Next => lightbox.next(&mut view),
                Nav::Key(key) => lightbox.handle_key(&mut view, key),
            };
            let after = lightbox.index().unwrap();

            prop_assert!(after < gallery.len());
            prop_assert_eq!(moved, before != after);

            let frame = view.lightbox_frame().unwrap();
            prop_assert_eq!(frame.index, after);
            prop_assert_eq!(&frame.src, &gallery[after].href);
            prop_assert_eq!(frame.prev_disabled, after == 0);
            prop_assert_eq!(frame.next_disabled, after == gallery.len() - 1);
        }
    }

    /// Next then prev returns to the starting image unless next was clamped
    #[test]
    fn next_then_prev_round_trips(
        (gallery, start) in gallery_strategy().prop_flat_map(|g| {
            let len = g.len();
            (Just(g), 0..len)
        }),
    ) {
        let mut view = MemoryView::new();
        let mut lightbox = Lightbox::new();
        lightbox.open(&mut view, gallery.clone(), start);

        if lightbox.next(&mut view) {
            prop_assert_eq!(lightbox.index(), Some(start + 1));
            prop_assert!(lightbox.prev(&mut view));
        } else {
            prop_assert_eq!(start, gallery.len() - 1);
        }
        prop_assert_eq!(lightbox.index(), Some(start));
    }

    /// Toggling the theme an even number of times restores the stored value
    #[test]
    fn even_toggles_restore_theme(start_dark in any::<bool>(), pairs in 1usize..6) {
        let mut store = MemoryPreferences::new();
        let original = if start_dark { "dark" } else { "light" };
        store.store(THEME_KEY, original).unwrap();

        let mut toggle = ThemeToggle::load(&store);
        for _ in 0..pairs * 2 {
            toggle.toggle(&mut store).unwrap();
        }

        let stored = store.load(THEME_KEY);
        prop_assert_eq!(stored.as_deref(), Some(original));
    }
}

/// Lightbox keys do nothing while the modal is closed
#[test]
fn keys_ignored_when_closed() {
    struct Panicking;
    impl LightboxView for Panicking {
        fn set_open(&mut self, _open: bool) {
            panic!("closed lightbox must not touch the view");
        }
        fn set_scroll_locked(&mut self, _locked: bool) {
            panic!("closed lightbox must not touch the view");
        }
        fn show_frame(&mut self, _frame: &folio_core::Frame) {
            panic!("closed lightbox must not touch the view");
        }
    }

    let mut lightbox = Lightbox::new();
    for key in ["ArrowLeft", "ArrowRight", "Escape"] {
        assert!(!lightbox.handle_key(&mut Panicking, key));
    }
}
