//! Controls that live outside routed content: theme toggle, floating logo,
//! scroll-to-top button, home link.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::theme::DARK_CLASS;
use folio_core::{FloatingLogo, ScrollToTop, SiteConfig, Theme, ThemeToggle};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::query;
use crate::storage::LocalPreferences;

const THEME_TOGGLE_ID: &str = "theme-toggle";
const SCROLL_TO_TOP_ID: &str = "scroll-to-top";
const HOME_LINK_ID: &str = "home-link";
const LOGO_SELECTOR: &str = ".floating-logo";
const FOOTER_SELECTOR: &str = ".gh-footer";
const VISIBLE_CLASS: &str = "visible";
/// Settle time after `load` before the logo is first positioned.
const LOGO_SETTLE_MS: u32 = 100;

/// Bind every ambient control. Each one is skipped if its elements are
/// missing.
pub fn bind(window: &Window, document: &Document, config: &SiteConfig) {
    bind_theme(document);
    bind_floating_logo(window, document, FloatingLogo::new(config));
    bind_scroll_to_top(window, document, ScrollToTop::new(config));
    bind_home_link(window, document);
}

fn apply_theme(document: &Document, theme: Theme) {
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

fn bind_theme(document: &Document) {
    let toggle = ThemeToggle::load(&LocalPreferences);
    apply_theme(document, toggle.current());

    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    let state = Cell::new(toggle);
    let document = document.clone();
    EventListener::new(&button, "click", move |_| {
        let mut toggle = state.get();
        if let Err(e) = toggle.toggle(&mut LocalPreferences) {
            tracing::warn!(error = %e, "Theme preference not saved");
        }
        state.set(toggle);
        apply_theme(&document, toggle.current());
        tracing::debug!(theme = %toggle.current(), "Theme toggled");
    })
    .forget();
}

fn bind_floating_logo(window: &Window, document: &Document, rule: FloatingLogo) {
    let logo = query(document, LOGO_SELECTOR);
    let footer = query(document, FOOTER_SELECTOR);
    let (Some(logo), Some(footer)) = (logo, footer) else {
        return;
    };
    let Ok(logo) = logo.dyn_into::<HtmlElement>() else {
        return;
    };

    let win = window.clone();
    let update: Rc<dyn Fn()> = Rc::new(move || {
        let viewport_height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        let footer_top = footer.get_bounding_client_rect().top();
        let bottom = rule.bottom_offset(viewport_height, footer_top);
        let _ = logo.style().set_property("bottom", &format!("{}px", bottom));
    });

    for event in ["scroll", "resize"] {
        let update = update.clone();
        EventListener::new(window, event, move |_| update()).forget();
    }

    let on_load = update.clone();
    EventListener::new(window, "load", move |_| {
        let update = on_load.clone();
        Timeout::new(LOGO_SETTLE_MS, move || update()).forget();
    })
    .forget();

    // The script may start after `load` already fired.
    update();
}

fn bind_scroll_to_top(window: &Window, document: &Document, rule: ScrollToTop) {
    let Some(button) = document.get_element_by_id(SCROLL_TO_TOP_ID) else {
        return;
    };

    let win = window.clone();
    let target = button.clone();
    EventListener::new(window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let _ = target
            .class_list()
            .toggle_with_force(VISIBLE_CLASS, rule.is_visible(scroll_y));
    })
    .forget();

    let win = window.clone();
    EventListener::new(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    })
    .forget();
}

fn bind_home_link(window: &Window, document: &Document) {
    let Some(link) = document.get_element_by_id(HOME_LINK_ID) else {
        return;
    };
    let win = window.clone();
    EventListener::new(&link, "click", move |_| {
        let _ = win.location().set_hash("home");
    })
    .forget();
}
