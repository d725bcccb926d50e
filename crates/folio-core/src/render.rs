//! Page rendering.
//!
//! A render is two steps around a short pause:
//!
//! ```text
//! begin(page)          loader on, content hidden, generation += 1
//!   … sleep(delay) …
//! finish(ticket)       stale ticket? drop it
//!                      swap content, loader off, content on
//!                      nav highlight, mount, scroll to top
//! ```
//!
//! Generations give "last navigation wins": a render whose ticket was
//! superseded during the pause never paints.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::cache::ContentCache;
use crate::pages::{PageRegistry, NAV_IDS};
use crate::view::View;

/// Non-blocking timer.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Handle for a render that has shown its loader and awaits its swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTicket {
    page: String,
    generation: u64,
}

impl RenderTicket {
    pub fn page(&self) -> &str {
        &self.page
    }
}

/// Outcome of a completed render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub page: String,
    pub not_found: bool,
    /// Navigation element marked active, if any
    pub active_nav: Option<String>,
}

pub struct Renderer {
    registry: Rc<PageRegistry>,
    cache: Rc<ContentCache>,
    delay: Duration,
    generation: Cell<u64>,
}

impl Renderer {
    pub fn new(registry: Rc<PageRegistry>, cache: Rc<ContentCache>, delay: Duration) -> Self {
        Self {
            registry,
            cache,
            delay,
            generation: Cell::new(0),
        }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Show the loading state and claim the newest generation.
    pub fn begin<V: View + ?Sized>(&self, view: &mut V, page: &str) -> RenderTicket {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        view.set_loader_visible(true);
        view.set_content_visible(false);

        tracing::debug!(page, generation, "Render started");
        RenderTicket {
            page: page.to_string(),
            generation,
        }
    }

    /// Paint the page unless a newer render has begun since `ticket`.
    pub fn finish<V: View + ?Sized>(&self, view: &mut V, ticket: RenderTicket) -> Option<Rendered> {
        if ticket.generation != self.generation.get() {
            tracing::debug!(
                page = %ticket.page,
                generation = ticket.generation,
                latest = self.generation.get(),
                "Dropping superseded render"
            );
            return None;
        }

        let page = ticket.page;
        let resolved = self.cache.resolve(&page);
        view.set_content(resolved.html());
        view.set_loader_visible(false);
        view.set_content_visible(true);

        for nav_id in NAV_IDS {
            view.set_nav_active(nav_id, false);
        }
        let active_nav = if resolved.is_not_found() {
            None
        } else {
            self.registry
                .nav_id(&page)
                .filter(|nav_id| view.set_nav_active(nav_id, true))
        };

        view.mount();
        view.scroll_to_top();

        if resolved.is_not_found() {
            tracing::info!(page = %page, "Rendered not-found page");
        } else {
            tracing::info!(page = %page, nav = ?active_nav, "Rendered page");
        }

        Some(Rendered {
            page,
            not_found: resolved.is_not_found(),
            active_nav,
        })
    }

    /// Full render with the configured pause between loader and swap.
    pub async fn render<V, C>(&self, view: &mut V, clock: &C, page: &str) -> Option<Rendered>
    where
        V: View + ?Sized,
        C: Clock,
    {
        let ticket = self.begin(view, page);
        clock.sleep(self.delay).await;
        self.finish(view, ticket)
    }
}
