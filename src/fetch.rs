//! Network content source and browser timer.

use std::time::Duration;

use folio_core::{Clock, ContentSource, FolioError, FolioResult};
use gloo::net::http::Request;

/// Fetches fragments relative to the shell document's URL.
pub struct HttpSource;

impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> FolioResult<String> {
        let network_error = |e: gloo::net::Error| FolioError::Network {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = Request::get(path).send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(FolioError::Fetch {
                path: path.to_string(),
                status: response.status(),
            });
        }
        response.text().await.map_err(network_error)
    }
}

/// `setTimeout`-backed sleep; never blocks the event loop.
pub struct BrowserClock;

impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        gloo::timers::future::sleep(duration).await;
    }
}
