mod app;
mod components;
mod context;
mod dom;
mod fetch;
mod logging;
mod storage;

use folio_core::SiteConfig;

/// Id of the optional `<script type="application/json">` block holding a
/// [`SiteConfig`].
const CONFIG_ELEMENT_ID: &str = "folio-config";

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Config is read before logging exists, so a parse error is reported
    // once the logger is up.
    let config_text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    let (config, config_error) = match config_text.as_deref().map(SiteConfig::from_json) {
        None => (SiteConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (SiteConfig::default(), Some(e)),
    };

    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring invalid {}, using defaults", CONFIG_ELEMENT_ID);
    }

    tracing::info!("Starting Folio");
    wasm_bindgen_futures::spawn_local(app::launch(config, window, document));
}
