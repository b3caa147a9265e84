//! Client configuration.
//!
//! Defaults are embedded in `contracts`; a deployment can override them with
//! `<meta name="asset-registry-config" content="...toml...">` in `index.html`.

use contracts::shared::config::ClientConfig;
use once_cell::sync::OnceCell;
use wasm_bindgen::JsCast;

const META_NAME: &str = "asset-registry-config";

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

pub fn app_config() -> &'static ClientConfig {
    CONFIG.get_or_init(load)
}

fn load() -> ClientConfig {
    match meta_override() {
        Some(source) => match ClientConfig::from_toml(&source) {
            Ok(config) => {
                log::info!("Using configuration from <meta name=\"{}\">", META_NAME);
                config
            }
            Err(e) => {
                log::warn!("Invalid configuration override, using defaults: {}", e);
                ClientConfig::default_config()
            }
        },
        None => ClientConfig::default_config(),
    }
}

fn meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", META_NAME))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

pub fn page_size() -> usize {
    app_config().list.page_size
}
