//! Site configuration loading

use kakondo_core::SiteConfig;

/// Element holding the JSON override in `index.html`
const CONFIG_ELEMENT_ID: &str = "site-config";

fn embedded_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}

/// Read the embedded override, falling back to defaults
pub fn load_site_config() -> SiteConfig {
    let Some(json) = embedded_config() else {
        log::warn!("No #{} element, using default site config", CONFIG_ELEMENT_ID);
        return SiteConfig::default();
    };
    if json.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded site config for {}", config.organization);
            config
        }
        Err(e) => {
            log::warn!("{}, using defaults", e);
            SiteConfig::default()
        }
    }
}
