//! Browser entry point: installs the delegated click listener on `document`.

mod dom;
mod listener;
mod logger;

use anyhow::{Context, Result};
use wasm_bindgen::prelude::*;

use crate::config::{load_config, RowActionsConfig};

pub use dom::WebPage;

/// Element whose text holds the TOML configuration, if the page provides one.
pub const CONFIG_ELEMENT_ID: &str = "row-actions-config";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init();

    boot().map_err(|error| JsValue::from_str(&format!("{error:#}")))
}

fn boot() -> Result<()> {
    let window = web_sys::window().context("window is unavailable")?;
    let document = window.document().context("document is unavailable")?;

    if document.ready_state() == "loading" {
        listener::install_after_load(&document)
    } else {
        listener::install(read_config(&document))
    }
}

fn read_config(document: &web_sys::Document) -> RowActionsConfig {
    let source = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match load_config(source.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            log::warn!("{error}; falling back to defaults");
            RowActionsConfig::default()
        }
    }
}
