//! Complaint Desk Frontend Entry Point

mod models;
mod error;
mod validation;
mod config;
mod api;
mod browser;
mod html;
mod page;
mod flow;
mod context;
mod store;
mod toast;
mod components;
mod app;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_warning) = ClientConfig::from_document();
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
    }
    if let Some(warning) = config_warning {
        log::warn!("[APP] {}", warning);
    }

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => mount_to(root, move || view! { <App config=config /> }).forget(),
        None => mount_to_body(move || view! { <App config=config /> }),
    }
}
