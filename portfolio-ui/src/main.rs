mod app;
mod bridge;
mod dto;
mod logging;
mod theme;
mod viewport;

pub mod components {
    pub mod boot_screen;
    pub mod drive_burst;
    pub mod envelope;
    pub mod file_list;
    pub mod floating;
    pub mod icon;
    pub mod nav;
    pub mod scramble_text;
    pub mod sections;
    pub mod spotlight_card;
}

use components::file_list::FileList;
use leptos::*;
use portfolio_core::SiteConfig;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init_logging(logging::build_level()) {
        web_sys::console::warn_1(&err.into());
    }

    let config = SiteConfig::from_build_env();
    if let Err(err) = config.email.validate() {
        log::warn!("email delivery misconfigured: {err}");
    }

    // The asset listing page ships its own host element; everything else is
    // the portfolio itself.
    let listing_host = document()
        .get_element_by_id("file-list")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match listing_host {
        Some(host) => mount_to(host, move || {
            view! { <FileList manifest_url=config.manifest_url.clone() base=config.asset_base.clone() /> }
        }),
        None => mount_to_body(move || view! { <app::App config=config.clone() /> }),
    }
}
