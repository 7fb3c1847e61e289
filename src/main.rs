#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod i18n;
mod routes;
mod services;
mod stores;
mod utils;

use config::AppConfig;
use i18n::Locale;
use stores::session::Session;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting wallet admin panel");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_context_provider(|| Session::browser(AppConfig::from_build_env()));
    use_context_provider(Locale::detect);

    use_hook(|| {
        let config = session.config();
        log::info!("API base: {:?}, token key: {}", config.api_base, config.token_key);
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
