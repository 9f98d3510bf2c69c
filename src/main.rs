//! Todo Page Entry Point
//!
//! Reads page config, starts console logging, and binds the todo-list
//! handlers to the server-rendered document.

mod models;
mod error;
mod config;
mod logging;
mod api;
mod actions;
mod page;
mod context;
mod binder;

use any_spawner::Executor;

use config::PageConfig;

fn main() {
    console_error_panic_hook::set_once();
    // drives leptos spawn_local; no mount_to_body to do it for us
    let executor = Executor::init_wasm_bindgen();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        web_sys::console::error_1(&"todo-binder: no document, nothing to bind".into());
        return;
    };

    let (config, warnings) = PageConfig::from_document(&document);
    logging::init(config.log_level);
    for warning in warnings {
        log::warn!("{}", warning);
    }
    if let Err(err) = executor {
        log::warn!("async executor already set: {:?}", err);
    }

    if let Err(err) = binder::bind(document, config) {
        log::error!("failed to bind todo page handlers: {:?}", err);
    }
}
