mod components;
mod config;
mod model;
mod render;
mod state;
mod storage;
mod util;

use components::App;

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
}

fn main() {
    init_logging();
    log::info!("monkey brawler starting");
    yew::Renderer::<App>::new().render();
}
