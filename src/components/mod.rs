pub mod app;
pub mod death_screen;
pub mod hud;
pub mod overlay;
pub mod pause_menu;
pub mod run_view;
pub mod settings_modal;
pub mod shop_modal;
pub mod start_menu;

pub use app::App;
