use flagdeck_console::config::AppConfig;
use flagdeck_console::{state, theme, update, views};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("flagdeck_console", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();
    log::info!("starting flagdeck console against {}", config.server_url);

    iced::application(state::State::title, update::update, views::view)
        .theme(theme::application_theme)
        .window_size(iced::Size::new(1280.0, 720.0))
        .antialiasing(true)
        .run_with(move || state::boot(config.clone()))
}
