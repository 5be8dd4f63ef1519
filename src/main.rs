#![windows_subsystem = "windows"]

mod app;
mod state;
mod task;
mod ui;

use iced::window;

use app::Checklist;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Checklist::title, Checklist::update, Checklist::view)
        .subscription(Checklist::subscription)
        .window(window::Settings {
            size: (1400.0, 700.0).into(),
            ..window::Settings::default()
        })
        .run_with(Checklist::new)
}
