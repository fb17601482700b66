mod catalog;
mod core;
mod geo;
mod localize;
mod location;
mod session;
mod store;
mod widget;

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    localize::localize();
    core::app::run()
}
