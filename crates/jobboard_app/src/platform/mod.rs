mod app;
mod config;
mod effects;
mod logging;
mod notify;
mod persistence;
mod share;
mod ui;

pub use app::run_app;
