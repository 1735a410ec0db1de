//! Kakondo Site Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logger;
mod pages;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    let config = commands::load_site_config();
    mount_to_body(move || view! { <App config=config/> });
}
