#![allow(warnings)]
//! Objects Dashboard Frontend Entry Point

mod api;
mod config;
mod constants;
mod convert;
mod filters;
mod formatters;
mod models;
mod pagination;
mod personnel;
mod search;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
