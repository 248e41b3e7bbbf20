#![allow(warnings)]
//! Page Bar Frontend Entry Point

mod models;
mod pages;
mod ids;
mod seed;
mod store;
mod prompt;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&e.into());
    }
    mount_to_body(App);
}
