//! Roulette Wheel Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[APP] Mounting roulette wheel".into());
    mount_to_body(App);
}
