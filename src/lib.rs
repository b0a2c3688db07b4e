/// Prompt Relay - Chrome Extension for sending omnibox queries to ChatGPT
/// Built with Rust + WASM

pub mod background;
pub mod inject;
pub mod pending;
pub mod query;
pub mod tab_data;
pub mod target;

use wasm_bindgen::prelude::*;
use web_sys::console;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    console::log_1(&"Prompt Relay background ready".into());
}
