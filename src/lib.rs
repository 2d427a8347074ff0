/// Tab Grouper - Chrome Extension that clusters same-origin tabs into groups
/// Built with Rust + WASM + Yew

pub mod background;
pub mod bridge;
pub mod index;
pub mod origin;
pub mod policy;
pub mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export origin extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_origin(url: &str) -> String {
    origin::extract_origin(url).unwrap_or_else(|| "invalid".to_string())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
