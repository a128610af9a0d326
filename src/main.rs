//! Bounce Snake entry point
//!
//! Native builds run the terminal frontend; wasm32 builds start the canvas
//! frontend from `wasm_main`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    bounce_snake::platform::web::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_snake::Settings;
    use bounce_snake::platform::terminal;

    env_logger::init();
    log::info!("Bounce Snake (terminal) starting...");

    let settings = Settings::load();
    if let Err(e) = terminal::run(&settings) {
        log::error!("Terminal error: {e}");
        eprintln!("bounce-snake: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
