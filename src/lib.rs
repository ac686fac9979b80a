//! Wasm backend for the portfolio site's ambient canvas background: a
//! drifting particle field joined by distance-faded proximity lines, plus a
//! fading cursor trail. The hosting page supplies a canvas element and calls
//! [`initialize`] then `new ParticleBackground(id).start()`.

mod utils;

pub mod color;
pub mod config;
pub mod field;
pub mod frame;
pub mod particle;
pub mod surface;
pub mod trail;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use crate::app::ParticleBackground;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}
