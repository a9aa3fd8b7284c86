mod utils;

pub mod animation;
pub mod backdrop;
pub mod color;
pub mod config;
pub mod field;
pub mod listener;
pub mod particle;
pub mod surface;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animation::{Animation, FrameHandle, FrameScheduler, LoopState};
pub use backdrop::HeroBackdrop;
pub use color::Color;
pub use config::FieldConfig;
pub use field::{particle_count, ParticleField};
pub use particle::Particle;
pub use surface::{CanvasSurface, Surface, SurfaceError};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    // A second call finds the logger already installed
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

// Brackets a scope with console.time/timeEnd, shows up in the devtools timeline
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
