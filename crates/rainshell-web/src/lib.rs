#![forbid(unsafe_code)]

//! WASM frontend for Rainshell.
//!
//! This crate is intentionally host-specific (web/WASM). It binds the
//! host-independent state in `rainshell-core` to the page:
//! - a `<canvas>` 2D context painted by an interval timer (digital rain),
//! - an output container and text input driving the simulated shell,
//! - a JS-facing `mount()` entry point returning a stoppable handle.

pub mod input;
pub mod options;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use options::MountOptions;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Rainshell, mount};

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct Rainshell;

#[cfg(not(target_arch = "wasm32"))]
impl Rainshell {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }

    pub fn stop(&mut self) {}
}
