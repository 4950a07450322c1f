pub mod content;
pub mod motion;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::run;
