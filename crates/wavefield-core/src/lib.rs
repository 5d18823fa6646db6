//! Pointer-reactive wave field engine.
//!
//! Platform-free: the web frontend owns the canvas, input capture and frame
//! scheduling, and feeds this crate plain numbers.

pub mod clock;
pub mod config;
pub mod constants;
pub mod draw;
pub mod engine;
pub mod field;
pub mod line;
pub mod pointer;
pub mod sampler;

pub use clock::*;
pub use config::*;
pub use draw::*;
pub use engine::*;
pub use field::*;
pub use line::*;
pub use pointer::*;
pub use sampler::*;
