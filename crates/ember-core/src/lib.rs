//! Platform-free particle and pointer-motion engines.
//!
//! Nothing in this crate touches the DOM or a canvas. Each engine exposes an
//! `advance` step that returns a borrowed snapshot, plus event-injection
//! methods; the web front-end owns scheduling, input wiring and painting.

pub mod buffer;
pub mod burst;
pub mod constants;
pub mod error;
pub mod interaction;
pub mod math;
pub mod palette;
pub mod random;
pub mod spring;
pub mod stage;
pub mod trail;

pub use buffer::*;
pub use burst::*;
pub use error::*;
pub use interaction::*;
pub use palette::*;
pub use random::*;
pub use spring::*;
pub use stage::*;
pub use trail::*;
