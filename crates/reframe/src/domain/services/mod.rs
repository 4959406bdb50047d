//! Domain Services
//!
//! Stateless domain logic operating on entities and plain text.

mod distortion;
mod streak;

pub use distortion::*;
pub use streak::*;
