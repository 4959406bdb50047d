//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod consent;
mod gender;
mod severity_tier;

pub use consent::*;
pub use gender::*;
pub use severity_tier::*;
