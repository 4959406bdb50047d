//! Service Ports
//!
//! Abstract interfaces for services outside the domain.

mod owner_gate;

pub use owner_gate::*;
