//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - UserRecord: Persisted streak and gratitude history
//! - GratitudeEntry: One dated gratitude note
//! - Demographics: Intake form answers, kept for the session only

mod demographics;
mod gratitude;
mod user_record;

pub use demographics::*;
pub use gratitude::*;
pub use user_record::*;
