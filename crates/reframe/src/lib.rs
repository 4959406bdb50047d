//! Reframe Domain Library
//!
//! Core domain types and interfaces for the Reframe reflective journal.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (UserRecord, GratitudeEntry, Demographics)
//!   - `value_objects/`: Immutable value types (Gender, ConsentChoice, SeverityTier)
//!   - `services/`: Pure domain services (distortion analyzer, streak updater)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (owner gate)
//!
//! # Usage
//!
//! ```rust,ignore
//! use reframe::domain::{analyze, UserRecord};
//! use reframe::ports::UserRecordRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    analyze, check_in, ConsentChoice, Demographics, Distortion, DistortionAnalysis,
    DomainError, Gender, GratitudeEntry, SeverityTier, StreakUpdate, UserRecord,
    DISTORTION_TABLE, RECENT_GRATITUDE_LIMIT,
};
pub use ports::{OwnerGate, UserRecordRepository};
