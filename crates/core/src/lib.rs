//! # Slotbook Core
//!
//! Domain types and the booking engine for the slotbook appointment service.
//! This crate has no I/O: the timezone normalizer and the availability
//! calculator are pure so they can be exercised without a database or an
//! HTTP server.

/// Error taxonomy shared by every layer
pub mod errors;
/// Domain models and request/response types
pub mod models;
/// Availability calculator: candidate slot enumeration and overlap checks
pub mod slots;
/// Timezone normalization between local wall-clock times and UTC
pub mod timezone;
