//! Utility modules for the Gardenist application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Calendar-day parsing, normalization and relative formatting

pub mod datetime;
