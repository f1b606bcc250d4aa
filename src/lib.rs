//! Gardenist - garden catalogs, search and a task dashboard
//!
//! This library provides the view layer of a personal gardening manager:
//! it picks the active catalog, filters it by a live search term, resolves
//! the selected item, and aggregates calendar tasks and recently viewed
//! items for the home dashboard. A small CLI shell drives it from a JSON
//! garden snapshot.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Garden domain types
//! * [`storage`] - Snapshot loading and validation
//! * [`ui`] - State, derivations and text rendering
//! * [`utils`] - Utility functions and helpers

/// Command-line shell
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Garden catalogs, calendar tasks and view history
pub mod entities;

/// Icon definitions for visual representation
pub mod icons;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Garden snapshot loading
pub mod storage;

/// View state and derivations
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use entities::{CalendarTask, Collections, ItemRef, ModuleId, RecentView};
