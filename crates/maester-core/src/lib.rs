//! Maester Core — shared types, identifiers, and errors.
//!
//! This crate provides the foundational types used across the maester
//! workspace. It has no HTTP or I/O dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Character identifiers and reference-URL parsing
//! - [`types`]: Houses, characters, and page selectors

#![forbid(unsafe_code)]

pub mod error;
pub mod ids;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ids::CharacterId;
pub use types::{Character, CharacterSummary, House, Page};
