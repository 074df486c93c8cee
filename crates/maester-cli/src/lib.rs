//! # maester-cli
//!
//! Command-line front-end for the maester directory.
//!
//! This crate provides the two user-facing views:
//! - a paginated houses listing with each sworn member resolved to a
//!   character summary,
//! - a character detail view,
//!
//! plus configuration file handling (`config path` / `config init`).

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod render;

pub use config::MaesterConfig;
