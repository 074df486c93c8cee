//! # maester-client
//!
//! Async Rust client for the public Ice and Fire REST API.
//!
//! This crate provides the three fetch operations the directory views
//! need:
//! - a fixed-size page of houses,
//! - a sworn-member reference resolved to a character summary,
//! - a full character record by id.
//!
//! The application is a pure API consumer: no writes, no persistence,
//! and no retry or backoff — failures surface as
//! [`maester_core::Error`] values for the view layer to render.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;

pub use client::{ApiClient, ClientOptions, DEFAULT_BASE_URL};
pub use maester_core::{Error, Result};
