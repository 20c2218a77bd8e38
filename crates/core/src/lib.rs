//! Souq Core - Shared types library.
//!
//! This crate provides common types used across the Souq console
//! components:
//! - `admin` - Internal administration console for the platform
//! - `integration-tests` - End-to-end test suites
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
