//! Souq Admin library.
//!
//! This crate provides the console functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate contains HIGH PRIVILEGE access:
//! - Platform API service token (full marketplace management)
//!
//! Only deploy on VPN-protected infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod offers;
pub mod platform;
pub mod routes;
pub mod services;
pub mod state;
