//! Integration test helpers for the Souq admin console.
//!
//! The tests in `tests/` drive a running console over HTTP. They are
//! `#[ignore]`-gated because they need:
//! - The console running (cargo run -p souq-admin)
//! - A reachable platform API (or the stub used in staging)
//!
//! Run with: cargo test -p souq-integration-tests -- --ignored

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the console (configurable via environment).
#[must_use]
pub fn console_base_url() -> String {
    std::env::var("SOUQ_ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// An HTTP client for the console.
///
/// # Panics
///
/// Panics if the client cannot be built (test environment only).
#[must_use]
pub fn console_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
