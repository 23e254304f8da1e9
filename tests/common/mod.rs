//! Common test utilities and helpers
//!
//! - Mock board backend (wiremock)
//! - Assertion macros

#![allow(dead_code, unused_macros)]

#[macro_use]
pub mod assertions;
pub mod mock_server;

pub use mock_server::*;
