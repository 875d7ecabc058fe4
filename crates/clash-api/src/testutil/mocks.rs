//! Mock implementations for testing
//!
//! Re-exports the HTTP mock for convenient access in tests.

pub use crate::http::mock::MockHttpClient;
