//! Test utilities for the clash-api crate
//!
//! This module provides JSON fixtures and mocks for testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
