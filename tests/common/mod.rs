//! Common test utilities and helpers
//!
//! Shared fixtures, recording fakes and assertions for the integration tests.
#![allow(dead_code)]

pub mod assertion_helpers;
pub mod mock_services;
pub mod test_fixtures;
