//! Test configuration constants for client setup.
//!
//! This module defines standard constant values used across all tests for
//! client configuration. These values are placeholders for testing purposes.

/// User agent string for test client requests.
///
/// Standard user agent format with contact information, used for all mock HTTP
/// requests during testing.
pub static TEST_USER_AGENT: &str = "lumidex-tests/1.0 (dev@example.com)";
