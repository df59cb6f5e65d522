//! Integration test suite modules.

mod session;
