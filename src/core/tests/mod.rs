//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Catalog name lookup tests
//! - Type tests (Keybinding equality and display)
//! - Table tests (totality, defaults seeding)
//! - Codec tests (encode, decode, legacy fallback)

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod types_tests;
