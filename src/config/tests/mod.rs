//! Config module tests
//!
//! - Store tests (open, load, save, backups)
//! - Transaction tests (commit, rollback)

#[cfg(test)]
mod store_tests;
