//! Shared drivers for the hash crate test suites.

pub mod hash;
