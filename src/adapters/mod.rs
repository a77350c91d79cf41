//! Infrastructure adapters. Implement outbound ports.
//!
//! Map infrastructure errors to StorageError.

pub mod persistence;
