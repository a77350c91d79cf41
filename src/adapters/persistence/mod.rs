//! Persistence adapters. Implement the gateway ports.

pub mod json_file;
pub mod memory;
pub mod state;

pub use json_file::JsonFileCatalog;
pub use memory::InMemoryCatalog;
