//! catalogo-admin: catalog administration core with Hexagonal Architecture.
//! Aggregates validate into a notification; use cases persist only clean state.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
