//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by a presentation layer into the use cases
//! - Outbound: Called by use cases into persistence

pub mod inbound;
pub mod outbound;

pub use inbound::UseCase;
pub use outbound::{CategoryGateway, GenreGateway};
