//! Aggregate root contract.

use crate::domain::validation::ValidationHandler;
use crate::domain::{DomainError, Identifier};

/// Unit of identity, invariants and persistence.
///
/// `validate` must report every violated invariant through the handler and
/// only stop early when the handler itself returns an error.
pub trait AggregateRoot {
    type Id: Identifier;

    /// Name used in not-found messages.
    const NAME: &'static str;

    fn id(&self) -> &Self::Id;

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError>;
}
