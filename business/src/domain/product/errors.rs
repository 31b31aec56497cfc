use super::value_objects::ProductId;
use crate::domain::errors::TransportError;

/// Reasons a create or delete did not complete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MutationError {
    #[error("mutation.invalid_form")]
    InvalidForm,
    #[error("mutation.in_progress")]
    MutationInProgress,
    #[error("mutation.unknown_product: {0}")]
    UnknownProduct(ProductId),
    #[error("{0}")]
    Transport(#[from] TransportError),
}
