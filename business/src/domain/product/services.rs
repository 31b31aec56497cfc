use crate::domain::errors::TransportError;

use super::use_cases::create::CreateProductParams;
use super::value_objects::MutationKind;

/// Presentation-side form holding a product draft.
///
/// Validation rules belong to the form; the coordinator only reads the
/// validity signal, takes the value and asks for a reset after a successful
/// create.
pub trait ProductForm: Send + Sync {
    fn is_valid(&self) -> bool;
    fn value(&self) -> CreateProductParams;
    fn reset(&self);
}

/// Service port notified when a create or delete finishes.
///
/// Implementations turn these into user-facing messages.
pub trait MutationNotifier: Send + Sync {
    fn on_mutation_success(&self, kind: MutationKind);
    fn on_mutation_failure(&self, kind: MutationKind, error: &TransportError);
}
