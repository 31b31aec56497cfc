use business::domain::errors::TransportError;
use business::domain::product::services::MutationNotifier;
use business::domain::product::value_objects::MutationKind;

/// Prints mutation results to stdout.
pub struct ConsoleNotifier;

impl MutationNotifier for ConsoleNotifier {
    fn on_mutation_success(&self, kind: MutationKind) {
        println!("{}", success_message(kind));
    }

    fn on_mutation_failure(&self, kind: MutationKind, error: &TransportError) {
        println!("{}", failure_message(kind, error));
    }
}

pub fn success_message(kind: MutationKind) -> String {
    match kind {
        MutationKind::Create => "Product created".to_string(),
        MutationKind::Delete => "Product deleted".to_string(),
    }
}

pub fn failure_message(kind: MutationKind, error: &TransportError) -> String {
    let action = match kind {
        MutationKind::Create => "create",
        MutationKind::Delete => "delete",
    };
    match error {
        TransportError::Status(404) => format!("Could not {} product: it no longer exists", action),
        other => format!("Could not {} product ({})", action, other),
    }
}
