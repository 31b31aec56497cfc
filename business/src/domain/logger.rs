/// Logging port used by use cases and the list coordinator.
///
/// Adapters live in the infrastructure layer; the domain only ever sees
/// preformatted messages.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
