use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target, so
/// `RUST_LOG=product_list=debug` isolates them.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_list", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_list", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_list", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_list", "{}", message);
    }
}
