use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `ecom` target, tagged
/// with the area of the application that emitted them.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "ecom", component = self.component, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(target: "ecom", component = self.component, "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "ecom", component = self.component, "{message}");
    }

    fn debug(&self, message: &str) {
        debug!(target: "ecom", component = self.component, "{message}");
    }
}
