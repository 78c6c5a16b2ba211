//! A policy for classifying and emitting errors.
//!
//! Library code never logs or prints directly; it returns [`crate::Result`]
//! and lets the application install an `ErrorPolicy` to decide how to
//! present or route failures. Classification is coarse-grained via
//! [`Severity`]; emission can be tracing logs, a UI event bus, or custom
//! telemetry.

use crate::{Error, Severity};

pub trait ErrorPolicy: Send + Sync {
    /// Classify the error's severity.
    fn classify(&self, error: &Error) -> Severity;

    /// Emit the error according to the policy (log, route, count, ...).
    fn emit(&self, error: &Error);
}

/// A no-operation policy that does nothing.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn classify(&self, error: &Error) -> Severity {
        error.severity()
    }

    fn emit(&self, _error: &Error) {
        // Intentionally do nothing
    }
}

/// A policy that uses the error's default severity and emits via tracing.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn classify(&self, error: &Error) -> Severity {
        error.severity()
    }

    fn emit(&self, error: &Error) {
        use tracing::{event, Level};

        match error.severity() {
            Severity::Warning => event!(Level::WARN, kind = %error.kind(), error = %error),
            Severity::Error | Severity::Fatal => {
                event!(Level::ERROR, kind = %error.kind(), error = %error)
            }
        }
    }
}

/// A composite policy that delegates to multiple policies.
///
/// `classify` returns the maximum severity among inner policies (the
/// error's own severity when empty); `emit` delegates to all inner
/// policies in insertion order.
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn push(mut self, policy: impl ErrorPolicy + 'static) -> Self {
        self.policies.push(Box::new(policy));
        self
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn classify(&self, error: &Error) -> Severity {
        self.policies
            .iter()
            .map(|p| p.classify(error))
            .max()
            .unwrap_or_else(|| error.severity())
    }

    fn emit(&self, error: &Error) {
        for policy in &self.policies {
            policy.emit(error);
        }
    }
}
