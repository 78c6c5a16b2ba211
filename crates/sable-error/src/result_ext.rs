use crate::{ErrorPolicy, Result, Severity};

/// Extension trait for `Result` enabling policy-driven emission without
/// contaminating core control-flow with side-effects.
///
/// Typical usage: at subsystem boundaries, call one of the helpers to emit
/// errors via the chosen [`ErrorPolicy`] while preserving the original
/// result for further handling.
pub trait ResultExt<T> {
    /// Emit any error using the policy and return the result unchanged.
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit only warning-severity errors.
    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit only error-severity errors.
    fn emit_error(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit only fatal-severity errors.
    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }

    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            if policy.classify(e) == Severity::Warning {
                policy.emit(e);
            }
        }
        self
    }

    fn emit_error(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            if policy.classify(e) == Severity::Error {
                policy.emit(e);
            }
        }
        self
    }

    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            if policy.classify(e) == Severity::Fatal {
                policy.emit(e);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorInfoList, ErrorKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        emitted: AtomicUsize,
    }

    impl ErrorPolicy for Counting {
        fn classify(&self, error: &Error) -> Severity {
            error.severity()
        }
        fn emit(&self, _error: &Error) {
            self.emitted.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn emission_filters_by_severity_and_preserves_the_result() {
        let policy = Counting::default();
        let failed: Result<()> =
            Err(Error::with_kind(ErrorKind::DataError, ErrorInfoList::new()));

        let back = failed.emit_warning(&policy);
        assert_eq!(policy.emitted.load(Ordering::Relaxed), 0);

        let back = back.emit_error(&policy);
        assert_eq!(policy.emitted.load(Ordering::Relaxed), 1);
        assert!(back.is_err());

        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.emit_event(&policy).ok(), Some(3));
        assert_eq!(policy.emitted.load(Ordering::Relaxed), 1);
    }
}
