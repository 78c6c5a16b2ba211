//! Correctness (design-by-contract) support.
//!
//! [`ensure_invariant!`](crate::ensure_invariant) and
//! [`ensure_precondition!`](crate::ensure_precondition) guard internal
//! invariants and caller-supplied input requirements. A violated contract
//! is a programming defect, not a database condition: it aborts the
//! current operation by panicking with a [`ContractViolation`] and must
//! propagate verbatim to the nearest boundary that can abort safely.

use std::fmt;
use std::panic::panic_any;

/// Which flavor of contract failed. The two behave identically; the label
/// lets tooling and tests tell "internal bug" (`Assertion`) apart from
/// "caller misuse" (`Precondition`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Assertion,
    Precondition,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::Assertion => "Assertion",
            FailureKind::Precondition => "Precondition",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A violated contract, pinpointing the exact call site.
///
/// `expression` is the literal source text of the failed condition,
/// captured where the check was written, not recomputed later.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{failure} failed: {expression}, file {file}, line {line}")]
pub struct ContractViolation {
    pub failure: FailureKind,
    pub expression: &'static str,
    pub file: &'static str,
    pub line: u32,
}

fn violate(failure: FailureKind, expression: &'static str, file: &'static str, line: u32) -> ! {
    panic_any(ContractViolation {
        failure,
        expression,
        file,
        line,
    })
}

/// Verifies an internal invariant. No effect when `condition` holds;
/// otherwise panics with an `Assertion`-labelled [`ContractViolation`]
/// carrying the given call-site context. Prefer the
/// [`ensure_invariant!`](crate::ensure_invariant) macro, which captures
/// the context automatically.
pub fn assert_true(condition: bool, expression: &'static str, file: &'static str, line: u32) {
    if !condition {
        violate(FailureKind::Assertion, expression, file, line);
    }
}

/// Verifies a requirement on caller-supplied input. Identical to
/// [`assert_true`] except for the `Precondition` label.
pub fn check_precondition(condition: bool, expression: &'static str, file: &'static str, line: u32) {
    if !condition {
        violate(FailureKind::Precondition, expression, file, line);
    }
}

/// Checks an internal invariant, capturing the expression text and call
/// site automatically.
#[macro_export]
macro_rules! ensure_invariant {
    ($cond:expr) => {
        $crate::contract::assert_true($cond, stringify!($cond), file!(), line!())
    };
}

/// Checks a requirement on caller-supplied input, capturing the expression
/// text and call site automatically.
#[macro_export]
macro_rules! ensure_precondition {
    ($cond:expr) => {
        $crate::contract::check_precondition($cond, stringify!($cond), file!(), line!())
    };
}
