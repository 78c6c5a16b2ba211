//! Diagnostics-to-error translation for the sable SQL client binding.
//!
//! After a failed operation, the database client exposes an ordered
//! sequence of loosely-typed diagnostic records. This crate pulls that
//! sequence through the narrow [`DiagnosticSource`] interface, lowers it
//! into the typed payload from `sable-error`, classifies the first record
//! by its SQLSTATE class prefix, and builds the error value of the
//! resolved kind. Exactly once per failure, with no loss of information.
//!
//! Classification state lives in an explicit, immutable [`Registry`]
//! (installed process-wide once via [`init`]) rather than ambient global
//! state, so initialization order and test isolation stay explicit.

mod registry;
mod source;
mod sqlstate;
mod translate;

pub use registry::{init, Registry};
pub use source::{DiagnosticSource, RawDiagnostic};
pub use sqlstate::{split_state, ClassMap};
pub use translate::{collect_info, error_from_diagnostics, fail_with_diagnostics, resolve_kind};
