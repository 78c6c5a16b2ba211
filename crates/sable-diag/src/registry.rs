use std::sync::OnceLock;

use sable_error::{ensure_invariant, Error, ErrorInfo, ErrorInfoList, ErrorKind};

use crate::sqlstate::ClassMap;

/// Immutable lookup state for diagnostics translation: the SQLSTATE class
/// table plus the payload field identifiers.
///
/// Built once and passed by reference into the translator instead of
/// living as ambient global state; [`init`] installs a process-wide
/// instance for callers that want the write-once handle.
#[derive(Debug, Clone)]
pub struct Registry {
    classes: ClassMap,
}

impl Registry {
    /// Registry with the standard class table.
    pub fn new() -> Self {
        Self::with_classes(ClassMap::standard())
    }

    /// Registry with a caller-supplied class table (vendor classes, test
    /// isolation).
    pub fn with_classes(classes: ClassMap) -> Self {
        verify_kind_wiring();
        Self { classes }
    }

    pub fn classes(&self) -> &ClassMap {
        &self.classes
    }

    /// Ordered identifiers of the seven payload fields, registered here so
    /// payload construction and introspection address them symbolically.
    pub fn info_fields(&self) -> &'static [&'static str] {
        &ErrorInfo::FIELDS
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// Each of the ten kinds must be constructible and report itself back;
// broken wiring here is a defect in this crate, not a database condition.
fn verify_kind_wiring() {
    for kind in ErrorKind::ALL {
        let err = Error::with_kind(kind, ErrorInfoList::new());
        ensure_invariant!(err.kind() == kind);
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Installs the process-wide registry and returns its handle.
///
/// Idempotent: the first call builds the registry with the standard class
/// table; every later call returns the same handle unchanged. The
/// `OnceLock` synchronizes initialization, so concurrent first calls
/// observe one fully-built registry and readers never see a partial one.
pub fn init() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        tracing::debug!("installing process-wide diagnostics registry");
        Registry::new()
    })
}
