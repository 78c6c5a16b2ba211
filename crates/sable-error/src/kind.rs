use std::fmt;

/// Semantic category of a raised error.
///
/// Mirrors the standard database-client taxonomy: `DatabaseError` is the
/// parent of the six engine-reported kinds, `Error` is the root of the
/// error side, and `Warning` is a root-level non-fatal sibling. The kind
/// tells a caller *how* to react; the attached payload tells it *why*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    Error,
    InterfaceError,
    DatabaseError,
    DataError,
    OperationalError,
    IntegrityError,
    InternalError,
    ProgrammingError,
    NotSupportedError,
    Warning,
}

impl ErrorKind {
    /// All ten kinds, in declaration order.
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::Error,
        ErrorKind::InterfaceError,
        ErrorKind::DatabaseError,
        ErrorKind::DataError,
        ErrorKind::OperationalError,
        ErrorKind::IntegrityError,
        ErrorKind::InternalError,
        ErrorKind::ProgrammingError,
        ErrorKind::NotSupportedError,
        ErrorKind::Warning,
    ];

    /// The kind this one refines, or `None` for the two roots.
    pub fn parent(self) -> Option<ErrorKind> {
        use ErrorKind::*;
        match self {
            Error | Warning => None,
            InterfaceError | DatabaseError => Some(Error),
            DataError | OperationalError | IntegrityError | InternalError
            | ProgrammingError | NotSupportedError => Some(DatabaseError),
        }
    }

    /// Strict ancestor test: `self` is a proper ancestor of `other`.
    ///
    /// A kind is never its own ancestor. Classification uses this to
    /// decide whether a table lookup genuinely refines a caller-supplied
    /// kind or would replace unrelated information.
    pub fn is_ancestor_of(self, other: ErrorKind) -> bool {
        let mut cur = other.parent();
        while let Some(kind) = cur {
            if kind == self {
                return true;
            }
            cur = kind.parent();
        }
        false
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::InterfaceError => "InterfaceError",
            ErrorKind::DatabaseError => "DatabaseError",
            ErrorKind::DataError => "DataError",
            ErrorKind::OperationalError => "OperationalError",
            ErrorKind::IntegrityError => "IntegrityError",
            ErrorKind::InternalError => "InternalError",
            ErrorKind::ProgrammingError => "ProgrammingError",
            ErrorKind::NotSupportedError => "NotSupportedError",
            ErrorKind::Warning => "Warning",
        }
    }

    pub fn severity(self) -> crate::Severity {
        match self {
            ErrorKind::Warning => crate::Severity::Warning,
            ErrorKind::InternalError => crate::Severity::Fatal,
            _ => crate::Severity::Error,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
