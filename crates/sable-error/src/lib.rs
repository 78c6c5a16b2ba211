//! Typed error taxonomy for the sable SQL client binding.
//!
//! Every failure surfaced by the driver is one of a closed set of kinds
//! ([`ErrorKind`]) carrying the engine's diagnostic records verbatim
//! ([`ErrorInfoList`]). Callers catch broadly by matching on
//! [`Error::Database`] or narrowly on a [`DatabaseError`] arm.
//!
//! Internal correctness contracts live in [`contract`]; they are not part
//! of the taxonomy and abort the current operation instead of returning.

pub mod contract;
mod database;
mod info;
mod kind;
pub mod policy;
#[cfg(feature = "serde")]
pub mod pretty;
mod result_ext;
mod severity;
mod warning;

// public exports
pub use contract::{ContractViolation, FailureKind};
pub use database::DatabaseError;
pub use info::{ErrorInfo, ErrorInfoList};
pub use kind::ErrorKind;
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
#[cfg(feature = "serde")]
pub use pretty::PrettyDebug;
pub use result_ext::ResultExt;
pub use severity::Severity;
pub use warning::Warning;

pub type Result<T> = std::result::Result<T, Error>;

/// Driver-side failure: the binding could not reach or drive the engine at
/// all, so no engine-reported condition is more specific than this.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Interface error:{0}")]
pub struct InterfaceError(pub ErrorInfoList);

impl InterfaceError {
    pub fn info(&self) -> &ErrorInfoList {
        &self.0
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Interface(#[from] InterfaceError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Warning(#[from] Warning),

    /// Root fallback when no more specific kind applies.
    #[error("Error:{0}")]
    General(ErrorInfoList),
}

impl Error {
    /// Constructs the error value for any of the ten kinds, attaching the
    /// given diagnostic payload.
    pub fn with_kind(kind: ErrorKind, info: ErrorInfoList) -> Self {
        match kind {
            ErrorKind::Error => Error::General(info),
            ErrorKind::InterfaceError => InterfaceError(info).into(),
            ErrorKind::DatabaseError => DatabaseError::General(info).into(),
            ErrorKind::DataError => DatabaseError::Data(info).into(),
            ErrorKind::OperationalError => DatabaseError::Operational(info).into(),
            ErrorKind::IntegrityError => DatabaseError::Integrity(info).into(),
            ErrorKind::InternalError => DatabaseError::Internal(info).into(),
            ErrorKind::ProgrammingError => DatabaseError::Programming(info).into(),
            ErrorKind::NotSupportedError => DatabaseError::NotSupported(info).into(),
            ErrorKind::Warning => Warning(info).into(),
        }
    }

    /// Builds an error of `kind` from a bare message, with no engine
    /// diagnostics. The payload is a single record whose other fields are
    /// defaulted.
    pub fn from_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        let record = ErrorInfo {
            message: message.into(),
            ..ErrorInfo::default()
        };
        Self::with_kind(kind, ErrorInfoList::from(record))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Interface(_) => ErrorKind::InterfaceError,
            Error::Database(db) => db.kind(),
            Error::Warning(_) => ErrorKind::Warning,
            Error::General(_) => ErrorKind::Error,
        }
    }

    /// The attached diagnostic payload, first record authoritative.
    pub fn info(&self) -> &ErrorInfoList {
        match self {
            Error::Interface(e) => e.info(),
            Error::Database(db) => db.info(),
            Error::Warning(w) => w.info(),
            Error::General(info) => info,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Error::Warning(_))
    }

    pub fn sql_code(&self) -> i32 {
        self.info().sql_code()
    }

    pub fn sql_state(&self) -> &str {
        self.info().first().map(|r| r.sql_state.as_str()).unwrap_or("")
    }

    pub fn class_origin(&self) -> &str {
        self.info().first().map(|r| r.class_origin.as_str()).unwrap_or("")
    }

    pub fn subclass_origin(&self) -> &str {
        self.info()
            .first()
            .map(|r| r.subclass_origin.as_str())
            .unwrap_or("")
    }

    pub fn message(&self) -> &str {
        self.info().first().map(|r| r.message.as_str()).unwrap_or("")
    }

    pub fn server_name(&self) -> &str {
        self.info().first().map(|r| r.server_name.as_str()).unwrap_or("")
    }

    pub fn connection_name(&self) -> &str {
        self.info()
            .first()
            .map(|r| r.connection_name.as_str())
            .unwrap_or("")
    }
}
