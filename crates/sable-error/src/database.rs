use crate::{ErrorInfoList, ErrorKind};

/// Conditions reported by the engine itself, refined by SQLSTATE class.
///
/// `General` is the bare `DatabaseError` kind, used when no class prefix
/// (or caller) narrows the condition further.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database error:{0}")]
    General(ErrorInfoList),

    /// Problems with the processed data: invalid values, truncation,
    /// division by zero.
    #[error("Data error:{0}")]
    Data(ErrorInfoList),

    /// Problems in the database's operation: lost connection, failed
    /// transaction processing, resource exhaustion.
    #[error("Operational error:{0}")]
    Operational(ErrorInfoList),

    #[error("Integrity constraint violation:{0}")]
    Integrity(ErrorInfoList),

    /// The engine reported an inconsistency in itself; retrying on the
    /// same session is unsafe.
    #[error("Internal error:{0}")]
    Internal(ErrorInfoList),

    /// Mistakes in the submitted SQL: syntax errors, access-rule
    /// violations, wrong statement usage.
    #[error("Programming error:{0}")]
    Programming(ErrorInfoList),

    #[error("Not supported:{0}")]
    NotSupported(ErrorInfoList),
}

impl DatabaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatabaseError::General(_) => ErrorKind::DatabaseError,
            DatabaseError::Data(_) => ErrorKind::DataError,
            DatabaseError::Operational(_) => ErrorKind::OperationalError,
            DatabaseError::Integrity(_) => ErrorKind::IntegrityError,
            DatabaseError::Internal(_) => ErrorKind::InternalError,
            DatabaseError::Programming(_) => ErrorKind::ProgrammingError,
            DatabaseError::NotSupported(_) => ErrorKind::NotSupportedError,
        }
    }

    pub fn info(&self) -> &ErrorInfoList {
        match self {
            DatabaseError::General(info)
            | DatabaseError::Data(info)
            | DatabaseError::Operational(info)
            | DatabaseError::Integrity(info)
            | DatabaseError::Internal(info)
            | DatabaseError::Programming(info)
            | DatabaseError::NotSupported(info) => info,
        }
    }
}
