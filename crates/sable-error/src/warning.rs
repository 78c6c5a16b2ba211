use crate::ErrorInfoList;

/// Non-fatal diagnostic category.
///
/// Never derived from the SQLSTATE table: a `Warning` is only ever raised
/// by a caller that observed a non-fatal condition and chose to surface
/// it. Callers may inspect it and continue the session.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Warning:{0}")]
pub struct Warning(pub ErrorInfoList);

impl Warning {
    pub fn info(&self) -> &ErrorInfoList {
        &self.0
    }
}
