//! Structured, log-friendly pretty-print helpers.
//!
//! Gated behind the `serde` feature to avoid pulling serialization
//! dependencies into consumers that don't need them.

use serde::Serialize;

use crate::{Error, Severity};

/// Flattened view of an error for log pipelines that consume JSON: the
/// resolved kind, its severity, the authoritative (first) record's fields,
/// and how many records the payload holds in total.
#[derive(Debug, Serialize)]
pub struct ErrorFields<'a> {
    pub kind: &'static str,
    pub severity: Severity,
    pub sql_code: i32,
    pub sql_state: &'a str,
    pub message: &'a str,
    pub server_name: &'a str,
    pub connection_name: &'a str,
    pub records: usize,
}

/// Provide a structured view of an error for logging/UI.
pub trait PrettyDebug {
    fn pretty_fields(&self) -> ErrorFields<'_>;

    fn pretty_json(&self) -> Option<String> {
        serde_json::to_string_pretty(&self.pretty_fields()).ok()
    }
}

impl PrettyDebug for Error {
    fn pretty_fields(&self) -> ErrorFields<'_> {
        ErrorFields {
            kind: self.kind().name(),
            severity: self.severity(),
            sql_code: self.sql_code(),
            sql_state: self.sql_state(),
            message: self.message(),
            server_name: self.server_name(),
            connection_name: self.connection_name(),
            records: self.info().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorInfo, ErrorInfoList, ErrorKind};

    #[test]
    fn pretty_json_surfaces_kind_and_state() {
        let record = ErrorInfo {
            sql_code: -268,
            sql_state: "23000".into(),
            message: "unique constraint violated".into(),
            ..ErrorInfo::default()
        };
        let err = Error::with_kind(ErrorKind::IntegrityError, ErrorInfoList::from(record));
        let json = err.pretty_json().expect("serializable view");
        assert!(json.contains("\"kind\": \"IntegrityError\""));
        assert!(json.contains("\"sql_state\": \"23000\""));
        assert!(json.contains("\"records\": 1"));
    }
}
