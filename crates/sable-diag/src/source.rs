use sable_error::ErrorInfo;

/// One loosely-typed diagnostic record as the client library reports it.
///
/// Sub-fields the driver omitted stay `None` here; they are defaulted,
/// never dropped, when the record is lowered via
/// [`RawDiagnostic::into_info`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDiagnostic {
    pub sql_code: Option<i32>,
    pub sql_state: Option<String>,
    pub class_origin: Option<String>,
    pub subclass_origin: Option<String>,
    pub message: Option<String>,
    pub server_name: Option<String>,
    pub connection_name: Option<String>,
}

impl RawDiagnostic {
    /// Lowers into the driver payload record. Absent sub-fields become
    /// empty strings (or `0` for the code) so absence never propagates as
    /// an uninitialized value.
    pub fn into_info(self) -> ErrorInfo {
        ErrorInfo {
            sql_code: self.sql_code.unwrap_or(0),
            sql_state: self.sql_state.unwrap_or_default(),
            class_origin: self.class_origin.unwrap_or_default(),
            subclass_origin: self.subclass_origin.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            server_name: self.server_name.unwrap_or_default(),
            connection_name: self.connection_name.unwrap_or_default(),
        }
    }
}

/// Black-box producer of the most recently failed operation's diagnostic
/// records.
///
/// Must be queried synchronously, immediately after the failing call and
/// before any other operation runs on the same session: the session's
/// last-error state is owned by the client library and overwritten by the
/// next operation.
pub trait DiagnosticSource {
    /// Records in engine reporting order; the primary condition comes
    /// first. May be empty: an engine is allowed to fail without
    /// reporting a condition.
    fn diagnostics(&self) -> Vec<RawDiagnostic>;
}

impl DiagnosticSource for Vec<RawDiagnostic> {
    fn diagnostics(&self) -> Vec<RawDiagnostic> {
        self.clone()
    }
}

impl DiagnosticSource for [RawDiagnostic] {
    fn diagnostics(&self) -> Vec<RawDiagnostic> {
        self.to_vec()
    }
}
