use std::fmt;
use std::slice;

/// One structured diagnostic record, immutable once built.
///
/// Every field is populated even when the engine omits it: absent strings
/// become `""` and an absent code becomes `0`, never an uninitialized
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorInfo {
    /// Numeric status code from the engine.
    pub sql_code: i32,
    /// 5-character standardized status string. The first two characters
    /// are the class, the remainder the subclass.
    pub sql_state: String,
    pub class_origin: String,
    pub subclass_origin: String,
    /// Human-readable diagnostic text, verbatim from the engine.
    pub message: String,
    pub server_name: String,
    pub connection_name: String,
}

impl ErrorInfo {
    /// Ordered identifiers of the seven payload fields, for symbolic
    /// access via [`ErrorInfo::field`].
    pub const FIELDS: [&'static str; 7] = [
        "sql_code",
        "sql_state",
        "class_origin",
        "subclass_origin",
        "message",
        "server_name",
        "connection_name",
    ];

    /// Addresses a field by identifier, rendering its value as a string.
    /// Returns `None` for identifiers not listed in [`ErrorInfo::FIELDS`].
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "sql_code" => Some(self.sql_code.to_string()),
            "sql_state" => Some(self.sql_state.clone()),
            "class_origin" => Some(self.class_origin.clone()),
            "subclass_origin" => Some(self.subclass_origin.clone()),
            "message" => Some(self.message.clone()),
            "server_name" => Some(self.server_name.clone()),
            "connection_name" => Some(self.connection_name.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for name in Self::FIELDS {
            let value = self.field(name).unwrap_or_default();
            writeln!(f, "{name:<15}: {value}")?;
        }
        Ok(())
    }
}

/// The diagnostic payload attached to a raised error: an ordered,
/// append-only collection of [`ErrorInfo`] records.
///
/// The first record is authoritative for classification and for the
/// convenience accessors; the remaining records are retained verbatim so
/// no reported condition is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorInfoList {
    records: Vec<ErrorInfo>,
}

impl ErrorInfoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ErrorInfo>) -> Self {
        Self { records }
    }

    /// Appends one record; reporting order is preserved.
    pub fn push(&mut self, info: ErrorInfo) {
        self.records.push(info);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ErrorInfo> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ErrorInfo> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&ErrorInfo> {
        self.records.first()
    }

    /// First record's code, or `0` when no records are stored.
    pub fn sql_code(&self) -> i32 {
        self.records.first().map(|r| r.sql_code).unwrap_or(0)
    }

    /// First record's message, or `""` when no records are stored.
    pub fn message(&self) -> &str {
        self.records.first().map(|r| r.message.as_str()).unwrap_or("")
    }
}

impl From<ErrorInfo> for ErrorInfoList {
    fn from(info: ErrorInfo) -> Self {
        Self {
            records: vec![info],
        }
    }
}

impl<'a> IntoIterator for &'a ErrorInfoList {
    type Item = &'a ErrorInfo;
    type IntoIter = slice::Iter<'a, ErrorInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for ErrorInfoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for info in &self.records {
            write!(f, "{info}")?;
        }
        Ok(())
    }
}
