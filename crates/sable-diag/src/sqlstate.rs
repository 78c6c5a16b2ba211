//! SQLSTATE class handling.
//!
//! A SQLSTATE is a 5-character status string whose first two characters
//! (the class) identify the condition family. The class-to-kind table is
//! configuration, not logic: [`ClassMap::standard`] covers the standard
//! classes, and callers may build their own map for engines with vendor
//! classes.

use std::collections::HashMap;

use sable_error::ErrorKind;

/// Splits a SQLSTATE into its class prefix and subclass remainder.
/// Returns `None` for states shorter than two characters, which cannot be
/// classified.
pub fn split_state(state: &str) -> Option<(&str, &str)> {
    let class = state.get(..2)?;
    let subclass = state.get(2..).unwrap_or("");
    Some((class, subclass))
}

/// Mapping from SQLSTATE class prefix to the error kind it refines to.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    classes: HashMap<String, ErrorKind>,
}

impl ClassMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard-class table. Class `01` (warning) is deliberately
    /// absent: warnings are never derived from an error path.
    pub fn standard() -> Self {
        STANDARD_CLASSES.clone()
    }

    pub fn with_class(mut self, class: &str, kind: ErrorKind) -> Self {
        self.classes.insert(class.to_owned(), kind);
        self
    }

    /// The kind the state's class prefix refines to, or `None` when the
    /// class is unmapped or the state is too short to carry one.
    pub fn classify(&self, sql_state: &str) -> Option<ErrorKind> {
        let (class, _) = split_state(sql_state)?;
        self.classes.get(class).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

lazy_static::lazy_static! {
    static ref STANDARD_CLASSES: ClassMap = ClassMap::empty()
        .with_class("07", ErrorKind::ProgrammingError)   // dynamic SQL error
        .with_class("08", ErrorKind::OperationalError)   // connection exception
        .with_class("0A", ErrorKind::NotSupportedError)  // feature not supported
        .with_class("21", ErrorKind::ProgrammingError)   // cardinality violation
        .with_class("22", ErrorKind::DataError)          // data exception
        .with_class("23", ErrorKind::IntegrityError)     // integrity constraint violation
        .with_class("24", ErrorKind::OperationalError)   // invalid cursor state
        .with_class("25", ErrorKind::OperationalError)   // invalid transaction state
        .with_class("26", ErrorKind::ProgrammingError)   // invalid SQL statement name
        .with_class("28", ErrorKind::OperationalError)   // invalid authorization specification
        .with_class("2B", ErrorKind::InternalError)      // dependent privilege descriptors
        .with_class("40", ErrorKind::OperationalError)   // transaction rollback
        .with_class("42", ErrorKind::ProgrammingError)   // syntax error or access rule violation
        .with_class("44", ErrorKind::IntegrityError)     // WITH CHECK OPTION violation
        .with_class("XX", ErrorKind::InternalError);     // internal error
}
