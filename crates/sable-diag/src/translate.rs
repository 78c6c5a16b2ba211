use itertools::Itertools;

use sable_error::{Error, ErrorInfo, ErrorInfoList, ErrorKind, Result};

use crate::registry::Registry;
use crate::source::DiagnosticSource;

/// Pulls the failed operation's diagnostic records and lowers them into
/// the error payload.
///
/// An empty sequence yields a single synthesized record with every field
/// defaulted (`sql_state = ""`), so classification always has a first
/// record and absence never reaches the caller as a missing value.
pub fn collect_info(source: &(impl DiagnosticSource + ?Sized)) -> ErrorInfoList {
    let raw = source.diagnostics();
    if raw.is_empty() {
        tracing::debug!("no diagnostic records reported, synthesizing defaulted record");
        return ErrorInfoList::from(ErrorInfo::default());
    }
    tracing::debug!(
        states = %raw
            .iter()
            .map(|r| r.sql_state.as_deref().unwrap_or(""))
            .join(","),
        "collected {} diagnostic record(s)",
        raw.len()
    );
    ErrorInfoList::from_records(raw.into_iter().map(|r| r.into_info()).collect())
}

/// Final classification of a failure.
///
/// The class table's answer is adopted only when the caller-supplied kind
/// is a strict ancestor of it, so the table refines a generic kind into a
/// member of its subtree. A caller that already knows better (say, an
/// interface failure the class prefix cannot express) keeps its kind.
/// `Warning` never comes from the table; it is only ever passed in
/// explicitly.
pub fn resolve_kind(registry: &Registry, provisional: ErrorKind, sql_state: &str) -> ErrorKind {
    match registry.classes().classify(sql_state) {
        Some(kind) if provisional.is_ancestor_of(kind) => kind,
        _ => provisional,
    }
}

/// Builds the typed error for the most recently failed operation: retrieve
/// the records, default what is absent, classify on the first record's
/// SQLSTATE, and construct the value of the resolved kind with the full
/// payload attached.
///
/// A pure function of (provisional kind, diagnostic sequence, class
/// table); no state is retained between invocations.
pub fn error_from_diagnostics(
    registry: &Registry,
    source: &(impl DiagnosticSource + ?Sized),
    provisional: ErrorKind,
) -> Error {
    let info = collect_info(source);
    let state = info.first().map(|r| r.sql_state.clone()).unwrap_or_default();
    let kind = resolve_kind(registry, provisional, &state);
    if kind != provisional {
        tracing::debug!(%provisional, %kind, %state, "SQLSTATE class refined provisional kind");
    }
    Error::with_kind(kind, info)
}

/// Entry point for failing call sites: classifies and raises exactly once,
/// never returning normally.
pub fn fail_with_diagnostics<T>(
    registry: &Registry,
    source: &(impl DiagnosticSource + ?Sized),
    provisional: ErrorKind,
) -> Result<T> {
    Err(error_from_diagnostics(registry, source, provisional))
}
