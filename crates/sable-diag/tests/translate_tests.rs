use sable_diag::{
    collect_info, error_from_diagnostics, fail_with_diagnostics, resolve_kind, ClassMap,
    RawDiagnostic, Registry,
};
use sable_error::{Error, ErrorKind};

fn record(sql_code: i32, sql_state: &str, message: &str) -> RawDiagnostic {
    RawDiagnostic {
        sql_code: Some(sql_code),
        sql_state: Some(sql_state.into()),
        class_origin: Some("ISO 9075".into()),
        subclass_origin: Some("ISO 9075".into()),
        message: Some(message.into()),
        server_name: Some("server".into()),
        connection_name: Some("conn".into()),
    }
}

#[test]
fn empty_sequence_synthesizes_a_defaulted_record() {
    let _ = tracing_subscriber::fmt::try_init();
    let registry = Registry::new();
    let source: Vec<RawDiagnostic> = Vec::new();

    let err = error_from_diagnostics(&registry, &source, ErrorKind::DatabaseError);

    assert_eq!(err.kind(), ErrorKind::DatabaseError);
    assert_eq!(err.info().len(), 1);
    assert_eq!(err.sql_code(), 0);
    assert_eq!(err.sql_state(), "");
    assert_eq!(err.class_origin(), "");
    assert_eq!(err.subclass_origin(), "");
    assert_eq!(err.message(), "");
    assert_eq!(err.server_name(), "");
    assert_eq!(err.connection_name(), "");
}

#[test]
fn first_record_is_authoritative_and_none_are_dropped() {
    let registry = Registry::new();
    let source = vec![
        record(-268, "23000", "Unique constraint violated."),
        record(-201, "42000", "A syntax error has occurred."),
        record(-100, "IX111", "Vendor condition."),
    ];

    let err = error_from_diagnostics(&registry, &source, ErrorKind::DatabaseError);

    // classified and surfaced from the first record only
    assert_eq!(err.kind(), ErrorKind::IntegrityError);
    assert_eq!(err.sql_code(), -268);
    assert_eq!(err.message(), "Unique constraint violated.");
    // later records are retained in reporting order
    assert_eq!(err.info().len(), 3);
    let states: Vec<&str> = err.info().iter().map(|r| r.sql_state.as_str()).collect();
    assert_eq!(states, vec!["23000", "42000", "IX111"]);
}

#[test]
fn class_prefix_refines_generic_kinds() {
    let registry = Registry::new();

    let err = error_from_diagnostics(
        &registry,
        &vec![record(-268, "23000", "")],
        ErrorKind::DatabaseError,
    );
    assert_eq!(err.kind(), ErrorKind::IntegrityError);

    let err = error_from_diagnostics(
        &registry,
        &vec![record(-201, "42000", "")],
        ErrorKind::DatabaseError,
    );
    assert_eq!(err.kind(), ErrorKind::ProgrammingError);

    // the root kind is refined as well
    let err = error_from_diagnostics(&registry, &vec![record(-201, "42000", "")], ErrorKind::Error);
    assert_eq!(err.kind(), ErrorKind::ProgrammingError);
}

#[test]
fn caller_supplied_kind_wins_over_the_table() {
    let registry = Registry::new();

    let err = error_from_diagnostics(
        &registry,
        &vec![record(-268, "23000", "")],
        ErrorKind::InterfaceError,
    );
    assert_eq!(err.kind(), ErrorKind::InterfaceError);

    // an already-specific database kind is not reclassified
    let err = error_from_diagnostics(
        &registry,
        &vec![record(-243, "42000", "")],
        ErrorKind::OperationalError,
    );
    assert_eq!(err.kind(), ErrorKind::OperationalError);
}

#[test]
fn unknown_classes_keep_the_provisional_kind() {
    let registry = Registry::new();

    for state in ["IX111", "ZZ999", "", "4"] {
        let err = error_from_diagnostics(
            &registry,
            &vec![record(-1, state, "")],
            ErrorKind::DatabaseError,
        );
        assert_eq!(err.kind(), ErrorKind::DatabaseError, "state {state:?}");
    }
}

#[test]
fn warnings_are_only_ever_explicit() {
    let registry = Registry::new();

    let err = error_from_diagnostics(
        &registry,
        &vec![record(0, "01004", "String data, right truncation.")],
        ErrorKind::Warning,
    );
    assert!(err.is_warning());
    assert_eq!(err.kind(), ErrorKind::Warning);
    assert_eq!(err.message(), "String data, right truncation.");

    // a warning-class state on an error path stays an error
    let err = error_from_diagnostics(
        &registry,
        &vec![record(0, "01004", "")],
        ErrorKind::DatabaseError,
    );
    assert_eq!(err.kind(), ErrorKind::DatabaseError);
}

#[test]
fn absent_subfields_default_instead_of_dropping() {
    let raw = RawDiagnostic {
        sql_code: None,
        sql_state: Some("22012".into()),
        class_origin: None,
        subclass_origin: None,
        message: None,
        server_name: None,
        connection_name: None,
    };

    let info = raw.into_info();
    assert_eq!(info.sql_code, 0);
    assert_eq!(info.sql_state, "22012");
    assert_eq!(info.class_origin, "");
    assert_eq!(info.subclass_origin, "");
    assert_eq!(info.message, "");
    assert_eq!(info.server_name, "");
    assert_eq!(info.connection_name, "");
}

#[test]
fn fully_populated_record_round_trips_field_for_field() {
    let raw = record(-987, "IX111", "Some message");
    let info = raw.clone().into_info();

    assert_eq!(Some(info.sql_code), raw.sql_code);
    assert_eq!(Some(info.sql_state.as_str()), raw.sql_state.as_deref());
    assert_eq!(Some(info.class_origin.as_str()), raw.class_origin.as_deref());
    assert_eq!(
        Some(info.subclass_origin.as_str()),
        raw.subclass_origin.as_deref()
    );
    assert_eq!(Some(info.message.as_str()), raw.message.as_deref());
    assert_eq!(Some(info.server_name.as_str()), raw.server_name.as_deref());
    assert_eq!(
        Some(info.connection_name.as_str()),
        raw.connection_name.as_deref()
    );
}

#[test]
fn collect_preserves_sequence_length() {
    let source = vec![record(-100, "IX111", "a"), record(-200, "IX111", "b")];
    let info = collect_info(&source);
    assert_eq!(info.len(), 2);
    assert_eq!(info.sql_code(), -100);

    let slice: &[RawDiagnostic] = &source;
    assert_eq!(collect_info(slice).len(), 2);
}

#[test]
fn fail_entry_point_never_returns_normally() {
    let registry = Registry::new();
    let source = vec![record(-268, "23000", "Unique constraint violated.")];

    let result: Result<u32, Error> =
        fail_with_diagnostics(&registry, &source, ErrorKind::DatabaseError);

    let err = result.expect_err("translation always raises");
    assert_eq!(err.kind(), ErrorKind::IntegrityError);
}

#[test]
fn resolve_kind_consults_the_injected_table() {
    let vendor = Registry::with_classes(
        ClassMap::standard().with_class("IX", ErrorKind::OperationalError),
    );

    assert_eq!(
        resolve_kind(&vendor, ErrorKind::DatabaseError, "IX111"),
        ErrorKind::OperationalError
    );
    assert_eq!(
        resolve_kind(&vendor, ErrorKind::DatabaseError, "23000"),
        ErrorKind::IntegrityError
    );

    let empty = Registry::with_classes(ClassMap::empty());
    assert_eq!(
        resolve_kind(&empty, ErrorKind::DatabaseError, "23000"),
        ErrorKind::DatabaseError
    );
}
