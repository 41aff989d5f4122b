use chrono::Utc;
use serde_json::json;
use sg_core::{
    classify_with, decide, AppFlags, ErrorKind, Failure, NavigationTarget, PersistedFlags,
    Session, UserId,
};

fn session(email: bool, phone: bool) -> Session {
    Session {
        user_id: UserId::from("usr_42"),
        access_token: "access".into(),
        refresh_token: "refresh".into(),
        email_verified: email,
        phone_verified: phone,
        created_at: Utc::now(),
    }
}

#[test]
fn restored_flags_route_a_verified_user_to_dashboard() {
    let persisted = PersistedFlags::from_json(r#"{"isOnboarded":true}"#).unwrap();
    let flags = AppFlags::from_persisted(&persisted);

    assert!(!flags.is_loading);
    assert!(flags.last_error.is_none());
    assert_eq!(
        decide(Some(&session(true, true)), &flags),
        NavigationTarget::Dashboard
    );
    assert_eq!(decide(None, &flags), NavigationTarget::Auth);
}

#[test]
fn loose_client_error_payload_classifies_by_precedence() {
    let payload = json!({
        "message": "GraphQL error: Invalid credentials",
        "graphQLErrors": [{ "message": "Invalid credentials" }],
        "networkError": null
    });
    let failure = Failure::from_value(payload);

    let report = classify_with(&failure, true);
    assert_eq!(report.kind(), ErrorKind::ProtocolError);
    assert_eq!(report.message(), "Invalid credentials");
    assert!(!report.retryable());

    let offline = classify_with(&failure, false);
    assert_eq!(offline.kind(), ErrorKind::Offline);
    assert!(offline.retryable());
}

#[test]
fn transport_failure_wins_over_protocol_errors() {
    let failure = Failure::from_value(json!({
        "networkError": { "message": "Network request failed" },
        "graphQLErrors": ["ignored"]
    }));

    let report = classify_with(&failure, true);
    assert_eq!(report.kind(), ErrorKind::NetworkUnreachable);
    assert!(report.retryable());
}

#[test]
fn report_serializes_with_snake_case_kind() {
    let report = classify_with(&Failure::network("timeout of 10000ms exceeded"), true);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["kind"], "timeout");
    assert_eq!(value["retryable"], true);
}
