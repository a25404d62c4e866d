use super::*;

#[test]
fn login_ok_parses_full_response() {
    let body = r#"{"token":"t1","user":{"_id":"u1","isApproved":true},"requiresPayment":false}"#;

    let ok: LoginOk = serde_json::from_str(body).expect("response parses");
    assert_eq!(ok.token, "t1");
    assert_eq!(ok.user.id, "u1");
    assert!(ok.user.is_approved);
    assert!(!ok.requires_payment);
}

#[test]
fn requires_payment_defaults_to_false_when_absent() {
    let body = r#"{"token":"t1","user":{"_id":"u1","isApproved":true}}"#;

    let ok: LoginOk = serde_json::from_str(body).expect("response parses");
    assert!(!ok.requires_payment);
}

#[test]
fn user_display_fields_are_optional() {
    let body = r#"{"_id":"u1","isApproved":false,"nombre":"Ana"}"#;

    let user: User = serde_json::from_str(body).expect("user parses");
    assert_eq!(user.nombre.as_deref(), Some("Ana"));
    assert_eq!(user.correo, None);
    assert!(!user.is_approved);
}

#[test]
fn user_serializes_with_wire_names() {
    let user = User {
        id: "u1".to_owned(),
        nombre: None,
        correo: Some("ana@example.com".to_owned()),
        is_approved: true,
    };

    let value = serde_json::to_value(&user).expect("user serializes");
    assert_eq!(value["_id"], "u1");
    assert_eq!(value["isApproved"], true);
    assert_eq!(value["correo"], "ana@example.com");
    // `None` display fields stay off the wire entirely.
    assert!(value.get("nombre").is_none());
}

#[test]
fn credentials_serialize_with_wire_names() {
    let credentials = Credentials {
        correo: "a@b.com".to_owned(),
        contrasena: "x".to_owned(),
    };

    let value = serde_json::to_value(&credentials).expect("credentials serialize");
    assert_eq!(value["correo"], "a@b.com");
    assert_eq!(value["contrasena"], "x");
}
