use super::*;

#[test]
fn deserialize_accepts_numeric_id() {
    let user: User = serde_json::from_str(r#"{"id":1,"email":"a@example.com"}"#).expect("user");
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@example.com");
    assert!(user.description.is_none());
}

#[test]
fn deserialize_accepts_string_id_and_camel_case_fields() {
    let raw = r#"{
        "id": "u-7",
        "email": "b@example.com",
        "description": "hi",
        "avatar": "https://cdn.test/a.png",
        "dateOfBirth": "1990-03-05T00:00:00.000Z"
    }"#;
    let user: User = serde_json::from_str(raw).expect("user");
    assert_eq!(user.id, "u-7");
    assert_eq!(user.description(), Some("hi"));
    assert_eq!(user.avatar(), Some("https://cdn.test/a.png"));
    assert_eq!(user.date_of_birth(), Some("1990-03-05T00:00:00.000Z"));
}

#[test]
fn deserialize_rejects_object_id() {
    let err = serde_json::from_str::<User>(r#"{"id":{},"email":"x@y.zz"}"#);
    assert!(err.is_err());
}

#[test]
fn null_optionals_deserialize_as_none() {
    let raw = r#"{"id":"1","email":"a@b.cc","description":null,"avatar":null,"dateOfBirth":null}"#;
    let user: User = serde_json::from_str(raw).expect("user");
    assert!(user.avatar.is_none());
    assert!(user.date_of_birth.is_none());
}

#[test]
fn serialize_uses_camel_case_and_skips_missing() {
    let user = User {
        id: "1".to_owned(),
        email: "a@b.cc".to_owned(),
        description: None,
        avatar: None,
        date_of_birth: Some("2000-01-01".to_owned()),
    };
    let json = serde_json::to_value(&user).expect("json");
    assert_eq!(json, serde_json::json!({"id": "1", "email": "a@b.cc", "dateOfBirth": "2000-01-01"}));
}

#[test]
fn empty_optional_strings_read_as_none() {
    let user = User {
        id: "1".to_owned(),
        email: "a@b.cc".to_owned(),
        description: Some(String::new()),
        avatar: Some(String::new()),
        date_of_birth: Some(String::new()),
    };
    assert!(user.description().is_none());
    assert!(user.avatar().is_none());
    assert!(user.date_of_birth().is_none());
}

#[test]
fn format_date_of_birth_renders_long_month() {
    assert_eq!(format_date_of_birth("1990-03-05T00:00:00.000Z"), "March 5, 1990");
    assert_eq!(format_date_of_birth("2001-12-25"), "December 25, 2001");
}

#[test]
fn format_date_of_birth_passes_through_unparseable() {
    assert_eq!(format_date_of_birth("someday"), "someday");
    assert_eq!(format_date_of_birth("1990-13-40"), "1990-13-40");
}

#[test]
fn date_input_value_keeps_iso_prefix() {
    assert_eq!(date_input_value("1990-03-05T00:00:00.000Z"), "1990-03-05");
    assert_eq!(date_input_value("bad"), "");
}
