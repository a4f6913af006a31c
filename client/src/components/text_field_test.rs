use super::*;

#[test]
fn message_for_matches_only_the_failing_field() {
    let err = FieldError { field: Field::Password, message: "Password must contain at least 5 characters" };
    assert_eq!(
        message_for(Some(&err), Field::Password),
        Some("Password must contain at least 5 characters")
    );
    assert_eq!(message_for(Some(&err), Field::Email), None);
}

#[test]
fn message_for_is_empty_without_error() {
    assert_eq!(message_for(None, Field::Description), None);
}
