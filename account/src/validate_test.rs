use super::*;
use crate::User;

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_conventional_addresses() {
    for email in [
        "a@example.com",
        "first.last@mail.example.org",
        "under_score-dash@sub-domain.co.uk",
        "x@y.io",
        "name@host.info",
    ] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn rejects_strings_without_at_sign() {
    for email in ["", "plainaddress", "example.com", "a.b.c", "   "] {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "@example.com",
        "a@",
        "a@example",
        "a@example.c",
        "a@example.museum",
        "a b@example.com",
        "a@exa mple.com",
        "a@@example.com",
        " a@example.com",
        "a@example.com ",
    ] {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }
}

#[test]
fn word_characters_are_ascii_only() {
    assert!(!is_valid_email("jos\u{e9}@example.com"));
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn password_needs_five_characters() {
    assert_eq!(validate_password("abcd").unwrap_err().message, PASSWORD_TOO_SHORT);
    assert!(validate_password("abcde").is_ok());
    assert!(validate_password("").is_err());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_password("\u{e9}\u{e9}\u{e9}\u{e9}").is_err());
    assert!(validate_password("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}").is_ok());
}

#[test]
fn confirmation_must_match_exactly() {
    assert!(validate_confirmation("abcde", "abcde").is_ok());
    let err = validate_confirmation("abcde", "abcdE").unwrap_err();
    assert_eq!(err.field, Field::ConfirmPassword);
    assert_eq!(err.message, "Passwords don't match");
}

#[test]
fn description_allows_empty_and_128_chars() {
    assert!(validate_description("").is_ok());
    assert!(validate_description(&"x".repeat(128)).is_ok());
    let err = validate_description(&"x".repeat(129)).unwrap_err();
    assert_eq!(err.field, Field::Description);
    assert_eq!(err.message, DESCRIPTION_TOO_LONG);
}

// =============================================================
// Forms
// =============================================================

#[test]
fn sign_up_reports_first_failing_field() {
    let form = SignUpForm {
        email: "bad".to_owned(),
        password: "abc".to_owned(),
        confirm_password: "zzz".to_owned(),
    };
    assert_eq!(form.validate().unwrap_err().field, Field::Email);

    let form = SignUpForm { email: "a@example.com".to_owned(), ..form };
    assert_eq!(form.validate().unwrap_err().field, Field::Password);

    let form = SignUpForm { password: "abcdef".to_owned(), ..form };
    assert_eq!(form.validate().unwrap_err().field, Field::ConfirmPassword);

    let form = SignUpForm { confirm_password: "abcdef".to_owned(), ..form };
    assert!(form.validate().is_ok());
}

#[test]
fn sign_in_rejects_short_password() {
    let form = SignInForm { email: "a@example.com".to_owned(), password: "1234".to_owned() };
    let err = form.validate().unwrap_err();
    assert_eq!(err.field, Field::Password);
    assert_eq!(err.to_string(), "password: Password must contain at least 5 characters");
}

#[test]
fn profile_form_prefills_from_user() {
    let user = User {
        id: "1".to_owned(),
        email: "a@example.com".to_owned(),
        description: Some("about me".to_owned()),
        avatar: None,
        date_of_birth: Some("1990-03-05T00:00:00.000Z".to_owned()),
    };
    let form = ProfileForm::from_user(&user);
    assert_eq!(form.description, "about me");
    assert_eq!(form.date_of_birth.as_deref(), Some("1990-03-05"));
    assert!(form.validate().is_ok());
}

#[test]
fn profile_form_from_bare_user_is_empty() {
    let user = User {
        id: "1".to_owned(),
        email: "a@example.com".to_owned(),
        description: None,
        avatar: None,
        date_of_birth: Some("unknown".to_owned()),
    };
    assert_eq!(ProfileForm::from_user(&user), ProfileForm::default());
}

#[test]
fn field_names_match_form_inputs() {
    assert_eq!(Field::ConfirmPassword.name(), "confirmPassword");
    assert_eq!(Field::Email.name(), "email");
}
