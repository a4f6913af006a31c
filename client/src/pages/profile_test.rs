use super::*;

fn user() -> User {
    User {
        id: "1".to_owned(),
        email: "alice@example.com".to_owned(),
        description: None,
        avatar: None,
        date_of_birth: None,
    }
}

#[test]
fn summary_greets_by_email_and_hides_empty_fields() {
    let mut u = user();
    u.description = Some(String::new());
    let summary = ProfileSummary::from_user(&u);
    assert_eq!(summary.greeting, "Hello, alice@example.com");
    assert_eq!(summary.avatar, None);
    assert_eq!(summary.description, None);
    assert_eq!(summary.date_of_birth, None);
}

#[test]
fn summary_formats_date_of_birth_for_display() {
    let mut u = user();
    u.date_of_birth = Some("1990-03-05T00:00:00.000Z".to_owned());
    u.avatar = Some("https://cdn.test/a.png".to_owned());
    let summary = ProfileSummary::from_user(&u);
    assert_eq!(summary.date_of_birth.as_deref(), Some("March 5, 1990"));
    assert_eq!(summary.avatar.as_deref(), Some("https://cdn.test/a.png"));
}
