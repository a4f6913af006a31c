use std::io::Write;

use super::*;

#[test]
fn avatar_file_takes_name_and_bytes_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().expect("tempfile");
    file.write_all(b"\x89PNG").expect("write");
    let avatar = AvatarFile::read(file.path()).expect("read");
    assert!(avatar.file_name.ends_with(".png"));
    assert_eq!(avatar.bytes, b"\x89PNG");
}

#[test]
fn upload_form_has_multipart_boundary() {
    let input = UpdateUserInput { description: "d".to_owned(), date_of_birth: None };
    let form = upload_form(&input, AvatarFile { file_name: "a.png".to_owned(), bytes: vec![1, 2] }).expect("form");
    assert!(!form.boundary().is_empty());
}

#[test]
fn user_json_adds_display_date() {
    let user = User {
        id: "1".to_owned(),
        email: "a@example.com".to_owned(),
        description: None,
        avatar: None,
        date_of_birth: Some("1990-03-05".to_owned()),
    };
    let json = user_json(&user);
    assert_eq!(json["email"], "a@example.com");
    assert_eq!(json["dateOfBirthDisplay"], "March 5, 1990");
    assert!(json.get("description").is_none());
}

#[test]
fn requests_carry_authorization_and_preflight_headers() {
    let signed_in = HttpApi::new("http://api.test/graphql", Some("tok".to_owned()))
        .request()
        .build()
        .expect("request");
    assert_eq!(signed_in.headers()[AUTHORIZATION], "Bearer tok");
    assert_eq!(signed_in.headers()["apollo-require-preflight"], "true");

    let signed_out = HttpApi::new("http://api.test/graphql", None).request().build().expect("request");
    assert_eq!(signed_out.headers()[AUTHORIZATION], "");
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let api = HttpApi::new("http://127.0.0.1:9/graphql", None);
    let input = SignInInput { email: "a@example.com".to_owned(), password: "abcde".to_owned() };
    let err = api.sign_in(&input).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
