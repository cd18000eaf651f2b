//! Tests for the domain user model.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("Ada")]
#[case(" ")]
#[case("  padded  ")]
fn user_name_accepts_any_non_empty_value(#[case] raw: &str) {
    let name = UserName::new(raw).expect("non-empty name is accepted");
    assert_eq!(name.as_ref(), raw);
}

#[rstest]
fn user_name_rejects_empty_value() {
    assert_eq!(UserName::new(""), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case("a@x.com")]
#[case("not-an-email")]
fn email_is_not_format_checked(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("non-empty email is accepted");
    assert_eq!(String::from(email), raw);
}

#[rstest]
fn email_rejects_empty_value() {
    assert_eq!(EmailAddress::new(""), Err(UserValidationError::EmptyEmail));
}

#[rstest]
#[case("", "a@x.com", UserValidationError::EmptyName)]
#[case("Ada", "", UserValidationError::EmptyEmail)]
fn new_user_reports_first_missing_field(
    #[case] name: &str,
    #[case] email: &str,
    #[case] expected: UserValidationError,
) {
    assert_eq!(NewUser::try_from_strings(name, email), Err(expected));
}

#[rstest]
fn from_new_keeps_submitted_fields() {
    let draft = NewUser::try_from_strings("Ada", "ada@example.com").expect("valid draft");
    let user = User::from_new(UserId::new(7), draft);

    assert_eq!(user.id(), UserId::new(7));
    assert_eq!(user.name().as_ref(), "Ada");
    assert_eq!(user.email().as_ref(), "ada@example.com");
}

#[rstest]
fn user_ids_order_by_raw_value() {
    let mut ids = vec![UserId::new(2), UserId::new(3), UserId::new(1)];
    ids.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, vec![UserId::new(3), UserId::new(2), UserId::new(1)]);
}

#[rstest]
fn user_serialises_flat_fields() {
    let user = User::try_from_parts(1, "Ada", "ada@example.com").expect("valid user");
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": 1, "name": "Ada", "email": "ada@example.com" })
    );
}

#[rstest]
fn validation_errors_have_readable_messages() {
    assert_eq!(
        UserValidationError::EmptyName.to_string(),
        "name must not be empty"
    );
    assert_eq!(
        UserValidationError::EmptyEmail.to_string(),
        "email must not be empty"
    );
}
