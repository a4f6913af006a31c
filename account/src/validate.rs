//! Form field validation run before any remote call.
//!
//! Each form checks its fields in display order and stops at the first
//! failure, reporting a single [`FieldError`] for the page to show inline.
//!
//! ## Rules
//!
//! - Email: shape check `^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$`.
//!   This is not an RFC 5322 parser and says nothing about deliverability.
//! - Password: at least 5 characters.
//! - Confirmation: identical to the password.
//! - Description: at most 128 characters, empty allowed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_CHARS: usize = 5;
pub const MAX_DESCRIPTION_CHARS: usize = 128;

pub const INVALID_EMAIL: &str = "Please enter a valid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must contain at least 5 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords don't match";
pub const DESCRIPTION_TOO_LONG: &str = "Description must not exceed 128 characters";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("email pattern is a valid literal")
});

/// A form input that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Description,
}

impl Field {
    /// Form input name, matching the GraphQL input field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Description => "description",
        }
    }
}

/// The first failing field of a form and the message to show under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

impl std::error::Error for FieldError {}

/// Whether `email` has a conventional `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// # Errors
///
/// Returns a [`FieldError`] for [`Field::Email`] when the shape check fails.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(FieldError { field: Field::Email, message: INVALID_EMAIL })
    }
}

/// # Errors
///
/// Returns a [`FieldError`] for [`Field::Password`] when shorter than
/// [`MIN_PASSWORD_CHARS`].
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() >= MIN_PASSWORD_CHARS {
        Ok(())
    } else {
        Err(FieldError { field: Field::Password, message: PASSWORD_TOO_SHORT })
    }
}

/// # Errors
///
/// Returns a [`FieldError`] for [`Field::ConfirmPassword`] when the two differ.
pub fn validate_confirmation(password: &str, confirm_password: &str) -> Result<(), FieldError> {
    if password == confirm_password {
        Ok(())
    } else {
        Err(FieldError { field: Field::ConfirmPassword, message: PASSWORDS_DIFFER })
    }
}

/// # Errors
///
/// Returns a [`FieldError`] for [`Field::Description`] when longer than
/// [`MAX_DESCRIPTION_CHARS`].
pub fn validate_description(description: &str) -> Result<(), FieldError> {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        Ok(())
    } else {
        Err(FieldError { field: Field::Description, message: DESCRIPTION_TOO_LONG })
    }
}

/// Sign-up form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// # Errors
    ///
    /// Returns the first failing field in order email, password, confirmation.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_confirmation(&self.password, &self.confirm_password)
    }
}

/// Sign-in form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// # Errors
    ///
    /// Returns the first failing field in order email, password.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

/// Profile edit form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub description: String,
    /// `YYYY-MM-DD`, or `None` to leave unset.
    pub date_of_birth: Option<String>,
}

impl ProfileForm {
    /// Form prefilled from the current user.
    #[must_use]
    pub fn from_user(user: &crate::User) -> Self {
        Self {
            description: user.description().unwrap_or_default().to_owned(),
            date_of_birth: user
                .date_of_birth()
                .map(crate::user::date_input_value)
                .filter(|d| !d.is_empty()),
        }
    }

    /// # Errors
    ///
    /// Returns a [`FieldError`] when the description is too long.
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_description(&self.description)
    }
}
