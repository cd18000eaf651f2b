//! User record and the field types it is built from.

use std::fmt;

use serde::Serialize;

/// Validation errors returned when building user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// Identifiers increase monotonically with insertion, so ordering by id
/// recovers creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier issued by the store.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Presence is a plain emptiness check; surrounding whitespace is kept as-is.
fn require_present(
    value: String,
    missing: UserValidationError,
) -> Result<String, UserValidationError> {
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

macro_rules! required_text {
    ($(#[$meta:meta])* $name:ident, $missing:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the value from owned input.
            pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
                require_present(value.into(), $missing).map(Self)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

required_text!(
    /// Name submitted at registration. Non-empty, otherwise free-form.
    UserName,
    UserValidationError::EmptyName
);

required_text!(
    /// Email submitted at registration. Non-empty; format and uniqueness are
    /// not checked.
    EmailAddress,
    UserValidationError::EmptyEmail
);

/// A user that has passed presence checks but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: UserName,
    email: EmailAddress,
}

impl NewUser {
    /// Build a new user from validated fields.
    #[must_use]
    pub fn new(name: UserName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserName::new(name)?, EmailAddress::new(email)?))
    }

    /// Submitted name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Submitted email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `name` and `email` are non-empty.
///
/// # Examples
/// ```
/// use roster::domain::{NewUser, User, UserId};
///
/// let draft = NewUser::try_from_strings("Ada", "ada@example.com").expect("valid user");
/// let user = User::from_new(UserId::new(1), draft);
/// assert_eq!(user.name().as_ref(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
}

impl User {
    /// Build a user from validated components.
    #[must_use]
    pub fn new(id: UserId, name: UserName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Attach a store-assigned identifier to a pending user.
    #[must_use]
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        let NewUser { name, email } = new_user;
        Self::new(id, name, email)
    }

    /// Fallible constructor used by adapters reading raw rows.
    pub fn try_from_parts(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id),
            UserName::new(name)?,
            EmailAddress::new(email)?,
        ))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Registered name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Registered email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests;
