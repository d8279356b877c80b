use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse access flag. Administrators may create, update and delete students.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Lower-case text stored in the `users.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Administrators may create, update and delete students.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Input for account creation.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

impl NewUser {
    /// Starts an account with the required fields; role defaults to [`Role::User`].
    pub fn new(username: &str, password: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the optional middle name.
    pub fn middle_name(mut self, middle_name: &str) -> Self {
        self.middle_name = Some(middle_name.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Sets the account role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Identity fields returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub full_name: String,
    pub role: Role,
}

/// Result of a login attempt.
///
/// Serializes flat: `{success, user_id?, username?, ..., role?, message?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(flatten)]
    pub user: Option<AuthenticatedUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginOutcome {
    /// Successful login carrying the identity fields.
    pub fn granted(user: AuthenticatedUser) -> Self {
        Self {
            success: true,
            user: Some(user),
            message: None,
        }
    }

    /// Failed login with a user-facing reason.
    pub fn denied(message: impl ToString) -> Self {
        Self {
            success: false,
            user: None,
            message: Some(message.to_string()),
        }
    }
}
