//! Account storage and credential verification.
//!
//! Passwords are stored as hex SHA-256 digests and compared by digest; the
//! plaintext never reaches the database or the logs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use enrollment::db::{db::Storage, users::Users};
//! use enrollment::libs::user::NewUser;
//!
//! let storage = Storage::new("enrollment_system.db");
//! storage.initialize()?;
//!
//! let users = Users::new(&storage);
//! let outcome = users.create(&NewUser::new("jdoe", "s3cret", "jane", "doe"));
//! assert!(outcome.success);
//! assert!(users.verify_login("jdoe", "s3cret").success);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Storage;
use super::error::StorageError;
use crate::libs::formatter::{full_name, non_empty, title_case};
use crate::libs::messages::Message;
use crate::libs::outcome::Outcome;
use crate::libs::user::{AuthenticatedUser, LoginOutcome, NewUser, Role};
use regex::Regex;
use rusqlite::{params, OptionalExtension};
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_FIRST_NAME: &str = "System";
const DEFAULT_ADMIN_LAST_NAME: &str = "Administrator";

const SELECT_USER_ID_BY_USERNAME: &str = "SELECT id FROM users WHERE username = ?1";
const SELECT_USER_BY_CREDENTIALS: &str = "SELECT id, username, COALESCE(first_name, ''), middle_name, COALESCE(last_name, ''), full_name, role
    FROM users WHERE username = ?1 AND password = ?2";
const INSERT_USER: &str = "INSERT INTO users (username, password, first_name, middle_name, last_name, full_name, email, role)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

static ACCOUNT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("account name pattern"));

/// Hex-encoded SHA-256 digest of the UTF-8 password bytes.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Account store backed by the `users` table.
pub struct Users {
    storage: Storage,
}

impl Users {
    pub fn new(storage: &Storage) -> Self {
        Self { storage: storage.clone() }
    }

    /// Inserts the default administrator unless an `admin` account exists.
    ///
    /// Returns `true` when the account was created by this call.
    pub fn ensure_default_admin(&self) -> Result<bool, StorageError> {
        let db = self.storage.connect()?;
        let existing: Option<i64> = db
            .conn
            .query_row(SELECT_USER_ID_BY_USERNAME, params![DEFAULT_ADMIN_USERNAME], |row| row.get(0))
            .optional()?;
        if existing.is_some() {
            return Ok(false);
        }
        drop(db);

        let admin = NewUser::new(
            DEFAULT_ADMIN_USERNAME,
            DEFAULT_ADMIN_PASSWORD,
            DEFAULT_ADMIN_FIRST_NAME,
            DEFAULT_ADMIN_LAST_NAME,
        )
        .role(Role::Admin);

        match self.storage.retry().run("create_default_admin", || self.insert(&admin)) {
            Ok(()) => {
                tracing::info!(username = DEFAULT_ADMIN_USERNAME, "{}", Message::DefaultAdminCreated);
                Ok(true)
            }
            // another process bootstrapped first
            Err(StorageError::Conflict) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Checks a username/password pair.
    ///
    /// Unknown usernames and wrong passwords produce the same message.
    pub fn verify_login(&self, username: &str, password: &str) -> LoginOutcome {
        if username.trim().is_empty() || password.is_empty() {
            return LoginOutcome::denied(Message::CredentialsRequired);
        }

        match self.find_by_credentials(username.trim(), &hash_password(password)) {
            Ok(Some(user)) => {
                tracing::debug!(user_id = user.user_id, role = %user.role, "login succeeded");
                LoginOutcome::granted(user)
            }
            Ok(None) => {
                tracing::debug!("login rejected");
                LoginOutcome::denied(Message::InvalidCredentials)
            }
            Err(e) => {
                tracing::error!(error = %e, "login lookup failed");
                LoginOutcome::denied(Message::DatabaseError)
            }
        }
    }

    fn find_by_credentials(&self, username: &str, password_hash: &str) -> Result<Option<AuthenticatedUser>, StorageError> {
        let db = self.storage.connect()?;
        let user = db
            .conn
            .query_row(SELECT_USER_BY_CREDENTIALS, params![username, password_hash], |row| {
                let role: Option<String> = row.get(6)?;
                Ok(AuthenticatedUser {
                    user_id: row.get(0)?,
                    username: row.get(1)?,
                    first_name: row.get(2)?,
                    middle_name: row.get(3)?,
                    last_name: row.get(4)?,
                    full_name: row.get(5)?,
                    role: role.as_deref().and_then(|r| r.parse().ok()).unwrap_or_default(),
                })
            })
            .optional()?;

        Ok(user)
    }

    /// Validates and stores a new account.
    pub fn create(&self, user: &NewUser) -> Outcome {
        let result = self.storage.retry().run("create_user", || {
            check_new_user(user).map_err(|message| StorageError::InvalidInput(message.to_string()))?;
            self.insert(user)
        });

        match result {
            Ok(()) => {
                tracing::info!(username = %user.username.trim(), role = %user.role, "user created");
                Outcome::ok(Message::UserCreated)
            }
            Err(StorageError::Conflict) => Outcome::fail(Message::UsernameExists),
            Err(StorageError::InvalidInput(message)) => Outcome::fail(message),
            Err(e) => {
                tracing::error!(error = %e, "create_user failed");
                Outcome::fail(Message::DatabaseError)
            }
        }
    }

    fn insert(&self, user: &NewUser) -> Result<(), StorageError> {
        let first_name = title_case(&user.first_name);
        let middle_name = non_empty(user.middle_name.as_deref()).map(|m| title_case(&m));
        let last_name = title_case(&user.last_name);
        let display_name = full_name(&first_name, middle_name.as_deref(), &last_name);
        let email = non_empty(user.email.as_deref());

        let db = self.storage.connect()?;
        db.conn.execute(
            INSERT_USER,
            params![
                user.username.trim(),
                hash_password(&user.password),
                first_name,
                middle_name,
                last_name,
                display_name,
                email,
                user.role.as_str()
            ],
        )?;

        Ok(())
    }
}

fn check_new_user(user: &NewUser) -> Result<(), Message> {
    if user.username.trim().is_empty() {
        return Err(Message::UsernameRequired);
    }
    if user.password.is_empty() {
        return Err(Message::PasswordRequired);
    }
    if user.first_name.trim().is_empty() {
        return Err(Message::FieldRequired("First Name"));
    }
    if user.last_name.trim().is_empty() {
        return Err(Message::FieldRequired("Last Name"));
    }

    check_account_name("First Name", &user.first_name)?;
    check_account_name("Last Name", &user.last_name)?;

    if let Some(middle_name) = non_empty(user.middle_name.as_deref()) {
        if !ACCOUNT_NAME_REGEX.is_match(&middle_name) {
            return Err(Message::AccountNameCharacters("Middle Name"));
        }
        if middle_name.chars().count() > 50 {
            return Err(Message::AccountMiddleNameTooLong);
        }
    }

    Ok(())
}

fn check_account_name(label: &'static str, value: &str) -> Result<(), Message> {
    let value = value.trim();
    if !ACCOUNT_NAME_REGEX.is_match(value) {
        return Err(Message::AccountNameCharacters(label));
    }
    if !(2..=50).contains(&value.chars().count()) {
        return Err(Message::AccountNameLength(label));
    }
    Ok(())
}
