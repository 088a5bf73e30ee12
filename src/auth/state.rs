//! Account store
//!
//! Usernames map to an argon2 password hash and a point balance. The
//! balance only changes through [`AccountStore::update_points`] (order
//! settlement) or [`AccountStore::reset_points`].

use super::models::UserView;
use crate::error::AppError;
use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use dashmap::{mapref::entry::Entry, DashMap};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Account {
    id: String,
    username: String,
    password_hash: String,
    points: u64,
}

impl Account {
    fn view(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            username: self.username.clone(),
            points: self.points,
        }
    }
}

pub struct AccountStore {
    /// Keyed by username
    accounts: DashMap<String, Account>,
    default_points: u64,
}

impl AccountStore {
    pub fn new(default_points: u64) -> Self {
        Self {
            accounts: DashMap::new(),
            default_points,
        }
    }

    pub fn register(&self, username: &str, password: &str) -> Result<UserView, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Username and password are required".to_string(),
            ));
        }
        if self.accounts.contains_key(username) {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        let password_hash = hash_password(password)?;

        match self.accounts.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::UsernameTaken(username.to_string())),
            Entry::Vacant(slot) => {
                let account = slot.insert(Account {
                    id: Uuid::new_v4().simple().to_string(),
                    username: username.to_string(),
                    password_hash,
                    points: self.default_points,
                });
                Ok(account.view())
            }
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserView, AppError> {
        let account = self
            .accounts
            .get(username.trim())
            .ok_or(AppError::UserNotFound)?;

        if verify_password(password, &account.password_hash)? {
            Ok(account.view())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    pub fn get(&self, username: &str) -> Option<UserView> {
        self.accounts.get(username).map(|a| a.view())
    }

    /// Runs `settle` against the current balance while holding the account
    /// entry, committing the returned balance only on success.
    pub fn update_points<T, E>(
        &self,
        username: &str,
        settle: impl FnOnce(u64) -> Result<(T, u64), E>,
    ) -> Option<Result<T, E>> {
        let mut account = self.accounts.get_mut(username)?;
        Some(settle(account.points).map(|(value, remaining)| {
            account.points = remaining;
            value
        }))
    }

    /// Returns the balance to the session default.
    pub fn reset_points(&self, username: &str) -> Option<UserView> {
        let mut account = self.accounts.get_mut(username)?;
        account.points = self.default_points;
        Some(account.view())
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("stored password hash is invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_authenticate() {
        let store = AccountStore::new(5000);
        let user = store.register("traveler", "secret").unwrap();
        assert_eq!(user.points, 5000);

        let again = store.authenticate("traveler", "secret").unwrap();
        assert_eq!(again.id, user.id);
    }

    #[test]
    fn test_register_rejects_duplicates_and_blanks() {
        let store = AccountStore::new(5000);
        store.register("traveler", "secret").unwrap();

        assert!(matches!(
            store.register("traveler", "other"),
            Err(AppError::UsernameTaken(_))
        ));
        assert!(matches!(
            store.register("  ", "secret"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            store.register("nobody", ""),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_authenticate_failures() {
        let store = AccountStore::new(5000);
        store.register("traveler", "secret").unwrap();

        assert!(matches!(
            store.authenticate("ghost", "secret"),
            Err(AppError::UserNotFound)
        ));
        assert!(matches!(
            store.authenticate("traveler", "wrong"),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_update_points_commits_only_on_success() {
        let store = AccountStore::new(5000);
        store.register("traveler", "secret").unwrap();

        let ok: Option<Result<&str, ()>> =
            store.update_points("traveler", |points| Ok(("paid", points - 2000)));
        assert_eq!(ok, Some(Ok("paid")));
        assert_eq!(store.get("traveler").unwrap().points, 3000);

        let failed: Option<Result<(), &str>> =
            store.update_points("traveler", |_| Err("rejected"));
        assert_eq!(failed, Some(Err("rejected")));
        assert_eq!(store.get("traveler").unwrap().points, 3000);

        assert!(store
            .update_points::<(), ()>("ghost", |p| Ok(((), p)))
            .is_none());
    }

    #[test]
    fn test_reset_points() {
        let store = AccountStore::new(5000);
        store.register("traveler", "secret").unwrap();
        store.update_points::<(), ()>("traveler", |_| Ok(((), 10)));

        let user = store.reset_points("traveler").unwrap();
        assert_eq!(user.points, 5000);
        assert!(store.reset_points("ghost").is_none());
    }
}
