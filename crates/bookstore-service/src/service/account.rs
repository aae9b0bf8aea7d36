//! # Accounts
//!
//! Registration and password login. Sessions are not issued here; see
//! `bookstore_core::session` for the contract types.

use tracing::{debug, info, warn};

use super::BookShoppingService;
use bookstore_core::validation::validate_username;
use bookstore_core::{NewUser, ShopError, ShopResult, User};

impl BookShoppingService {
    /// Registers a new user.
    ///
    /// ## Errors
    /// - `Validation` if the username is empty or too long
    /// - `DuplicateUsername` if the username is taken
    pub fn register_user(&self, data: NewUser) -> ShopResult<User> {
        validate_username(&data.username)?;

        self.store.write(|store| {
            if store.get_user_by_username(&data.username).is_some() {
                warn!(username = %data.username, "Registration rejected: username taken");
                return Err(ShopError::DuplicateUsername(data.username));
            }

            let user = store.create_user(data);
            info!(user_id = %user.id, username = %user.username, "User registered");
            Ok(user)
        })
    }

    /// Checks a username/password pair. A mismatch is `None`, not an error.
    pub fn login_user(&self, username: &str, password: &str) -> Option<User> {
        let user = self.store.read(|store| {
            store
                .get_user_by_username(username)
                .filter(|user| user.password == password)
        });

        if user.is_none() {
            debug!(username, "Login failed");
        }
        user
    }
}
