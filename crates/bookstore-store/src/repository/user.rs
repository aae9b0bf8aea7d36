//! # User Repository

use tracing::debug;

use crate::store::Store;
use bookstore_core::{EntityId, NewUser, User};

impl Store {
    /// Creates a user. Uniqueness of the username is the caller's concern.
    pub fn create_user(&mut self, data: NewUser) -> User {
        let user = data.into_user(self.ids.next_id());
        debug!(id = %user.id, username = %user.username, "Inserting user");

        self.users.push(user.clone());
        user
    }

    pub fn get_user_by_id(&self, id: EntityId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Returns the first user with exactly this username.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.iter().find(|u| u.username == username).cloned()
    }
}
