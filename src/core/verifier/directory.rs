use async_trait::async_trait;

use crate::common::debug;
use crate::core::verifier::Verifier;
use crate::core::{Credentials, User, UserEntry};

// Verifies against a fixed list of accounts loaded from config.
pub struct Directory {
    users: Vec<UserEntry>,
}

impl Directory {
    pub fn new(users: Vec<UserEntry>) -> Self {
        Self { users }
    }

    fn authenticate_by_password(&self, credentials: &Credentials) -> Option<User> {
        for user_entry in &self.users {
            if user_entry.username == credentials.identifier()
                && user_entry.password == credentials.secret()
            {
                return Some(user_entry.to_user());
            }
        }
        None
    }
}

#[async_trait]
impl Verifier for Directory {
    async fn verify(&self, credentials: &Credentials) -> Option<User> {
        debug!(user=%credentials.identifier(), entries=self.users.len(), "Lookup directory");
        self.authenticate_by_password(credentials)
    }
}
