mod user;
pub use user::User;

use crate::common::Time;

// Content of the session cell while someone is signed in.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Session {
    pub(crate) user: User,
    pub(crate) established_at: Time,
}

impl Session {
    pub(crate) fn establish(user: User) -> Self {
        Self {
            user,
            established_at: chrono::Utc::now(),
        }
    }
}
