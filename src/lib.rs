#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod navigation;

pub use crate::error::{AuthError, CredentialField, NavigationError, SessiongateError};
pub type Result<T, E = crate::error::SessiongateError> = std::result::Result<T, E>;

pub use crate::core::{Credentials, SessionStore, User};
pub use crate::navigation::{select_tree, NavigationTree, Navigator, Screen};

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::internal::Error> = std::result::Result<T, E>;

    pub(crate) type Error = crate::error::internal::Error;
    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub(crate) type Time = chrono::DateTime<chrono::Utc>;

    pub use tracing::{debug, error, info, trace, warn};
}
