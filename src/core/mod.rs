mod store;
pub use self::store::{Builder, SessionChanges, SessionStore};

mod config;
pub use self::config::{Config, UserEntry};

mod credential;
pub use self::credential::Credentials;

mod session;
pub use self::session::User;

pub mod verifier;
pub use self::verifier::Verifier;
