pub mod internal;

use std::error;
use std::fmt;

use crate::navigation::{NavigationTree, Screen};

// Which half of the credentials failed boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Identifier,
    Secret,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CredentialField::Identifier => f.write_str("identifier"),
            CredentialField::Secret => f.write_str("secret"),
        }
    }
}

/// Outcome of a failed `login`. Both variants are recoverable by retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    // Verification rejected the pair. Deliberately silent on which half was wrong.
    InvalidCredentials,
    InvalidInput { field: CredentialField },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => f.write_str("invalid credentials"),
            AuthError::InvalidInput { field } => write!(f, "{} must not be empty", field),
        }
    }
}

impl error::Error for AuthError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    // Screens of the other tree are only reachable through login/logout.
    OutsideActiveTree { screen: Screen, tree: NavigationTree },
    // Tried to pop the entry screen of the active tree.
    AtEntry { screen: Screen },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NavigationError::OutsideActiveTree { screen, tree } => {
                write!(f, "screen {} is not part of the {} tree", screen, tree)
            }
            NavigationError::AtEntry { screen } => {
                write!(f, "already at entry screen {}", screen)
            }
        }
    }
}

impl error::Error for NavigationError {}

#[derive(Debug)]
pub enum SessiongateError {
    Auth(AuthError),
    Navigation(NavigationError),
    Internal(internal::Error),
}

impl fmt::Display for SessiongateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessiongateError::Auth(err) => err.fmt(f),
            SessiongateError::Navigation(err) => err.fmt(f),
            SessiongateError::Internal(err) => err.fmt(f),
        }
    }
}

impl error::Error for SessiongateError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SessiongateError::Auth(err) => Some(err),
            SessiongateError::Navigation(err) => Some(err),
            SessiongateError::Internal(err) => Some(err),
        }
    }
}

impl From<AuthError> for SessiongateError {
    fn from(err: AuthError) -> Self {
        SessiongateError::Auth(err)
    }
}

impl From<NavigationError> for SessiongateError {
    fn from(err: NavigationError) -> Self {
        SessiongateError::Navigation(err)
    }
}

impl From<internal::Error> for SessiongateError {
    fn from(err: internal::Error) -> Self {
        SessiongateError::Internal(err)
    }
}

impl From<internal::ErrorKind> for SessiongateError {
    fn from(kind: internal::ErrorKind) -> Self {
        SessiongateError::Internal(kind.into())
    }
}

impl From<std::io::Error> for SessiongateError {
    fn from(err: std::io::Error) -> Self {
        SessiongateError::Internal(err.into())
    }
}
