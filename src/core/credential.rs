use std::fmt;

use crate::error::{AuthError, CredentialField};

/// Identifier/secret pair handed to a verifier for a single login attempt.
///
/// Never stored by the session store; dropped as soon as verification resolves.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Build credentials, rejecting empty values.
    pub fn new<S1, S2>(identifier: S1, secret: S2) -> Result<Self, AuthError>
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let identifier = identifier.into();
        let secret = secret.into();

        if identifier.is_empty() {
            return Err(AuthError::InvalidInput {
                field: CredentialField::Identifier,
            });
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidInput {
                field: CredentialField::Secret,
            });
        }

        Ok(Self { identifier, secret })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_identifier_first() {
        assert_eq!(
            Credentials::new("", ""),
            Err(AuthError::InvalidInput {
                field: CredentialField::Identifier
            })
        );
    }

    #[test]
    fn rejects_empty_secret() {
        assert_eq!(
            Credentials::new("user@example.com", ""),
            Err(AuthError::InvalidInput {
                field: CredentialField::Secret
            })
        );
    }

    #[test]
    fn debug_masks_secret() {
        let credentials = Credentials::new("user@example.com", "password123").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("password123"));
    }
}
