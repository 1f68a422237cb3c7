use async_trait::async_trait;

use crate::core::verifier::Verifier;
use crate::core::{Credentials, User};

// Adapts a plain `(identifier, secret) -> bool` check into a Verifier.
// The accepted identifier doubles as id, display name and email.
pub struct Predicate<F> {
    check: F,
}

impl<F> Predicate<F>
where
    F: Fn(&str, &str) -> bool,
{
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

#[async_trait]
impl<F> Verifier for Predicate<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    async fn verify(&self, credentials: &Credentials) -> Option<User> {
        if (self.check)(credentials.identifier(), credentials.secret()) {
            let identifier = credentials.identifier();
            Some(User::new(identifier, identifier, identifier, None))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delegates_to_check() {
        let verifier = Predicate::new(|id: &str, secret: &str| id == "a@b.c" && secret == "s");

        let ok = Credentials::new("a@b.c", "s").unwrap();
        assert_eq!(verifier.verify(&ok).await.unwrap().email(), "a@b.c");

        let ng = Credentials::new("a@b.c", "x").unwrap();
        assert!(verifier.verify(&ng).await.is_none());
    }
}
