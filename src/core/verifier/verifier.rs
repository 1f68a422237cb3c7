use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{Credentials, User};

/// Credential backend consulted by the session store.
///
/// Returns the principal the credentials identify, or `None` when they do not match.
/// A rejection is an expected outcome, not a fault.
#[async_trait]
pub trait Verifier {
    async fn verify(&self, credentials: &Credentials) -> Option<User>;
}

#[async_trait]
impl<V> Verifier for Arc<V>
where
    V: Verifier + Send + Sync + ?Sized,
{
    async fn verify(&self, credentials: &Credentials) -> Option<User> {
        (**self).verify(credentials).await
    }
}
