use async_trait::async_trait;

use crate::common::info;
use crate::core::verifier::Verifier;
use crate::core::{Credentials, User};

pub struct Logger<V> {
    next: V,
}

impl<V> Logger<V> {
    pub fn new(next: V) -> Self {
        Self { next }
    }
}

#[async_trait]
impl<V> Verifier for Logger<V>
where
    V: Verifier + Send + Sync,
{
    async fn verify(&self, credentials: &Credentials) -> Option<User> {
        let start = tokio::time::Instant::now();

        let result = self.next.verify(credentials).await;

        info!(
            user=%credentials.identifier(),
            matched=result.is_some(),
            elapsed=?start.elapsed(),
            "Verify done"
        );

        result
    }
}
