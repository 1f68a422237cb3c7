use async_trait::async_trait;
use tokio::time::Duration;

use crate::common::trace;
use crate::core::verifier::Verifier;
use crate::core::{Credentials, User};

// Mock network latency in front of the wrapped verifier.
pub struct Latency<V> {
    base: Duration,
    jitter: Duration,
    next: V,
}

impl<V> Latency<V> {
    pub fn new(base: Duration, jitter: Duration, next: V) -> Self {
        Self { base, jitter, next }
    }

    fn delay(&self) -> Duration {
        if self.jitter.is_zero() {
            self.base
        } else {
            self.base + self.jitter.mul_f64(rand::random::<f64>())
        }
    }
}

#[async_trait]
impl<V> Verifier for Latency<V>
where
    V: Verifier + Send + Sync,
{
    async fn verify(&self, credentials: &Credentials) -> Option<User> {
        let delay = self.delay();
        trace!(?delay, "Simulate verification latency");
        tokio::time::sleep(delay).await;

        self.next.verify(credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verifier::Predicate;

    #[test]
    fn delay_stays_within_bounds() {
        let latency = Latency::new(
            Duration::from_millis(100),
            Duration::from_millis(100),
            Predicate::new(|_: &str, _: &str| true),
        );
        for _ in 0..32 {
            let delay = latency.delay();
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(200));
        }
    }

    #[tokio::test]
    async fn waits_before_delegating() {
        let latency = Latency::new(
            Duration::from_millis(20),
            Duration::ZERO,
            Predicate::new(|_: &str, _: &str| true),
        );
        let credentials = Credentials::new("user@example.com", "password123").unwrap();

        let start = tokio::time::Instant::now();
        assert!(latency.verify(&credentials).await.is_some());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
