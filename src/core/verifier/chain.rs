use async_trait::async_trait;

use crate::core::verifier::{Directory, Latency, Logger, Verifier};
use crate::core::{Config, Credentials, User};

// Verifier stack built from config: logging, then simulated latency, then directory lookup.
pub struct VerifierChain {
    root: Logger<Latency<Directory>>,
}

impl VerifierChain {
    pub fn new(config: &Config) -> Self {
        let directory = Directory::new(config.users.clone());

        let latency = Latency::new(config.verify_latency(), config.verify_jitter(), directory);

        let logger = Logger::new(latency);

        Self { root: logger }
    }
}

#[async_trait]
impl Verifier for VerifierChain {
    async fn verify(&self, credentials: &Credentials) -> Option<User> {
        self.root.verify(credentials).await
    }
}
