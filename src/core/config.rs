use serde::Deserialize;
use tokio::time::Duration;

use crate::core::User;

// Session store configuration.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    // Accounts accepted by the built-in directory verifier.
    #[serde(default)]
    pub users: Vec<UserEntry>,
    // Simulated verification latency.
    verify_latency_milliseconds: Option<u64>,
    // Upper bound of random latency added on top of verify_latency_milliseconds.
    verify_jitter_milliseconds: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserEntry {
    pub(crate) fn to_user(&self) -> User {
        User::new(
            self.id.clone(),
            self.display_name.clone(),
            self.username.clone(),
            self.avatar.clone(),
        )
    }
}

impl Config {
    const DEFAULT_VERIFY_LATENCY_MILLISECONDS: u64 = 1000;
    const DEFAULT_VERIFY_JITTER_MILLISECONDS: u64 = 0;

    pub fn set_verify_latency_milliseconds(&mut self, val: Option<u64>) {
        if let Some(val) = val {
            self.verify_latency_milliseconds = Some(val)
        }
    }
    pub fn set_verify_jitter_milliseconds(&mut self, val: Option<u64>) {
        if let Some(val) = val {
            self.verify_jitter_milliseconds = Some(val)
        }
    }
    pub(crate) fn override_merge(&mut self, other: &mut Config) {
        self.set_verify_latency_milliseconds(other.verify_latency_milliseconds);
        self.set_verify_jitter_milliseconds(other.verify_jitter_milliseconds);
        if !other.users.is_empty() {
            self.users = std::mem::take(&mut other.users);
        }
    }

    pub(crate) fn verify_latency(&self) -> Duration {
        Duration::from_millis(
            self.verify_latency_milliseconds
                .unwrap_or(Config::DEFAULT_VERIFY_LATENCY_MILLISECONDS),
        )
    }

    pub(crate) fn verify_jitter(&self) -> Duration {
        Duration::from_millis(
            self.verify_jitter_milliseconds
                .unwrap_or(Config::DEFAULT_VERIFY_JITTER_MILLISECONDS),
        )
    }
}
