use std::path::Path;

use tokio::fs;

use crate::common::{debug, ErrorKind, Result};
use crate::config::Config;
use crate::core::{self, SessionStore};

#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub async fn load_config_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Ok(Self::load(path).await?)
    }

    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Load config file {}", path.display());

        let raw = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str::<Config>(&raw)?;

        Ok(Self { config })
    }

    pub fn override_merge(&mut self, other: &mut core::Config) {
        self.config.session.override_merge(other);
    }

    pub fn build_store(self) -> crate::Result<SessionStore> {
        Ok(self.build()?)
    }

    fn build(self) -> Result<SessionStore> {
        let session = self.config.session;

        for (i, entry) in session.users.iter().enumerate() {
            if entry.username.is_empty() || entry.password.is_empty() {
                return Err(ErrorKind::InvalidConfig {
                    description: format!("users[{}] has an empty username or password", i),
                }
                .into());
            }
        }

        Ok(core::Builder::from_config(session).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessiongateError;

    #[tokio::test]
    async fn missing_file_is_reported() {
        let err = Initializer::load_config_file("./does/not/exist.yaml")
            .await
            .unwrap_err();
        match err {
            SessiongateError::Internal(err) => assert!(err.is_not_found()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_password_is_rejected() {
        let config: Config = serde_yaml::from_str(
            r#"
session:
  users:
    - username: user@example.com
      password: ""
      id: "1"
      display_name: John Doe
"#,
        )
        .unwrap();

        assert!(Initializer::from_config(config).build_store().is_err());
    }

    #[tokio::test]
    async fn builds_store_from_config() {
        let config: Config = serde_yaml::from_str(
            r#"
session:
  verify_latency_milliseconds: 0
  users:
    - username: user@example.com
      password: password123
      id: "1"
      display_name: John Doe
"#,
        )
        .unwrap();

        let store = Initializer::from_config(config).build_store().unwrap();
        store.login("user@example.com", "password123").await.unwrap();

        let user = store.current_user().unwrap();
        assert_eq!(user.display_name(), "John Doe");
    }
}
