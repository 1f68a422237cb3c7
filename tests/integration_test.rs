use std::io::Write;

use sessiongate::config::Initializer;
use sessiongate::{AuthError, NavigationTree, Navigator, Screen};

const CONFIG: &str = r#"
session:
  verify_latency_milliseconds: 10
  verify_jitter_milliseconds: 5
  users:
    - username: user@example.com
      password: password123
      id: "1"
      display_name: John Doe
"#;

#[test]
fn session_gated_navigation() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    tokio_test::block_on(async move {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let store = Initializer::load_config_file(file.path())
            .await
            .unwrap()
            .build_store()
            .unwrap();
        let mut navigator = Navigator::new(store.clone());

        assert_eq!(navigator.tree(), NavigationTree::Unauthenticated);
        assert_eq!(navigator.current(), Screen::Login);

        // Wrong secret
        let result = store.login("user@example.com", "wrong").await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert_eq!(store.current_user(), None);
        assert!(!navigator.sync());

        // Login shows pending while the verifier sleeps.
        let login = store.login("user@example.com", "password123");
        let probe = async {
            tokio::task::yield_now().await;
            store.is_pending()
        };
        let (result, pending_during_login) = tokio::join!(login, probe);
        result.unwrap();
        assert!(pending_during_login);
        assert!(!store.is_pending());

        let user = store.current_user().unwrap();
        assert_eq!(user.id(), "1");
        assert_eq!(user.display_name(), "John Doe");
        assert_eq!(user.email(), "user@example.com");

        assert!(navigator.sync());
        assert_eq!(navigator.current(), Screen::Dashboard);
        navigator.navigate(Screen::Profile).unwrap();
        assert_eq!(navigator.current(), Screen::Profile);

        // Logout flips the tree within the same turn.
        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(navigator.current(), Screen::Login);

        store.login("user@example.com", "password123").await.unwrap();
        assert_eq!(store.current_user(), Some(user));
        assert_eq!(navigator.current(), Screen::Dashboard);
    });
}

#[test]
fn broken_config_file_is_an_error() {
    tokio_test::block_on(async move {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"session: [not, a, map]").unwrap();

        assert!(Initializer::load_config_file(file.path()).await.is_err());
    });
}
