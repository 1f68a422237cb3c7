use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::common::{debug, info, warn};
use crate::core::session::Session;
use crate::core::verifier::{Logger, Verifier, VerifierChain};
use crate::core::{Config, Credentials, User};
use crate::error::AuthError;

type SharedVerifier = Arc<dyn Verifier + Send + Sync>;

#[derive(Default)]
pub struct Builder {
    config: Option<Config>,
    verifier: Option<SharedVerifier>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Config) -> Self {
        let mut builder = Builder::new();
        builder.config = Some(config);
        builder
    }

    /// Replace the config driven verifier chain with a custom credential backend.
    pub fn verifier<V>(mut self, verifier: V) -> Self
    where
        V: Verifier + Send + Sync + 'static,
    {
        self.verifier = Some(Arc::new(verifier));
        self
    }

    pub fn build(self) -> SessionStore {
        let verifier: Box<dyn Verifier + Send + Sync> = match self.verifier {
            Some(verifier) => Box::new(Logger::new(verifier)),
            None => Box::new(VerifierChain::new(&self.config.unwrap_or_default())),
        };

        let (session, _) = watch::channel(None);

        SessionStore {
            inner: Arc::new(Inner {
                verifier,
                session,
                pending: AtomicUsize::new(0),
            }),
        }
    }
}

struct Inner {
    verifier: Box<dyn Verifier + Send + Sync>,
    // The single session cell. Replaced whole, never edited in place.
    session: watch::Sender<Option<Session>>,
    pending: AtomicUsize,
}

/// Owner of "who, if anyone, is signed in".
///
/// Cloning yields another handle to the same session cell. Independent stores
/// built from separate `Builder`s never share state.
///
/// Overlapping `login` calls are allowed and the last one to resolve decides the
/// session, `logout` included: a successful login resolving after a logout
/// signs the user back in. Dropping a pending `login` future discards its
/// result without touching the session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Verify the pair and, on a match, replace the session with the verified user.
    pub async fn login<S1, S2>(&self, identifier: S1, secret: S2) -> Result<(), AuthError>
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let credentials = Credentials::new(identifier, secret).map_err(|err| {
            warn!(%err, "Login rejected before verification");
            err
        })?;

        self.login_with(credentials).await
    }

    pub async fn login_with(&self, credentials: Credentials) -> Result<(), AuthError> {
        let _pending = PendingGuard::enter(&self.inner.pending);

        let verified = self.inner.verifier.verify(&credentials).await;
        drop(credentials);

        match verified {
            Some(user) => {
                info!(user=%user.id(), "Login succeeded");
                self.inner
                    .session
                    .send_replace(Some(Session::establish(user)));
                Ok(())
            }
            None => {
                info!("Login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Clear the session. Never fails and never suspends.
    pub fn logout(&self) {
        let cleared = self.inner.session.send_if_modified(|session| session.take().is_some());
        if cleared {
            info!("Logout");
        } else {
            debug!("Logout without active session");
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_some()
    }

    pub fn established_at(&self) -> Option<DateTime<Utc>> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.established_at)
    }

    /// Whether any `login` is still awaiting its verifier.
    pub fn is_pending(&self) -> bool {
        self.pending_logins() > 0
    }

    pub fn pending_logins(&self) -> usize {
        self.inner.pending.load(Ordering::Acquire)
    }

    pub fn subscribe(&self) -> SessionChanges {
        SessionChanges {
            rx: self.inner.session.subscribe(),
        }
    }
}

/// Change feed of the session cell for rendering layers that re-run the gate reactively.
pub struct SessionChanges {
    rx: watch::Receiver<Option<Session>>,
}

impl SessionChanges {
    /// Wait for the next session replacement and return the new authentication state.
    /// `None` once every store handle has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().is_some())
    }

    /// Whether the session was replaced since the last `changed` or `mark_seen`.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    pub fn mark_seen(&mut self) -> bool {
        self.rx.borrow_and_update().is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.rx.borrow().is_some()
    }
}

struct PendingGuard<'a> {
    pending: &'a AtomicUsize,
}

impl<'a> PendingGuard<'a> {
    fn enter(pending: &'a AtomicUsize) -> Self {
        pending.fetch_add(1, Ordering::AcqRel);
        Self { pending }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.fetch_sub(1, Ordering::AcqRel);
    }
}
