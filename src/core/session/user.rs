use serde::Serialize;

/// Authenticated principal. Immutable for the lifetime of its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: String,
    display_name: String,
    email: String,
    avatar_ref: Option<String>,
}

impl User {
    pub fn new<S1, S2, S3>(id: S1, display_name: S2, email: S3, avatar_ref: Option<String>) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            avatar_ref,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn avatar_ref(&self) -> Option<&str> {
        self.avatar_ref.as_deref()
    }
}
