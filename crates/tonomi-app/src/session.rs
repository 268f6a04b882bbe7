//! Signed-in user, as far as rendering is concerned.

/// Who is using the app.
///
/// Only gates which screens render; the navigation layer never looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
    admin: bool,
}

impl Session {
    /// Anonymous visitor.
    pub fn guest() -> Self {
        Self::default()
    }

    /// Signed-in shopper.
    pub fn customer(name: impl Into<String>) -> Self {
        Self {
            user: Some(name.into()),
            admin: false,
        }
    }

    /// Signed-in back-office user.
    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            user: Some(name.into()),
            admin: true,
        }
    }

    /// Name of the signed-in user.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Whether anyone is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Whether admin screens may render.
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
