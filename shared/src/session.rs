//! Dashboard session and identity provider configuration
//!
//! Sign-in itself happens in the host (a browser popup against the identity
//! provider). The dashboard only receives the outcome through an explicitly
//! constructed [`Session`], whose [`AuthMode`] is decided once from
//! configuration instead of being sniffed from the environment at load time.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Whether an identity provider is available to sign users in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Configured,
    /// Demo mode: every dashboard works, nobody can sign in
    #[default]
    Unconfigured,
}

/// Public web configuration of the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IdentityProviderConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

/// API key value shipped in the sample environment file
const PLACEHOLDER_API_KEY: &str = "your_firebase_api_key";

impl IdentityProviderConfig {
    /// Configured only when the required keys are present and not placeholders
    pub fn mode(&self) -> AuthMode {
        let present =
            |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

        let api_key_is_real = self
            .api_key
            .as_deref()
            .is_some_and(|key| key != PLACEHOLDER_API_KEY && !key.contains("Dummy"));

        if present(&self.api_key)
            && present(&self.auth_domain)
            && present(&self.project_id)
            && api_key_is_real
        {
            AuthMode::Configured
        } else {
            AuthMode::Unconfigured
        }
    }
}

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// The dashboard's view of who is signed in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    mode: AuthMode,
    user: Option<SessionUser>,
}

impl Session {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, user: None }
    }

    pub fn unconfigured() -> Self {
        Self::new(AuthMode::Unconfigured)
    }

    pub fn from_config(config: &IdentityProviderConfig) -> Self {
        Self::new(config.mode())
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Record the user returned by a completed sign-in
    pub fn establish(&mut self, user: SessionUser) -> Result<&SessionUser, SessionError> {
        if self.mode == AuthMode::Unconfigured {
            return Err(SessionError::NotConfigured);
        }
        Ok(&*self.user.insert(user))
    }

    /// Sign out; a no-op when nobody is signed in
    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        if self.mode == AuthMode::Unconfigured {
            return Err(SessionError::NotConfigured);
        }
        self.user = None;
        Ok(())
    }

    /// The signed-in user, for actions reserved to members
    pub fn require_user(&self) -> Result<&SessionUser, SessionError> {
        match (&self.user, self.mode) {
            (Some(user), _) => Ok(user),
            (None, AuthMode::Unconfigured) => Err(SessionError::NotConfigured),
            (None, AuthMode::Configured) => Err(SessionError::SignInRequired),
        }
    }
}
