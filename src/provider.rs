//! Hosted credential provider interface and the strength policy gate.
//!
//! The provider (sign-in, sessions, password resets) lives outside this crate;
//! only the operations the dashboard consumes are declared here. New passwords
//! are evaluated and checked against a [`PasswordPolicy`] before they reach it.

use std::future::Future;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::assessment::{StrengthAssessment, StrengthLabel};
use crate::evaluator::Evaluator;

pub const PROVIDER_URL_ENV: &str = "CLINIC_PROVIDER_URL";
pub const PROVIDER_KEY_ENV: &str = "CLINIC_PROVIDER_KEY";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing provider setting: {0}")]
    Missing(&'static str),
    #[error("Provider setting is empty: {0}")]
    Empty(&'static str),
}

/// Connection settings for the hosted provider.
///
/// Built once at startup and handed to the provider client; there is no
/// process-wide client instance.
#[derive(Debug)]
pub struct ProviderConfig {
    pub url: String,
    pub api_key: SecretString,
}

impl ProviderConfig {
    pub fn new(url: impl Into<String>, api_key: SecretString) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConfigError::Empty(PROVIDER_URL_ENV));
        }
        if api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Empty(PROVIDER_KEY_ENV));
        }
        Ok(ProviderConfig { url, api_key })
    }

    /// Reads `CLINIC_PROVIDER_URL` and `CLINIC_PROVIDER_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url =
            std::env::var(PROVIDER_URL_ENV).map_err(|_| ConfigError::Missing(PROVIDER_URL_ENV))?;
        let key =
            std::env::var(PROVIDER_KEY_ENV).map_err(|_| ConfigError::Missing(PROVIDER_KEY_ENV))?;
        Self::new(url, SecretString::new(key.into()))
    }
}

#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("No active session")]
    NoSession,
    #[error("Provider request failed: {0}")]
    Request(String),
}

/// Operations consumed from the hosted authentication provider.
pub trait CredentialProvider {
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Session, ProviderError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    fn current_session(
        &self,
    ) -> impl Future<Output = Result<Option<Session>, ProviderError>> + Send;

    fn request_password_reset(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Replaces the signed-in user's password.
    fn update_password(
        &self,
        new_password: &SecretString,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Password is {label}, at least {minimum} is required")]
    TooWeak {
        label: StrengthLabel,
        minimum: StrengthLabel,
        suggestions: Vec<String>,
    },
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Minimum strength a new password must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub minimum: StrengthLabel,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            minimum: StrengthLabel::Good,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, assessment: &StrengthAssessment) -> Result<(), PolicyError> {
        // the empty-input sentinel never satisfies a policy
        if !assessment.label.is_computed() || assessment.label < self.minimum {
            return Err(PolicyError::TooWeak {
                label: assessment.label,
                minimum: self.minimum,
                suggestions: assessment.top_suggestions().to_vec(),
            });
        }
        Ok(())
    }
}

/// Evaluates `new_password` and forwards it to the provider only when it
/// satisfies `policy`.
pub async fn submit_new_password<P: CredentialProvider>(
    provider: &P,
    evaluator: &Evaluator,
    policy: &PasswordPolicy,
    new_password: &SecretString,
) -> Result<StrengthAssessment, PolicyError> {
    let assessment = evaluator.evaluate(new_password);
    if let Err(e) = policy.check(&assessment) {
        #[cfg(feature = "tracing")]
        tracing::info!("new password rejected: {}", e);
        return Err(e);
    }

    provider.update_password(new_password).await?;

    #[cfg(feature = "tracing")]
    tracing::info!("password updated ({})", assessment.label);

    Ok(assessment)
}
