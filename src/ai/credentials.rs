//! API Credentials
//!
//! The Messages API accepts either an API key (`x-api-key`) or an OAuth
//! token (`Authorization: Bearer`). When both are available the API key wins.
//! Empty values count as absent.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::constants::env;

/// A single usable credential
pub enum Credentials {
    ApiKey(SecretString),
    BearerToken(SecretString),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(self.kind()).field(&"[REDACTED]").finish()
    }
}

impl Credentials {
    /// Pick a credential from the two optional secrets, API key first
    pub fn resolve(api_key: Option<String>, oauth_token: Option<String>) -> Option<Self> {
        let present = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.is_empty());

        if present(&api_key) {
            api_key.map(|k| Self::ApiKey(SecretString::from(k)))
        } else if present(&oauth_token) {
            oauth_token.map(|t| Self::BearerToken(SecretString::from(t)))
        } else {
            None
        }
    }

    /// Read `ANTHROPIC_API_KEY` / `CLAUDE_CODE_OAUTH_TOKEN` from the process environment
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup(env::API_KEY), lookup(env::OAUTH_TOKEN))
    }

    /// Credential form name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "ApiKey",
            Self::BearerToken(_) => "BearerToken",
        }
    }

    /// Attach exactly one authentication header
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey(key) => builder.header("x-api-key", key.expose_secret()),
            Self::BearerToken(token) => builder.bearer_auth(token.expose_secret()),
        }
    }
}
