//! Branch Name Resolution
//!
//! Chooses between model-backed generation and title truncation.
//!
//! ## Strategy
//!
//! 1. Model generation disabled: truncate the title (`simple-description` placeholder)
//! 2. Otherwise ask the provider once
//! 3. On any provider failure, log a warning and truncate the title
//!    (`fallback-description` placeholder)
//!
//! Resolution never fails.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ai::{NameProvider, SharedProvider};
use crate::constants::slug::{FALLBACK_PLACEHOLDER, SIMPLE_PLACEHOLDER};
use crate::slug::truncate_title;
use crate::types::{BranchError, BranchSlug, GenerationRequest, Result};

/// Which path produced a slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Model reply, sanitized
    Model,
    /// Title truncation, model not requested
    Title,
    /// Title truncation after a model failure
    Fallback,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Model => write!(f, "model"),
            Strategy::Title => write!(f, "title"),
            Strategy::Fallback => write!(f, "fallback"),
        }
    }
}

/// Slug plus the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub slug: BranchSlug,
    pub strategy: Strategy,
}

/// Resolves branch slugs, falling back to title truncation
pub struct BranchNamer {
    provider: SharedProvider,
}

impl BranchNamer {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    pub fn from_provider(provider: impl NameProvider + 'static) -> Self {
        Self::new(Arc::new(provider))
    }

    /// Resolve a slug for the request. Never fails.
    pub async fn resolve(&self, request: &GenerationRequest, use_model: bool) -> BranchSlug {
        self.resolve_detailed(request, use_model).await.slug
    }

    /// Resolve a slug and report which strategy produced it
    #[instrument(skip(self, request), fields(entity = %request.entity_type))]
    pub async fn resolve_detailed(
        &self,
        request: &GenerationRequest,
        use_model: bool,
    ) -> Resolution {
        if !use_model {
            return Resolution {
                slug: truncate_title(&request.title, SIMPLE_PLACEHOLDER),
                strategy: Strategy::Title,
            };
        }

        match self.provider.generate(request).await {
            Ok(slug) => {
                info!(
                    provider = %self.provider.name(),
                    model = %self.provider.model(),
                    "Generated branch name: {}",
                    slug
                );
                Resolution {
                    slug,
                    strategy: Strategy::Model,
                }
            }
            Err(e) => {
                warn_fallback(&e);
                Resolution {
                    slug: truncate_title(&request.title, FALLBACK_PLACEHOLDER),
                    strategy: Strategy::Fallback,
                }
            }
        }
    }
}

fn warn_fallback(err: &BranchError) {
    warn!(
        category = %err.category(),
        status = ?err.status(),
        "Failed to generate branch name with model, falling back to title: {}",
        err
    );
}

// =============================================================================
// Branch Prefix
// =============================================================================

/// Join an optional prefix and a slug into a branch name (`prefix/slug`)
pub fn branch_name(prefix: Option<&str>, slug: &BranchSlug) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}/{}", p, slug),
        _ => slug.to_string(),
    }
}

/// Reject prefixes git would refuse or that would break the `prefix/slug` shape
pub fn validate_prefix(prefix: &str) -> Result<()> {
    const FORBIDDEN: &[char] = &['~', '^', ':', '?', '*', '[', '\\'];

    let problem = if prefix.is_empty() {
        Some("must not be empty")
    } else if prefix.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("must not contain whitespace")
    } else if prefix.contains(FORBIDDEN) {
        Some("must not contain any of ~^:?*[\\")
    } else if prefix.contains("..") || prefix.contains("//") {
        Some("must not contain '..' or '//'")
    } else if prefix.starts_with('/') || prefix.ends_with('/') {
        Some("must not start or end with '/'")
    } else if prefix.starts_with('-') || prefix.ends_with('.') || prefix.ends_with(".lock") {
        Some("must not start with '-' or end with '.' or '.lock'")
    } else {
        None
    };

    match problem {
        Some(reason) => Err(BranchError::Config(format!(
            "Invalid branch prefix '{}': {}",
            prefix, reason
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::instrument::WithSubscriber;

    use crate::constants::slug::MODEL_PLACEHOLDER;
    use crate::slug::sanitize;

    enum Reply {
        Text(&'static str),
        NoCredentials,
        Status(u16, &'static str),
        Empty,
    }

    struct MockProvider {
        reply: Reply,
        calls: Arc<AtomicUsize>,
    }

    impl MockProvider {
        fn new(reply: Reply) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    reply,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl NameProvider for MockProvider {
        async fn generate(&self, _request: &GenerationRequest) -> Result<BranchSlug> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Text(text) => Ok(sanitize(text.trim(), MODEL_PLACEHOLDER)),
                Reply::NoCredentials => Err(BranchError::MissingCredentials),
                Reply::Status(status, body) => Err(BranchError::upstream(status, body)),
                Reply::Empty => Err(BranchError::NoContent),
            }
        }

        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    #[tokio::test]
    async fn test_model_disabled_never_calls_provider() {
        let (provider, calls) = MockProvider::new(Reply::Text("should-not-be-used"));
        let namer = BranchNamer::from_provider(provider);

        let resolution = namer
            .resolve_detailed(&GenerationRequest::issue("Fix login bug"), false)
            .await;

        assert_eq!(resolution.slug, "fix-login-bug");
        assert_eq!(resolution.strategy, Strategy::Title);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_model_disabled_blank_title_placeholder() {
        let (provider, _) = MockProvider::new(Reply::Text("unused"));
        let namer = BranchNamer::from_provider(provider);

        let slug = namer.resolve(&GenerationRequest::issue("   "), false).await;
        assert_eq!(slug, "simple-description");
    }

    #[tokio::test]
    async fn test_model_success_is_returned() {
        let (provider, calls) = MockProvider::new(Reply::Text("  \"Add-User-Validation\"  "));
        let namer = BranchNamer::from_provider(provider);

        let resolution = namer
            .resolve_detailed(&GenerationRequest::pull_request("Validate users"), true)
            .await;

        assert_eq!(resolution.slug, "add-user-validation");
        assert_eq!(resolution.strategy, Strategy::Model);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_to_title() {
        let (provider, calls) = MockProvider::new(Reply::Status(500, "rate limited"));
        let namer = BranchNamer::from_provider(provider);

        let resolution = namer
            .resolve_detailed(&GenerationRequest::issue("Add new feature"), true)
            .await;

        assert_eq!(resolution.slug, "add-new-feature");
        assert_eq!(resolution.strategy, Strategy::Fallback);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_credentials_falls_back() {
        let (provider, _) = MockProvider::new(Reply::NoCredentials);
        let namer = BranchNamer::from_provider(provider);

        let slug = namer
            .resolve(&GenerationRequest::issue("Update docs for API"), true)
            .await;
        assert_eq!(slug, "update-docs-for");
    }

    #[tokio::test]
    async fn test_empty_content_falls_back_with_placeholder() {
        let (provider, _) = MockProvider::new(Reply::Empty);
        let namer = BranchNamer::from_provider(provider);

        let resolution = namer
            .resolve_detailed(&GenerationRequest::issue("???"), true)
            .await;
        assert_eq!(resolution.slug, "fallback-description");
        assert_eq!(resolution.strategy, Strategy::Fallback);
    }

    /// Formatted log lines written while `run` is polled
    async fn captured_logs<F: std::future::Future>(run: F) -> (F::Output, String) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || LogSink(sink.clone()))
            .finish();

        let output = run.with_subscriber(subscriber).await;
        let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        (output, logs)
    }

    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_success_logs_generated_name() {
        let (provider, _) = MockProvider::new(Reply::Text("add-cache"));
        let namer = BranchNamer::from_provider(provider);
        let request = GenerationRequest::issue("Add cache");

        let (resolution, logs) = captured_logs(namer.resolve_detailed(&request, true)).await;

        assert_eq!(resolution.strategy, Strategy::Model);
        assert!(logs.contains("INFO"), "logs: {logs}");
        assert!(logs.contains("Generated branch name: add-cache"), "logs: {logs}");
        assert!(!logs.contains("WARN"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_fallback_warns_with_category_and_status() {
        let (provider, _) = MockProvider::new(Reply::Status(503, "overloaded"));
        let namer = BranchNamer::from_provider(provider);
        let request = GenerationRequest::issue("Add new feature");

        let (resolution, logs) = captured_logs(namer.resolve_detailed(&request, true)).await;

        assert_eq!(resolution.strategy, Strategy::Fallback);
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("falling back to title"), "logs: {logs}");
        assert!(logs.contains("category=UPSTREAM"), "logs: {logs}");
        assert!(logs.contains("503"), "logs: {logs}");
        assert!(logs.contains("overloaded"), "logs: {logs}");
        assert!(!logs.contains("Generated branch name"), "logs: {logs}");
    }

    #[tokio::test]
    async fn test_model_disabled_logs_nothing() {
        let (provider, _) = MockProvider::new(Reply::Text("unused"));
        let namer = BranchNamer::from_provider(provider);
        let request = GenerationRequest::issue("Fix login bug");

        let (_, logs) = captured_logs(namer.resolve_detailed(&request, false)).await;
        assert!(logs.is_empty(), "logs: {logs}");
    }

    #[test]
    fn test_branch_name_with_prefix() {
        let slug = sanitize("fix-login-bug", MODEL_PLACEHOLDER);
        assert_eq!(branch_name(Some("claude"), &slug), "claude/fix-login-bug");
        assert_eq!(branch_name(Some(""), &slug), "fix-login-bug");
        assert_eq!(branch_name(None, &slug), "fix-login-bug");
    }

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("claude").is_ok());
        assert!(validate_prefix("users/alice").is_ok());

        for bad in ["", "has space", "a..b", "/lead", "trail/", "x:y", "a*", "-dash", "x.lock"] {
            assert!(validate_prefix(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_strategy_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Strategy::Fallback).unwrap(),
            "\"fallback\""
        );
        assert_eq!(Strategy::Model.to_string(), "model");
    }
}
