//! InterceptLayer - Outbound Call Interception
//!
//! A rule table mapping a URL pattern to a fixed reply, behind one lock.
//! Registration never replaces rules on its own; callers reset first when
//! they want exclusivity, which is exactly what the mock harness does on
//! every cycle.

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::constants::MOCK_REPLY_STATUS_OK;

/// Pattern matching every method and URL.
pub const MATCH_ANY: &str = "*";

/// An outbound network call as seen by the interception layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCall {
    /// HTTP method.
    pub method: String,
    /// Target URL.
    pub url: String,
}

impl OutboundCall {
    /// Describe an outbound call.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self { method: method.into(), url: url.into() }
    }
}

/// The fixed reply a matched call receives.
#[derive(Debug, Clone, PartialEq)]
pub struct MockReply {
    /// Implied success status.
    pub status: u16,
    /// Reply body, verbatim as registered.
    pub body: Value,
}

#[derive(Debug, Clone)]
struct ReplyRule {
    pattern: String,
    reply: MockReply,
}

impl ReplyRule {
    fn matches(&self, call: &OutboundCall) -> bool {
        self.pattern == MATCH_ANY || self.pattern == call.url
    }
}

/// Errors surfaced when dispatching an outbound call.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// No registered rule matched the call.
    #[error("no interception rule matches {method} {url}")]
    Unmatched {
        /// Method of the unmatched call.
        method: String,
        /// URL of the unmatched call.
        url: String,
    },
}

/// In-process network interception facility.
#[derive(Debug, Default)]
pub struct InterceptLayer {
    rules: RwLock<Vec<ReplyRule>>,
}

impl InterceptLayer {
    /// Create a layer with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every registered rule. Idempotent.
    pub async fn reset(&self) {
        let mut rules = self.rules.write().await;
        if !rules.is_empty() {
            debug!(dropped = rules.len(), "reset interception rules");
        }
        rules.clear();
    }

    /// Register a wildcard rule: any outbound call receives `body` with an
    /// implied 200 status.
    pub async fn reply_any(&self, body: Value) {
        let reply = MockReply { status: MOCK_REPLY_STATUS_OK, body };
        self.rules.write().await.push(ReplyRule { pattern: MATCH_ANY.to_string(), reply });
        info!("registered wildcard interception rule");
    }

    /// Dispatch an outbound call against the rule table; the first matching
    /// rule wins.
    ///
    /// # Errors
    /// [`NetError::Unmatched`] when no rule matches.
    pub async fn handle(&self, call: &OutboundCall) -> Result<MockReply, NetError> {
        let rules = self.rules.read().await;
        match rules.iter().find(|rule| rule.matches(call)) {
            Some(rule) => {
                debug!(method = call.method.as_str(), url = call.url.as_str(), "intercepted call");
                Ok(rule.reply.clone())
            }
            None => Err(NetError::Unmatched {
                method: call.method.clone(),
                url: call.url.clone(),
            }),
        }
    }

    /// Number of registered rules.
    pub async fn rule_count(&self) -> usize {
        self.rules.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_wildcard_rule_matches_any_call() {
        let net = InterceptLayer::new();
        net.reply_any(json!({ "data": { "ok": true } })).await;

        for (method, url) in [
            ("POST", "https://example.test/graphql"),
            ("GET", "http://localhost/anything"),
        ] {
            let reply = net
                .handle(&OutboundCall::new(method, url))
                .await
                .expect("wildcard matches");

            assert_eq!(reply.status, MOCK_REPLY_STATUS_OK);
            assert_eq!(reply.body, json!({ "data": { "ok": true } }));
        }
    }

    #[tokio::test]
    async fn test_unmatched_call_is_an_error() {
        let net = InterceptLayer::new();

        let result = net.handle(&OutboundCall::new("POST", "https://example.test")).await;

        assert!(matches!(result, Err(NetError::Unmatched { .. })));
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let net = InterceptLayer::new();

        net.reset().await;
        net.reply_any(json!(1)).await;
        net.reply_any(json!(2)).await;
        assert_eq!(net.rule_count().await, 2);

        net.reset().await;
        net.reset().await;
        assert_eq!(net.rule_count().await, 0);
    }

    #[tokio::test]
    async fn test_first_matching_rule_wins() {
        let net = InterceptLayer::new();
        net.reply_any(json!("first")).await;
        net.reply_any(json!("second")).await;

        let reply = net
            .handle(&OutboundCall::new("POST", "https://example.test"))
            .await
            .expect("wildcard matches");

        assert_eq!(reply.body, json!("first"));
    }
}
