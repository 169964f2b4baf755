use async_std::channel::Sender;
use serde_json::Value;

use crate::models::{Platform, PlatformStats};
use crate::{Error, Result, Success};

use super::{AccountSync, AiGenerator, GenerationKind, PaymentGateway};

/// Canned AI collaborator for tests and offline development
#[derive(Default, Clone)]
pub struct MockAiGenerator {
    /// Increments replayed by `stream_chat`
    pub chat_increments: Vec<String>,
    pub fail: bool,
}

#[async_trait]
impl AiGenerator for MockAiGenerator {
    async fn generate(&self, kind: GenerationKind, input: Value) -> Result<Value> {
        if self.fail {
            return Err(Error::ServiceFailed { service: "ai" });
        }

        Ok(json!({ "kind": kind, "input": input }))
    }

    async fn stream_chat(&self, _input: Value, sink: Sender<String>) -> Success {
        if self.fail {
            return Err(Error::ServiceFailed { service: "ai" });
        }

        for increment in &self.chat_increments {
            sink.send(increment.clone())
                .await
                .map_err(|_| Error::ServiceFailed { service: "ai" })?;
        }

        Ok(())
    }
}

/// Payment gateway that always confirms, or always fails
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    pub fail: bool,
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, _amount: f64, _metadata: Value) -> Result<String> {
        if self.fail {
            return Err(Error::ServiceFailed { service: "payment" });
        }

        Ok(format!("tx_{}", ulid::Ulid::new()))
    }
}

/// Stat collaborator returning fixed stats
#[derive(Default, Clone)]
pub struct MockAccountSync {
    stats: PlatformStats,
    fail: bool,
}

impl MockAccountSync {
    pub fn with_stats(stats: PlatformStats) -> MockAccountSync {
        MockAccountSync { stats, fail: false }
    }

    pub fn failing() -> MockAccountSync {
        MockAccountSync {
            stats: PlatformStats::default(),
            fail: true,
        }
    }
}

#[async_trait]
impl AccountSync for MockAccountSync {
    async fn fetch_stats(&self, _platform: Platform, _username: &str) -> Result<PlatformStats> {
        if self.fail {
            return Err(Error::ServiceFailed { service: "sync" });
        }

        Ok(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::collect_chat;

    #[async_std::test]
    async fn chat_increments_accumulate_in_order() {
        let generator = MockAiGenerator {
            chat_increments: vec!["Hello".to_string(), ", ".to_string(), "world".to_string()],
            fail: false,
        };

        let message = collect_chat(&generator, json!({ "prompt": "hi" }))
            .await
            .unwrap();

        assert_eq!(message, "Hello, world");
    }

    #[async_std::test]
    async fn failed_stream_surfaces_service_error() {
        let generator = MockAiGenerator {
            chat_increments: vec![],
            fail: true,
        };

        assert_eq!(
            collect_chat(&generator, json!({})).await,
            Err(Error::ServiceFailed { service: "ai" })
        );
    }

    #[async_std::test]
    async fn gateway_reports_opaque_transaction_id() {
        let gateway = MockPaymentGateway::default();

        let tx = gateway.charge(49.99, json!({ "course": "c1" })).await.unwrap();
        assert!(tx.starts_with("tx_"));

        let failing = MockPaymentGateway { fail: true };
        assert_eq!(
            failing.charge(49.99, json!({})).await,
            Err(Error::ServiceFailed { service: "payment" })
        );
    }
}
