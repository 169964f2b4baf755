//! Contracts for the platform's external collaborators
//!
//! The generative-AI service, the payment gateway and the stat-sync
//! service are opaque remote capabilities. The core never mutates the
//! store until one of them has answered successfully.

mod mock;

pub use mock::*;

use async_std::channel::{unbounded, Sender};
use serde_json::Value;

use crate::{Result, Success};

/// Kind of generated content requested from the AI collaborator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationKind {
    Roadmap,
    CareerPath,
    ResumeText,
    ChatTurn,
    SpeechAudio,
    TrendReport,
}

/// Generative-AI collaborator
#[async_trait]
pub trait AiGenerator: std::marker::Sync + std::marker::Send {
    /// Produce structured content for a single request
    async fn generate(&self, kind: GenerationKind, input: Value) -> Result<Value>;

    /// Stream a chat turn as text increments
    ///
    /// The sink is closed when the turn completes; a dropped sink
    /// without completion means the turn was cancelled.
    async fn stream_chat(&self, input: Value, sink: Sender<String>) -> Success;
}

/// Payment gateway collaborator
///
/// Confirms a charge and reports its opaque transaction identifier,
/// which the caller hands to `Payment::record`.
#[async_trait]
pub trait PaymentGateway: std::marker::Sync + std::marker::Send {
    async fn charge(&self, amount: f64, metadata: Value) -> Result<String>;
}

/// Competitive-programming stat collaborator
#[async_trait]
pub trait AccountSync: std::marker::Sync + std::marker::Send {
    async fn fetch_stats(
        &self,
        platform: crate::models::Platform,
        username: &str,
    ) -> Result<crate::models::PlatformStats>;
}

/// Run one streamed chat turn to completion
///
/// Increments are appended to the in-progress message as they arrive;
/// the message is only final once the producer closes the channel.
pub async fn collect_chat(generator: &dyn AiGenerator, input: Value) -> Result<String> {
    let (sink, source) = unbounded();

    generator.stream_chat(input, sink).await?;

    let mut message = String::new();
    while let Ok(increment) = source.recv().await {
        message.push_str(&increment);
    }

    Ok(message)
}
