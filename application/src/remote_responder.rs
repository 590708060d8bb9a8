use crate::prompt::{build_prompt, DEFAULT_PERSONA};
use domain::message::Message;
use domain::responder::{CompletionBackend, ResponseGenerator};
use shared::telemetry::Telemetry;
use shared::types::Result;
use shared::utils::pick_phrase;

pub const FALLBACK_PHRASES: &[&str] = &[
    "죄송해요, 지금은 답변을 가져올 수 없어요 😢",
    "연결이 불안정한 것 같아요... 잠시 후 다시 말해 주세요 🔌",
    "앗, 생각이 잠깐 멈췄어요 🤯",
    "서버가 대답을 안 해요... 다시 한번 보내 주실래요? ⏳",
];

/// History-aware replies from a hosted model. Failures become a fallback phrase.
pub struct RemoteResponder<B> {
    backend: B,
    persona: String,
}

impl<B: CompletionBackend> RemoteResponder<B> {
    pub fn new(backend: B) -> Self {
        Self::with_persona(backend, DEFAULT_PERSONA)
    }

    pub fn with_persona(backend: B, persona: &str) -> Self {
        Self {
            backend,
            persona: persona.to_string(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> ResponseGenerator for RemoteResponder<B>
where
    B: CompletionBackend + Send + Sync,
{
    async fn generate(&self, user_text: &str, history: &[Message]) -> Result<String> {
        let prompt = build_prompt(&self.persona, history, user_text);
        let timer = Telemetry::new();
        match self.backend.complete(&prompt).await {
            Ok(reply) => {
                tracing::info!(
                    latency_ms = timer.elapsed_ms(),
                    reply_chars = reply.chars().count(),
                    "remote reply received"
                );
                Ok(reply)
            }
            Err(err) => {
                tracing::warn!(
                    latency_ms = timer.elapsed_ms(),
                    error = %err,
                    "remote generation failed; using fallback"
                );
                Ok(pick_phrase(FALLBACK_PHRASES).to_string())
            }
        }
    }
}
