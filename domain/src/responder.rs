use crate::message::Message;
use shared::types::Result;

/// Produces the assistant reply for one turn.
pub trait ResponseGenerator {
    fn generate(
        &self,
        user_text: &str,
        history: &[Message],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// A hosted text-generation endpoint: whole prompt in, reply text out.
pub trait CompletionBackend {
    fn complete(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}
