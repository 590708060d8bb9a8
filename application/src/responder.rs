use crate::canned_responder::CannedResponder;
use crate::remote_responder::RemoteResponder;
use domain::message::Message;
use domain::responder::ResponseGenerator;
use infrastructure::config::{Config, Variant};
use infrastructure::gemini_client::GeminiClient;
use shared::types::Result;

pub enum Responder {
    Canned(CannedResponder),
    Remote(RemoteResponder<GeminiClient>),
}

impl Responder {
    pub fn from_config(config: &Config) -> Self {
        match config.variant {
            Variant::Canned => Responder::Canned(CannedResponder::from_config(config)),
            Variant::Remote => {
                if !config.has_api_key() {
                    tracing::warn!("GEMINI_API_KEY is not set; every reply will be a fallback phrase");
                }
                Responder::Remote(RemoteResponder::new(GeminiClient::new(config)))
            }
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Responder::Canned(_) => Variant::Canned,
            Responder::Remote(_) => Variant::Remote,
        }
    }
}

impl ResponseGenerator for Responder {
    async fn generate(&self, user_text: &str, history: &[Message]) -> Result<String> {
        match self {
            Responder::Canned(canned) => canned.generate(user_text, history).await,
            Responder::Remote(remote) => remote.generate(user_text, history).await,
        }
    }
}
