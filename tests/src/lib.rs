//! Shared fakes for the integration tests.

use domain::message::{Message, Sender};
use domain::responder::CompletionBackend;
use domain::store::{MessageStore, DEFAULT_GREETING};
use shared::types::Result;
use std::sync::Mutex;

/// Records every prompt and answers with a fixed reply, or fails when `reply` is `None`.
#[derive(Default)]
pub struct ScriptedBackend {
    pub reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(anyhow::anyhow!("503 service unavailable")),
        }
    }
}

/// Greeting plus `turns` alternating user/assistant pairs tagged `u{i}` / `a{i}`.
pub fn seeded_store(turns: usize) -> MessageStore {
    let mut store = MessageStore::with_greeting(DEFAULT_GREETING);
    for i in 0..turns {
        store.append(Sender::User, &format!("u{i}"));
        store.append(Sender::Assistant, &format!("a{i}"));
    }
    store
}

pub fn assert_alternating(messages: &[Message]) {
    assert_eq!(messages[0].sender, Sender::Assistant);
    for pair in messages[1..].chunks(2) {
        assert_eq!(pair[0].sender, Sender::User);
        if let Some(reply) = pair.get(1) {
            assert_eq!(reply.sender, Sender::Assistant);
        }
    }
}
