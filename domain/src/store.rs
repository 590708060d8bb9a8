use crate::message::{Message, MessageId, Sender};
use chrono::Local;

pub const DEFAULT_GREETING: &str = "안녕하세요! 저는 Claude입니다. 무엇을 도와드릴까요?";

/// Append-only, causally ordered conversation log.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    last_id: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_greeting(greeting: &str) -> Self {
        let mut store = Self::new();
        store.append(Sender::Assistant, greeting);
        store
    }

    pub fn append(&mut self, sender: Sender, text: &str) -> Message {
        let timestamp = Local::now();
        let id = self.next_id(timestamp.timestamp_millis().max(0) as u64);
        let message = Message {
            id,
            text: text.to_string(),
            sender,
            timestamp,
        };
        self.messages.push(message.clone());
        message
    }

    // Creation-time ids, bumped so two appends in one millisecond stay distinct.
    fn next_id(&mut self, now_ms: u64) -> MessageId {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        MessageId(id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// The last `min(n, len)` messages, oldest first.
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
