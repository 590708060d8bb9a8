pub mod message;
pub mod responder;
pub mod store;
pub mod turn;

pub use message::{Message, MessageId, Sender};
pub use responder::{CompletionBackend, ResponseGenerator};
pub use store::{MessageStore, DEFAULT_GREETING};
pub use turn::TurnPhase;
