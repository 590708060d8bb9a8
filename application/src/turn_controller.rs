use crate::remote_responder::FALLBACK_PHRASES;
use domain::message::{Message, Sender};
use domain::responder::ResponseGenerator;
use domain::store::{MessageStore, DEFAULT_GREETING};
use domain::turn::TurnPhase;
use shared::telemetry::Telemetry;
use shared::utils::pick_phrase;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    TurnInFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed { user: Message, reply: Message },
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Completed { reply, .. } => Some(reply),
            SubmitOutcome::Ignored(_) => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, SubmitOutcome::Ignored(_))
    }
}

/// Runs one user turn at a time against a response generator.
///
/// The phase lock is the only gate: a submit that finds a turn in flight is
/// dropped on the spot, never queued. Neither lock is held across an await.
pub struct TurnController<G> {
    generator: G,
    store: Mutex<MessageStore>,
    phase: Mutex<TurnPhase>,
    draft: Mutex<String>,
}

// Puts the phase back to idle however the turn ends. A turn abandoned
// before `finish` still gets a fallback reply so senders keep alternating.
struct TurnGuard<'a> {
    phase: &'a Mutex<TurnPhase>,
    store: &'a Mutex<MessageStore>,
    finished: bool,
}

impl TurnGuard<'_> {
    fn advance(&self, next: TurnPhase) {
        *lock(self.phase) = next;
    }

    fn finish(&mut self, text: &str) -> Message {
        self.finished = true;
        lock(self.store).append(Sender::Assistant, text)
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let reply = lock(self.store).append(Sender::Assistant, pick_phrase(FALLBACK_PHRASES));
            tracing::warn!(reply_id = %reply.id, "turn abandoned before a reply; appended fallback");
        }
        *lock(self.phase) = TurnPhase::Idle;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<G: ResponseGenerator> TurnController<G> {
    pub fn new(generator: G) -> Self {
        Self::with_store(generator, MessageStore::with_greeting(DEFAULT_GREETING))
    }

    pub fn with_store(generator: G, store: MessageStore) -> Self {
        Self {
            generator,
            store: Mutex::new(store),
            phase: Mutex::new(TurnPhase::Idle),
            draft: Mutex::new(String::new()),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn messages(&self) -> Vec<Message> {
        lock(&self.store).snapshot()
    }

    pub fn len(&self) -> usize {
        lock(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.store).is_empty()
    }

    pub fn phase(&self) -> TurnPhase {
        *lock(&self.phase)
    }

    pub fn is_busy(&self) -> bool {
        self.phase().is_busy()
    }

    pub fn set_draft(&self, text: &str) {
        *lock(&self.draft) = text.to_string();
    }

    pub fn draft(&self) -> String {
        lock(&self.draft).clone()
    }

    /// Submit whatever is in the pending-input buffer.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let text = self.draft();
        self.submit(&text).await
    }

    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        if raw_input.trim().is_empty() {
            tracing::debug!("ignoring empty submission");
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }

        {
            let mut phase = lock(&self.phase);
            if phase.is_busy() {
                tracing::debug!(phase = ?*phase, "ignoring submission while a turn is in flight");
                return SubmitOutcome::Ignored(IgnoreReason::TurnInFlight);
            }
            *phase = TurnPhase::Sending;
        }
        let mut guard = TurnGuard {
            phase: &self.phase,
            store: &self.store,
            finished: false,
        };

        let (history, user) = {
            let mut store = lock(&self.store);
            let history = store.snapshot();
            let user = store.append(Sender::User, raw_input);
            (history, user)
        };
        lock(&self.draft).clear();
        guard.advance(TurnPhase::AwaitingReply);
        tracing::debug!(message_id = %user.id, history_len = history.len(), "turn started");

        let timer = Telemetry::new();
        let text = match self.generator.generate(raw_input, &history).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "response generator failed; using fallback");
                pick_phrase(FALLBACK_PHRASES).to_string()
            }
        };

        let reply = guard.finish(&text);
        drop(guard);
        tracing::info!(
            user_id = %user.id,
            reply_id = %reply.id,
            latency_ms = timer.elapsed_ms(),
            "turn completed"
        );
        SubmitOutcome::Completed { user, reply }
    }
}
