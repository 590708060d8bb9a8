/// Where the current turn stands. Busy means anything but `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    /// User message accepted and appended.
    Sending,
    /// Waiting on the response generator.
    AwaitingReply,
}

impl TurnPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, TurnPhase::Idle)
    }
}
