/// Result of one failover evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailoverDecision {
    /// No server qualifies; the active server is left alone.
    NoCandidate,
    /// The best candidate is already active.
    AlreadyActive,
    /// Another promotion is in flight.
    Busy,
    /// A promotion to `target` was announced and will run after the delay.
    Scheduled { target: String },
}
