/// Lifecycle of a single validation exchange. Every `validate` call walks
/// this from `NotStarted` to exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    NotStarted,
    Exchanging,
    Decided,
    Failed,
}

impl ExchangeState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExchangeState::Decided | ExchangeState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExchangeState::NotStarted => "not-started",
            ExchangeState::Exchanging => "exchanging",
            ExchangeState::Decided => "decided",
            ExchangeState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ExchangeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
