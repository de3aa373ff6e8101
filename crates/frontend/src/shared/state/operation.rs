/// Lifecycle of one network-triggering action.
///
/// Every action on every screen goes through `begin`, which refuses to start
/// while the previous attempt is still pending. A new attempt, or `reset`,
/// discards the previous outcome.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OpState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> OpState<T> {
    /// Enter `Pending`. Returns `false`, leaving the state untouched, when an
    /// attempt is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = OpState::Pending;
        true
    }

    pub fn succeed(&mut self, value: T) {
        *self = OpState::Succeeded(value);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = OpState::Failed(message.into());
    }

    /// Back to `Idle` unless an attempt is in flight
    pub fn reset(&mut self) {
        if !self.is_pending() {
            *self = OpState::Idle;
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OpState::Pending)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, OpState::Idle)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            OpState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OpState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
