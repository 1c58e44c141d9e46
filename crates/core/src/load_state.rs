//! Request lifecycle state machine.
//!
//! ```text
//! Idle ──begin──▶ Loading ──succeed──▶ Success(T)
//!                    │
//!                    └────fail────▶ Error(message)
//! ```
//!
//! `begin` is refused while a request is already in flight; `succeed` and
//! `fail` are ignored unless the state is `Loading`. Success and Error may
//! `begin` again.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    /// Enter `Loading`. Returns `false` (and changes nothing) if a request
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = LoadState::Loading;
        true
    }

    /// Complete the in-flight request with a value.
    pub fn succeed(&mut self, value: T) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = LoadState::Success(value);
        true
    }

    /// Complete the in-flight request with an error message.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = LoadState::Error(message.into());
        true
    }

    /// Return to `Idle`, dropping any value or error.
    pub fn reset(&mut self) {
        *self = LoadState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let mut state = LoadState::<u32>::default();
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(state.succeed(3));
        assert_eq!(state.value(), Some(&3));
    }

    #[test]
    fn begin_refused_while_loading() {
        let mut state = LoadState::<u32>::Idle;
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn completion_ignored_outside_loading() {
        let mut state = LoadState::<u32>::Idle;
        assert!(!state.succeed(1));
        assert!(!state.fail("boom"));
        assert_eq!(state, LoadState::Idle);
    }

    #[test]
    fn error_then_retry() {
        let mut state = LoadState::<u32>::Idle;
        state.begin();
        state.fail("Failed to load projects");
        assert_eq!(state.error(), Some("Failed to load projects"));
        assert!(state.begin());
        assert_eq!(state.error(), None);
    }
}
