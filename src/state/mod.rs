//! Request lifecycle state
//!
//! Every network operation is tracked by a [`RequestState`] owned by the
//! page that issued it and replaced wholesale on every transition. Renderers
//! only ever see an immutable snapshot.

/// Lifecycle of a single backend request.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Success(T),
    Error(String),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic counter that tags each issued request so a response that has
/// been superseded by a newer submission is dropped instead of applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Advance to the next sequence number and return it.
    pub fn advance(&mut self) -> RequestSeq {
        self.0 += 1;
        *self
    }

    /// Whether the given issued tag is still the latest one.
    pub fn is_current(&self, issued: RequestSeq) -> bool {
        *self == issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_accessors() {
        let idle: RequestState<i32> = RequestState::Idle;
        assert!(!idle.is_pending());
        assert!(idle.data().is_none());
        assert!(idle.error().is_none());

        assert!(RequestState::<i32>::Pending.is_pending());
        assert_eq!(RequestState::Success(7).data(), Some(&7));
        assert_eq!(
            RequestState::<i32>::Error("boom".to_string()).error(),
            Some("boom")
        );
    }

    #[test]
    fn stale_responses_are_detected() {
        let mut seq = RequestSeq::default();
        let first = seq.advance();
        assert!(seq.is_current(first));

        // A second submission supersedes the first.
        let second = seq.advance();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
