//! Keyed remote-resource lifecycle shared by every view.
//!
//! Each view owns one [`RemoteResource`]: a request key plus the
//! `Idle → Loading → Success | Failure` state of the request issued for
//! that key. Starting a new key unconditionally returns to `Loading` and
//! clears the previous value and error, so a view can never display a
//! stale result next to a fresh spinner.
//!
//! Resolutions carry the key they were issued for. A resolution whose key
//! no longer matches the resource's current key is discarded, which keeps
//! an out-of-order response for a superseded request from overwriting the
//! state of a newer one.

/// Lifecycle of a single request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

// Manual impl: the derive would demand `T: Default` for a variant that
// holds no `T` at all.
impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// A request key paired with the state of the request it identifies.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResource<K, T> {
    key: Option<K>,
    state: RequestState<T>,
}

impl<K, T> Default for RemoteResource<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            state: RequestState::Idle,
        }
    }
}

impl<K: PartialEq, T> RemoteResource<K, T> {
    /// Starts a request for `key`: transitions to `Loading` from any state
    /// and drops the previous value/error. The caller is responsible for
    /// actually issuing the request.
    pub fn begin(&mut self, key: K) {
        self.key = Some(key);
        self.state = RequestState::Loading;
    }

    /// Applies a resolved request, unless the resource has moved on to a
    /// different key since the request was issued.
    pub fn resolve(&mut self, key: &K, result: Result<T, String>) {
        if self.key.as_ref() != Some(key) {
            return;
        }
        self.state = match result {
            Ok(value) => RequestState::Success(value),
            Err(message) => RequestState::Failure(message),
        };
    }

    /// Back to `Idle` with no key; any in-flight resolution becomes stale.
    pub fn reset(&mut self) {
        self.key = None;
        self.state = RequestState::Idle;
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> RemoteResource<String, u32> {
        RemoteResource::default()
    }

    #[test]
    fn starts_idle_with_no_key() {
        let res = resource();
        assert_eq!(res.state(), &RequestState::Idle);
        assert!(res.key().is_none());
    }

    #[test]
    fn begin_transitions_to_loading() {
        let mut res = resource();
        res.begin("alice".to_string());
        assert!(res.state().is_loading());
        assert_eq!(res.key(), Some(&"alice".to_string()));
    }

    #[test]
    fn begin_clears_previous_success() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.resolve(&"alice".to_string(), Ok(1));
        res.begin("bob".to_string());
        assert!(res.state().is_loading());
        assert!(res.state().value().is_none());
    }

    #[test]
    fn begin_clears_previous_failure() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.resolve(&"alice".to_string(), Err("boom".to_string()));
        res.begin("alice".to_string());
        assert!(res.state().is_loading());
        assert!(res.state().error().is_none());
    }

    #[test]
    fn resolve_success_stores_value() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.resolve(&"alice".to_string(), Ok(7));
        assert_eq!(res.state().value(), Some(&7));
    }

    #[test]
    fn resolve_failure_stores_message() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.resolve(&"alice".to_string(), Err("User not found".to_string()));
        assert_eq!(res.state().error(), Some("User not found"));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.begin("bob".to_string());
        // alice's request resolves after the key moved on
        res.resolve(&"alice".to_string(), Ok(1));
        assert!(res.state().is_loading());
        res.resolve(&"bob".to_string(), Ok(2));
        assert_eq!(res.state().value(), Some(&2));
    }

    #[test]
    fn stale_resolution_after_current_resolved_is_discarded() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.begin("bob".to_string());
        res.resolve(&"bob".to_string(), Ok(2));
        // alice arrives last but must not win
        res.resolve(&"alice".to_string(), Ok(1));
        assert_eq!(res.state().value(), Some(&2));
    }

    #[test]
    fn same_key_refetch_resolves_again() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.resolve(&"alice".to_string(), Ok(1));
        res.begin("alice".to_string());
        assert!(res.state().is_loading());
        res.resolve(&"alice".to_string(), Ok(1));
        assert_eq!(res.state().value(), Some(&1));
    }

    #[test]
    fn resolve_after_reset_is_discarded() {
        let mut res = resource();
        res.begin("alice".to_string());
        res.reset();
        res.resolve(&"alice".to_string(), Ok(1));
        assert_eq!(res.state(), &RequestState::Idle);
    }
}
