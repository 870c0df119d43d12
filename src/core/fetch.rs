//! # Fetch State
//!
//! Every screen-level fetch is a `{loading, error, data}` triple plus a
//! generation counter. `begin()` bumps the generation; results carrying an
//! older generation are ignored so a slow response can't overwrite a newer
//! one. `loading` is always false after `finish()`, success or failure.

use log::warn;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: T,
    generation: u64,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> FetchState<T> {
    /// Idle state holding `data`. Not loading until `begin()`.
    pub fn new(data: T) -> Self {
        Self {
            loading: false,
            error: None,
            data,
            generation: 0,
        }
    }

    /// Start a new attempt. Clears any previous error.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if a result tagged `generation` belongs to the current attempt.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Record a failure. The first error of an attempt wins; later ones are
    /// dropped.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(message.into());
        }
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }
}

/// Result of a fetch that never fails: the data to show, plus the error that
/// forced a fallback (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub error: Option<ApiError>,
}

/// Absorb a failed fetch into fallback data.
///
/// Logs the failure under `what`. `fallback` receives the error so callers
/// can pick a record per failure kind.
pub fn with_fallback<T>(
    result: Result<T, ApiError>,
    what: &str,
    fallback: impl FnOnce(&ApiError) -> T,
) -> Fetched<T> {
    match result {
        Ok(data) => Fetched { data, error: None },
        Err(e) => {
            warn!("Failed to fetch {}: {}", what, e);
            Fetched {
                data: fallback(&e),
                error: Some(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_loading_and_bumps_generation() {
        let mut state: FetchState<Vec<u8>> = FetchState::default();
        assert!(!state.loading);
        let first = state.begin();
        let second = state.begin();
        assert!(state.loading);
        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
    }

    #[test]
    fn test_first_error_wins() {
        let mut state: FetchState<()> = FetchState::default();
        state.begin();
        state.fail("Failed to fetch hourly weather data");
        state.fail("Failed to fetch daily weather data");
        state.finish();
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch hourly weather data")
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state: FetchState<()> = FetchState::default();
        state.begin();
        state.fail("boom");
        state.finish();
        state.begin();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_with_fallback_passes_through_success() {
        let fetched = with_fallback(Ok(vec![1, 2]), "numbers", |_| vec![0]);
        assert_eq!(fetched.data, vec![1, 2]);
        assert!(fetched.error.is_none());
    }

    #[test]
    fn test_with_fallback_uses_error_kind() {
        let fetched = with_fallback(
            Err::<&str, _>(ApiError::Status {
                status: 503,
                body: "down".into(),
            }),
            "thing",
            |e| match e {
                ApiError::Status { .. } => "status",
                _ => "other",
            },
        );
        assert_eq!(fetched.data, "status");
        assert!(matches!(fetched.error, Some(ApiError::Status { status: 503, .. })));
    }

    #[test]
    fn test_offline_backend_gets_connection_fallback() {
        use crate::api::GuestApi;
        use crate::core::services::fallback_requests;
        use crate::test_support::StubApi;

        let result = tokio_test::block_on(StubApi.service_requests());
        let fetched = with_fallback(result, "service requests", fallback_requests);
        assert_eq!(fetched.data.len(), 1);
        assert_eq!(fetched.data[0].title, "Connection error");
        assert!(matches!(fetched.error, Some(ApiError::Network(_))));
    }
}
