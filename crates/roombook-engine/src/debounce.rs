use std::time::{Duration, Instant};

/// Quiet period a typed keyword must survive before it is applied.
pub const KEYWORD_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Debouncer for keyword/typing input.
///
/// Typed input is not applied to the filter until it has been stable for the
/// quiet period. Timestamps are injected by the caller, so correctness can be
/// asserted without real sleeps. This is a responsiveness concern only; the
/// applied value is always the final state of the input.
#[derive(Debug)]
pub struct KeywordDebouncer {
    pending: Option<(String, Instant)>,
    quiet: Duration,
}

impl KeywordDebouncer {
    pub fn new() -> Self {
        Self::with_quiet_period(KEYWORD_QUIET_PERIOD)
    }

    pub fn with_quiet_period(quiet: Duration) -> Self {
        Self {
            pending: None,
            quiet,
        }
    }

    /// Record a keystroke. Supersedes any not-yet-applied input.
    pub fn input(&mut self, text: impl Into<String>, at: Instant) {
        self.pending = Some((text.into(), at));
    }

    /// Take the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.duration_since(*at) >= self.quiet => {
                self.pending.take().map(|(text, _)| text)
            }
            _ => None,
        }
    }

    /// Take the pending value immediately, ignoring the quiet period.
    /// Used when the view is about to render its final state.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }
}

impl Default for KeywordDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
