//! Harness configuration.

/// Per-harness settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Declared-case frames to skip when resolving `#[data_driven]` cases.
    ///
    /// `0` resolves the innermost `#[data_driven]` function currently running on this thread. Use `1` from a
    /// `#[data_driven]` helper that should arrange the cases of the test that called it.
    pub skip_frames: usize,
    /// Emit a `trace` event before each case is invoked.
    pub trace_cases: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            skip_frames: 0,
            trace_cases: true,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of declared-case frames to skip
    pub fn with_skip_frames(mut self, skip_frames: usize) -> Self {
        self.skip_frames = skip_frames;
        self
    }

    /// Enable or disable per-case trace events
    pub fn with_trace_cases(mut self, trace_cases: bool) -> Self {
        self.trace_cases = trace_cases;
        self
    }
}
