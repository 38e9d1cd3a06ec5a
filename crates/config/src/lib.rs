//! # Config — Driver Configuration
//!
//! Environment-driven settings for the StrataIndex driver, with sensible
//! defaults so the binary runs unconfigured:
//!
//! ```text
//! STRATA_ENGINE    which engine to drive: flat | chunked | history  (default: chunked)
//! STRATA_GEN_CAP   generation capacity for the chunked engine       (default: 10000)
//! ```
//!
//! Unparsable values fall back to the defaults; a zero capacity is passed
//! through so the chunked engine can reject it at construction.

/// Default generation capacity for the chunked engine.
pub const DEFAULT_GENERATION_CAPACITY: usize = 10_000;

/// Which index engine the driver should construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    Flat,
    #[default]
    Chunked,
    History,
}

impl EngineKind {
    /// Parses an engine name as supplied via `STRATA_ENGINE`.
    /// Matching is case-insensitive; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "flat" => Some(Self::Flat),
            "chunked" => Some(Self::Chunked),
            "history" => Some(Self::History),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Chunked => "chunked",
            Self::History => "history",
        }
    }
}

/// Resolved driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub engine: EngineKind,
    pub generation_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            generation_capacity: DEFAULT_GENERATION_CAPACITY,
        }
    }
}

impl DriverConfig {
    /// Reads the configuration from `STRATA_*` environment variables,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let engine = std::env::var("STRATA_ENGINE")
            .ok()
            .and_then(|s| EngineKind::parse(&s))
            .unwrap_or(defaults.engine);
        let generation_capacity = std::env::var("STRATA_GEN_CAP")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.generation_capacity);
        Self {
            engine,
            generation_capacity,
        }
    }
}
