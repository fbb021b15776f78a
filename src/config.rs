//! Engine settings.

use serde::Deserialize;

/// What to do when a link leads back to a source that is still being mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Cut the link: the revisited member becomes `None`.
    #[default]
    Truncate,
    /// Fail the whole mapping with `MappingError::CycleDetected`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub cycle_policy: CyclePolicy,
    /// Maximum number of nested projections in flight for one call.
    pub max_depth: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::Truncate,
            max_depth: 32,
        }
    }
}

impl MapperConfig {
    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a JSON document. Missing keys keep their defaults.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }
}
