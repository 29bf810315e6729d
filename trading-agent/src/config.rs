use execution_engine::AnalyzerConfig;
use serde::{Deserialize, Serialize};

fn default_max_position() -> u32 {
    10
}

/// Trading policy knobs of an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Hard ceiling on units held per instrument, enforced when buying.
    #[serde(default = "default_max_position")]
    max_position: u32,
    #[serde(default)]
    analyzer: AnalyzerConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_position: default_max_position(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl AgentConfig {
    pub fn new(max_position: u32, analyzer: AnalyzerConfig) -> Self {
        Self {
            max_position,
            analyzer,
        }
    }

    pub fn with_max_position(mut self, max_position: u32) -> Self {
        self.max_position = max_position;
        self
    }

    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    pub fn analyzer(&self) -> &AnalyzerConfig {
        &self.analyzer
    }
}
