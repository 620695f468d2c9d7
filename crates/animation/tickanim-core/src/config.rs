//! Core configuration for tickanim-core.

use serde::{Deserialize, Serialize};

use crate::error::AnimError;

/// When a record's completion callback fires.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Once, when the record finishes on its own and leaves the registry.
    /// Repeating records never fire.
    #[default]
    Finish,
    /// At the end of every full cycle (forward, or forward + playback).
    EveryCycle,
    /// At the end of every leg.
    EveryLeg,
}

/// Configuration for engine sizing and tick behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tick delta in ms assumed by `Engine::update_nominal`.
    pub nominal_tick_ms: u32,

    /// Upper bound on simultaneously active records; `None` = unbounded.
    pub max_records: Option<usize>,

    /// Registry pre-allocation.
    pub initial_capacity: usize,

    /// Cadence of completion callbacks.
    pub completion: CompletionPolicy,

    /// Fill `Outputs::changes` with every applied value. Events are always kept.
    pub record_changes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nominal_tick_ms: 30,
            max_records: None,
            initial_capacity: 16,
            completion: CompletionPolicy::Finish,
            record_changes: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), AnimError> {
        if self.nominal_tick_ms == 0 {
            return Err(AnimError::InvalidConfig {
                reason: "nominal_tick_ms must be > 0".into(),
            });
        }
        if self.max_records == Some(0) {
            return Err(AnimError::InvalidConfig {
                reason: "max_records must be > 0 when set".into(),
            });
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, AnimError> {
        let cfg: Config = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
