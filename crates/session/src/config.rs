use d5sim_core::SimConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pause between hands while a session plays on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Turbo,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Turbo];

    pub fn delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1500),
            Speed::Normal => Duration::from_millis(800),
            Speed::Turbo => Duration::from_millis(100),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Turbo => "Turbo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub sim: SimConfig,
    pub speed: Speed,
}

impl SessionConfig {
    pub fn new(sim: SimConfig) -> Self {
        Self {
            sim,
            speed: Speed::default(),
        }
    }
}
