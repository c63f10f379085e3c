use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_move_duration_ms() -> u64 {
    200
}

fn default_move_steps() -> u32 {
    24
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PointerConfig {
    /// Time the pointer takes to glide to its target.
    #[serde(default = "default_move_duration_ms")]
    pub move_duration_ms: u64,
    #[serde(default = "default_move_steps")]
    pub move_steps: u32,
}

impl PointerConfig {
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            move_duration_ms: default_move_duration_ms(),
            move_steps: default_move_steps(),
        }
    }
}
