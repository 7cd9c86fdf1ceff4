use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    DEFAULT_DIM_ROOM, DEFAULT_MAX_STEPS, DEFAULT_NUM_BOXES, GETTING_CLOSER_REWARD,
    GETTING_FARTHER_REWARD, PENALTY_BOX_OFF_TARGET, PENALTY_FOR_STEP, REWARD_BOX_ON_TARGET,
    REWARD_FINISHED,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// `(rows, cols)` every room handed to the environment must have.
    pub dim_room: (usize, usize),
    pub max_steps: u32,
    pub num_boxes: usize,
    pub rewards: RewardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub penalty_for_step: f64,
    pub penalty_box_off_target: f64,
    pub reward_box_on_target: f64,
    pub reward_finished: f64,
    pub getting_closer_reward: f64,
    pub getting_farther_reward: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            dim_room: DEFAULT_DIM_ROOM,
            max_steps: DEFAULT_MAX_STEPS,
            num_boxes: DEFAULT_NUM_BOXES,
            rewards: RewardConfig::default(),
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            penalty_for_step: PENALTY_FOR_STEP,
            penalty_box_off_target: PENALTY_BOX_OFF_TARGET,
            reward_box_on_target: REWARD_BOX_ON_TARGET,
            reward_finished: REWARD_FINISHED,
            getting_closer_reward: GETTING_CLOSER_REWARD,
            getting_farther_reward: GETTING_FARTHER_REWARD,
        }
    }
}

impl EnvConfig {
    pub fn from_json(json: &str) -> Result<EnvConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<EnvConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        EnvConfig::from_json(&text)
    }
}
