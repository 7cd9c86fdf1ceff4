//! Transition engine for Sokoban with pull moves.
//!
//! [`core`] holds the grid model and the push/move/pull rules, [`env`] wraps
//! them with reward shaping, termination and rendering.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod env;
pub mod models;
#[cfg(test)]
mod test;

pub use config::{ConfigError, EnvConfig, RewardConfig};
pub use crate::core::{Action, Cell, Direction, EngineError, Room, Transition, Vec2};
pub use env::{Observation, PushPullEnv, RenderMode, StepInfo, StepResult};
