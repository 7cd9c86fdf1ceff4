mod info;
mod push_pull_env;
mod render;
mod source;

pub use info::{StepInfo, StepResult};
pub use push_pull_env::PushPullEnv;
pub use render::{Observation, Render, RenderMode, SymbolRenderer};
pub use source::{FixedLevel, RoomSource};
