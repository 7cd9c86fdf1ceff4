mod model_helpers;
mod models;
mod update;
mod consts;
mod distance;
mod error;
mod room;

pub use models::{Action, Cell, Direction, Transition, Vec2};
pub use consts::*;
pub use distance::{box_target_distance, find_box_location, find_location, find_target_location};
pub use error::EngineError;
pub use model_helpers::{action_lookup, action_name};
pub use room::Room;
pub use update::step;
