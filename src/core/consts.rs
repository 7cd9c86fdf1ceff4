use crate::core::Direction;

pub const DEFAULT_DIM_ROOM: (usize, usize) = (10, 10);
pub const DEFAULT_MAX_STEPS: u32 = 120;
pub const DEFAULT_NUM_BOXES: usize = 3;

pub const PENALTY_FOR_STEP: f64 = -0.1;
pub const PENALTY_BOX_OFF_TARGET: f64 = -1.0;
pub const REWARD_BOX_ON_TARGET: f64 = 1.0;
pub const REWARD_FINISHED: f64 = 10.0;
pub const GETTING_CLOSER_REWARD: f64 = 0.1;
pub const GETTING_FARTHER_REWARD: f64 = -0.1;

/// Direction order shared by every action class: up, down, left, right.
pub const DIRECTION_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

pub const ACTION_COUNT: usize = 13;

pub const ACTION_LOOKUP: [&str; ACTION_COUNT] = [
    "no operation",
    "push up",
    "push down",
    "push left",
    "push right",
    "move up",
    "move down",
    "move left",
    "move right",
    "pull up",
    "pull down",
    "pull left",
    "pull right",
];
