use std::ops::{Add, Sub};

use crate::core::consts::{ACTION_COUNT, ACTION_LOOKUP, DIRECTION_ORDER};
use crate::core::{Action, Cell, Direction, EngineError, Vec2};

impl Cell {
    /// Free for a player or box to enter.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Target)
    }

    pub fn is_box(&self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnTarget)
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        Some(match code {
            0 => Cell::Wall,
            1 => Cell::Floor,
            2 => Cell::Target,
            3 => Cell::BoxOnTarget,
            4 => Cell::Box,
            5 => Cell::Player,
            _ => return None,
        })
    }

    /// The box overlay to draw on a cell whose fixed layer is `self`.
    pub fn box_over(&self) -> Cell {
        if *self == Cell::Target {
            Cell::BoxOnTarget
        } else {
            Cell::Box
        }
    }
}

impl Vec2 {
    pub fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }

    pub fn manhattan(&self, other: &Vec2) -> u32 {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i - rhs.i, j: self.j - rhs.j }
    }
}

impl Direction {
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl Action {
    /// Decodes an external action code. Codes outside `0..=12` are rejected.
    pub fn from_code(code: i64) -> Result<Action, EngineError> {
        let direction = |offset: i64| DIRECTION_ORDER[((code - offset) % 4) as usize];
        match code {
            0 => Ok(Action::Noop),
            1..=4 => Ok(Action::Push(direction(1))),
            5..=8 => Ok(Action::Move(direction(5))),
            9..=12 => Ok(Action::Pull(direction(1))),
            _ => Err(EngineError::InvalidAction(code)),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Action::Noop => 0,
            Action::Push(d) => 1 + d.index() as u8,
            Action::Move(d) => 5 + d.index() as u8,
            Action::Pull(d) => 9 + d.index() as u8,
        }
    }

    pub fn name(&self) -> &'static str {
        ACTION_LOOKUP[self.code() as usize]
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Action::Noop => None,
            Action::Push(d) | Action::Move(d) | Action::Pull(d) => Some(*d),
        }
    }

    pub fn all_actions() -> Vec<Action> {
        let mut actions = vec![Action::Noop];
        actions.extend(DIRECTION_ORDER.iter().map(|&d| Action::Push(d)));
        actions.extend(DIRECTION_ORDER.iter().map(|&d| Action::Move(d)));
        actions.extend(DIRECTION_ORDER.iter().map(|&d| Action::Pull(d)));
        actions
    }
}

impl TryFrom<i64> for Action {
    type Error = EngineError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Action::from_code(code)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction() {
            None => f.write_str(self.name()),
            Some(d) => {
                let verb = match self {
                    Action::Push(_) => "push",
                    Action::Move(_) => "move",
                    _ => "pull",
                };
                write!(f, "{} {}", verb, d.name())
            }
        }
    }
}

/// The code to name table, indexed by action code.
pub fn action_lookup() -> &'static [&'static str; ACTION_COUNT] {
    &ACTION_LOOKUP
}

/// Name for an external action code, `None` when the code is out of range.
pub fn action_name(code: i64) -> Option<&'static str> {
    usize::try_from(code).ok().and_then(|c| ACTION_LOOKUP.get(c).copied())
}
