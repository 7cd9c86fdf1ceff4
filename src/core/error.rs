use thiserror::Error;

use crate::core::{Cell, Vec2};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid action code {0}, expected 0..=12")]
    InvalidAction(i64),
    #[error("room has no rows")]
    EmptyRoom,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("fixed grid is {fixed:?} but dynamic grid is {dynamic:?}")]
    DimensionMismatch {
        fixed: (usize, usize),
        dynamic: (usize, usize),
    },
    #[error("room is {found:?} but the environment expects {expected:?}")]
    RoomSizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("player position {0:?} is outside the room")]
    PlayerOutOfBounds(Vec2),
    #[error("player position {position:?} holds {found:?} instead of the player")]
    PlayerCellMismatch { position: Vec2, found: Cell },
    #[error("room contains {0} player cells, expected exactly one")]
    MultiplePlayers(usize),
    #[error("level contains no player")]
    MissingPlayer,
    #[error("cell {position:?} holds {dynamic:?} over fixed {fixed:?}")]
    OverlayMismatch {
        position: Vec2,
        fixed: Cell,
        dynamic: Cell,
    },
}
