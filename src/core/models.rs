use serde::{Deserialize, Serialize};

/// Contents of one grid position. The discriminants are the integer codes
/// external consumers see in raw observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    Wall = 0,
    Floor = 1,
    Target = 2,
    BoxOnTarget = 3,
    Box = 4,
    /// The player, whatever lies beneath it.
    Player = 5,
}

/// Grid coordinate, `i` is the row and `j` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A decoded action. Integer codes only exist at the boundary, see
/// [`Action::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Noop,
    Push(Direction),
    Move(Direction),
    Pull(Direction),
}

/// What a single transition did to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transition {
    pub moved_player: bool,
    pub moved_box: bool,
}
