use crate::core::{Cell, EngineError, Vec2};

/// Grid state of one episode: the fixed layout, the dynamic occupancy layer
/// drawn on top of it, and the player coordinate.
///
/// Mutation goes through `&mut self` only. A room shared by several
/// environments (vectorized setups) needs external synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    fixed: Vec<Vec<Cell>>,
    state: Vec<Vec<Cell>>,
    player: Vec2,
}

impl Room {
    /// Builds a room from the two layers handed over by a room generator.
    /// Every consistency problem is reported here so stepping never has to
    /// re-check it.
    pub fn new(
        fixed: Vec<Vec<Cell>>,
        state: Vec<Vec<Cell>>,
        player: Vec2,
    ) -> Result<Room, EngineError> {
        let fixed_dim = grid_dim(&fixed)?;
        let state_dim = grid_dim(&state)?;
        if fixed_dim != state_dim {
            return Err(EngineError::DimensionMismatch {
                fixed: fixed_dim,
                dynamic: state_dim,
            });
        }

        let room = Room {
            fixed,
            state,
            player,
        };
        if !room.contains(&player) {
            return Err(EngineError::PlayerOutOfBounds(player));
        }
        let under_player = room[player];
        if under_player != Cell::Player {
            return Err(EngineError::PlayerCellMismatch {
                position: player,
                found: under_player,
            });
        }

        let mut players = 0;
        for (position, dynamic) in room.cells() {
            let fixed = room.fixed[position.i as usize][position.j as usize];
            if !overlay_allowed(fixed, dynamic) {
                return Err(EngineError::OverlayMismatch {
                    position,
                    fixed,
                    dynamic,
                });
            }
            if dynamic == Cell::Player {
                players += 1;
            }
        }
        if players != 1 {
            return Err(EngineError::MultiplePlayers(players));
        }

        Ok(room)
    }

    pub fn height(&self) -> i32 {
        self.state.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.state.is_empty() {
            0
        } else {
            self.state[0].len() as i32
        }
    }

    /// `(rows, cols)`, the `dim_room` of the environment configuration.
    pub fn dim(&self) -> (usize, usize) {
        (self.height() as usize, self.width() as usize)
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height() && pos.j >= 0 && pos.j < self.width()
    }

    /// Dynamic cell at `pos`, `None` outside the room.
    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[*pos])
    }

    /// Fixed cell at `pos`, `None` outside the room.
    pub fn fixed_at(&self, pos: &Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.fixed[pos.i as usize][pos.j as usize])
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn fixed_grid(&self) -> &[Vec<Cell>] {
        &self.fixed
    }

    pub fn state_grid(&self) -> &[Vec<Cell>] {
        &self.state
    }

    /// Dynamic cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.state.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &c)| (Vec2 { i: i as i32, j: j as i32 }, c))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    /// Restores `pos` to whatever the fixed layer holds there.
    pub(crate) fn clear(&mut self, pos: Vec2) {
        let fixed = self.fixed[pos.i as usize][pos.j as usize];
        self[pos] = fixed;
    }

    pub(crate) fn place_box(&mut self, pos: Vec2) {
        let fixed = self.fixed[pos.i as usize][pos.j as usize];
        self[pos] = fixed.box_over();
    }

    pub(crate) fn place_player(&mut self, pos: Vec2) {
        self[pos] = Cell::Player;
        self.player = pos;
    }
}

impl std::ops::Index<Vec2> for Room {
    type Output = Cell;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.state[index.i as usize][index.j as usize]
    }
}

impl std::ops::IndexMut<Vec2> for Room {
    fn index_mut(&mut self, index: Vec2) -> &mut Self::Output {
        &mut self.state[index.i as usize][index.j as usize]
    }
}

fn grid_dim(grid: &[Vec<Cell>]) -> Result<(usize, usize), EngineError> {
    let Some(first) = grid.first() else {
        return Err(EngineError::EmptyRoom);
    };
    let width = first.len();
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != width {
            return Err(EngineError::RaggedGrid {
                row,
                expected: width,
                found: cells.len(),
            });
        }
    }
    Ok((grid.len(), width))
}

fn overlay_allowed(fixed: Cell, dynamic: Cell) -> bool {
    match (fixed, dynamic) {
        (Cell::Wall, Cell::Wall) => true,
        (Cell::Floor, Cell::Floor | Cell::Box | Cell::Player) => true,
        (Cell::Target, Cell::Target | Cell::BoxOnTarget | Cell::Player) => true,
        _ => false,
    }
}
