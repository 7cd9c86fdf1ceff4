use crate::core::{Cell, Room, Vec2};

/// First cell holding `cell` in row-major order.
pub fn find_location(room: &Room, cell: Cell) -> Option<Vec2> {
    room.cells().find(|&(_, c)| c == cell).map(|(pos, _)| pos)
}

/// First box that is not yet on a target.
pub fn find_box_location(room: &Room) -> Option<Vec2> {
    find_location(room, Cell::Box)
}

/// First target that is not covered by a box or the player.
pub fn find_target_location(room: &Room) -> Option<Vec2> {
    find_location(room, Cell::Target)
}

/// Smallest Manhattan distance between any loose box and any free target.
/// `None` when the room has no loose box or no free target, in which case
/// no shaping applies.
pub fn box_target_distance(room: &Room) -> Option<u32> {
    let mut boxes = Vec::new();
    let mut targets = Vec::new();
    for (pos, cell) in room.cells() {
        match cell {
            Cell::Box => boxes.push(pos),
            Cell::Target => targets.push(pos),
            _ => {}
        }
    }

    boxes
        .iter()
        .flat_map(|b| targets.iter().map(move |t| b.manhattan(t)))
        .min()
}
