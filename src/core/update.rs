use crate::core::{Action, Direction, Room, Transition};

/// Applies one action to the room in place.
pub fn step(room: &mut Room, action: Action) -> Transition {
    match action {
        Action::Noop => Transition::default(),
        Action::Push(d) => push(room, d),
        Action::Move(d) => Transition {
            moved_player: move_player(room, d),
            moved_box: false,
        },
        Action::Pull(d) => pull(room, d),
    }
}

/// Pushes the box directly ahead of the player one cell further. Without a
/// box ahead nothing happens, the player does not walk instead.
fn push(room: &mut Room, dir: Direction) -> Transition {
    let current = room.player();
    let new_position = current + dir.delta();
    let new_box_position = new_position + dir.delta();

    let box_ahead = room.get(&new_position).is_some_and(|c| c.is_box());
    let box_can_move = room.get(&new_box_position).is_some_and(|c| c.is_walkable());
    if !(box_ahead && box_can_move) {
        return Transition::default();
    }

    room.place_box(new_box_position);
    room.place_player(new_position);
    room.clear(current);

    Transition {
        moved_player: true,
        moved_box: true,
    }
}

fn move_player(room: &mut Room, dir: Direction) -> bool {
    let current = room.player();
    let new_position = current + dir.delta();

    if !room.get(&new_position).is_some_and(|c| c.is_walkable()) {
        return false;
    }

    room.place_player(new_position);
    room.clear(current);
    true
}

/// Steps the player towards `dir` and drags along the box directly behind
/// it, if any.
fn pull(room: &mut Room, dir: Direction) -> Transition {
    let current = room.player();
    let pull_content_position = current + dir.reverse().delta();

    if !move_player(room, dir) {
        return Transition::default();
    }

    let box_behind = room.get(&pull_content_position).is_some_and(|c| c.is_box());
    if box_behind {
        room.place_box(current);
        room.clear(pull_content_position);
    }

    Transition {
        moved_player: true,
        moved_box: box_behind,
    }
}
