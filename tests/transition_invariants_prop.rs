// tests/transition_invariants_prop.rs

/**
 * Property tests for the push/move/pull transition rules.
 *
 * Rooms are generated with a wall border and a random interior, then driven
 * with random action codes. Invariants covered:
 * - The fixed layer never changes and the dynamic layer stays a valid overlay.
 * - The number of boxes is conserved.
 * - A step that does not move the player leaves the room untouched.
 * - Moves never touch boxes, pushes advance the box ahead by one cell,
 *   pulls drag the box behind into the player's former cell.
 */
use proptest::prelude::*;
use pull_engine::console_interface::parse_level;
use pull_engine::core::{step, Action, Cell, Room, Vec2};

fn level_strategy() -> impl Strategy<Value = String> {
    (3usize..7, 3usize..7).prop_flat_map(|(h, w)| {
        let cells = prop::collection::vec(
            prop_oneof![
                4 => Just(' '),
                2 => Just('#'),
                2 => Just('$'),
                1 => Just('.'),
                1 => Just('*'),
            ],
            h * w,
        );
        (Just(w), cells, 0..h * w).prop_map(|(w, mut cells, player)| {
            cells[player] = '@';
            let border = "#".repeat(w + 2);
            let mut level = format!("{}\n", border);
            for row in cells.chunks(w) {
                level.push('#');
                level.extend(row.iter());
                level.push_str("#\n");
            }
            level.push_str(&border);
            level.push('\n');
            level
        })
    })
}

fn box_count(room: &Room) -> usize {
    room.cells().filter(|(_, c)| c.is_box()).count()
}

fn assert_valid_overlay(room: &Room) {
    let rebuilt = Room::new(
        room.fixed_grid().to_vec(),
        room.state_grid().to_vec(),
        room.player(),
    );
    assert_eq!(rebuilt.as_ref(), Ok(room));
}

proptest! {
    #[test]
    fn random_rollouts_respect_transition_invariants(
        level in level_strategy(),
        codes in prop::collection::vec(0i64..13, 1..60),
    ) {
        let mut room = parse_level(&level).unwrap();
        let fixed = room.fixed_grid().to_vec();
        let boxes = box_count(&room);

        for code in codes {
            let action = Action::from_code(code).unwrap();
            let before = room.clone();
            let transition = step(&mut room, action);

            prop_assert_eq!(room.fixed_grid(), fixed.as_slice());
            prop_assert_eq!(box_count(&room), boxes);
            assert_valid_overlay(&room);

            if !transition.moved_player {
                prop_assert!(!transition.moved_box);
                prop_assert_eq!(&room, &before);
                continue;
            }

            let old = before.player();
            let d = action.direction().unwrap().delta();
            prop_assert_eq!(room.player(), old + d);
            prop_assert!(before.get(&(old + d)).is_some_and(|c| c.is_walkable() || c.is_box()));

            match action {
                Action::Noop => prop_assert!(false, "noop moved the player"),
                Action::Move(_) => {
                    prop_assert!(!transition.moved_box);
                    let boxes_before: Vec<Vec2> = before.cells().filter(|(_, c)| c.is_box()).map(|(p, _)| p).collect();
                    let boxes_after: Vec<Vec2> = room.cells().filter(|(_, c)| c.is_box()).map(|(p, _)| p).collect();
                    prop_assert_eq!(boxes_before, boxes_after);
                }
                Action::Push(_) => {
                    prop_assert!(transition.moved_box);
                    prop_assert!(before.get(&(old + d)).is_some_and(|c| c.is_box()));
                    prop_assert!(room.get(&(old + d + d)).is_some_and(|c| c.is_box()));
                }
                Action::Pull(_) => {
                    let had_box_behind = before.get(&(old - d)).is_some_and(|c| c.is_box());
                    prop_assert_eq!(transition.moved_box, had_box_behind);
                    if had_box_behind {
                        prop_assert!(room.get(&old).is_some_and(|c| c.is_box()));
                        prop_assert!(room.get(&(old - d)).is_some_and(|c| !c.is_box()));
                    } else {
                        prop_assert_eq!(room.get(&old), room.fixed_at(&old));
                    }
                }
            }
        }
    }

    #[test]
    fn noop_never_changes_the_room(level in level_strategy()) {
        let mut room = parse_level(&level).unwrap();
        let before = room.clone();
        let transition = step(&mut room, Action::Noop);
        prop_assert!(!transition.moved_player);
        prop_assert_eq!(room, before);
    }
}

#[test]
fn push_then_pull_round_trip_restores_room() {
    let mut room = parse_level("#  @$.#").unwrap();
    let original = room.clone();

    let pushed = step(&mut room, Action::from_code(4).unwrap());
    assert!(pushed.moved_box);
    assert_eq!(room.get(&Vec2::new(0, 5)), Some(Cell::BoxOnTarget));

    let pulled = step(&mut room, Action::from_code(11).unwrap());
    assert!(pulled.moved_box);
    assert_eq!(room, original);
}
