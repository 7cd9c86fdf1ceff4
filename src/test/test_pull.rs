#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::RoomTestState;

    #[test]
    fn when_pull_with_box_behind_box_follows(){
        let level = r#"
#$@ #
"#;
        let mut room = RoomTestState::new(level);
        let transition = room.assert_step(Action::Pull(Right));

        room.assert_matches(r#"
# $@#
"#);
        assert_eq!(transition, Transition { moved_player: true, moved_box: true });
    }

    #[test]
    fn when_pull_without_box_player_just_moves(){
        let level = r#"
# @ #
"#;
        let mut room = RoomTestState::new(level);
        let transition = room.assert_step(Action::Pull(Right));

        room.assert_matches(r#"
#  @#
"#);
        assert_eq!(transition, Transition { moved_player: true, moved_box: false });
    }

    #[test]
    fn when_pull_is_blocked_box_stays(){
        let level = r#"
#$@#
"#;
        let mut room = RoomTestState::new(level);
        room.assert_blocked(Action::Pull(Right));
        room.assert_matches(level);
    }

    #[test]
    fn when_pull_into_box_nothing_changes(){
        let level = r#"
#$@$ #
"#;
        let mut room = RoomTestState::new(level);
        room.assert_blocked(Action::Pull(Right));
        room.assert_matches(level);
    }

    #[test]
    fn when_box_is_beside_player_pull_leaves_it(){
        let level = r#"
#####
#   #
#$@ #
#   #
#####
"#;
        let mut room = RoomTestState::new(level);
        let transition = room.assert_step(Action::Pull(Up));

        room.assert_matches(r#"
#####
# @ #
#$  #
#   #
#####
"#);
        assert!(!transition.moved_box);
    }

    #[test]
    fn when_pull_box_off_target_target_reappears(){
        let level = r#"
#####
#.  #
#*  #
#@  #
#   #
#####
"#;
        let mut room = RoomTestState::new(level);
        room.assert_step(Action::Pull(Down));

        room.assert_matches(r#"
#####
#.  #
#.  #
#$  #
#@  #
#####
"#);
    }

    #[test]
    fn when_pull_box_onto_target_from_target(){
        let level = r#"
#*+ #
"#;
        let mut room = RoomTestState::new(level);
        let transition = room.assert_step(Action::Pull(Right));

        room.assert_matches(r#"
#.*@#
"#);
        assert!(transition.moved_box);
    }

    #[test]
    fn when_player_is_at_the_edge_pull_still_moves(){
        let mut room = RoomTestState::new("@ #");
        let transition = room.assert_step(Action::Pull(Right));
        assert!(!transition.moved_box);
        room.assert_matches(" @#");
    }

    #[test]
    fn push_onto_target_then_pull_off_restores_cells(){
        let level = r#"
#######
#  @$.#
#######
"#;
        let mut room = RoomTestState::new(level);
        let original = room.room.clone();
        room.assert_step(Action::Push(Right));
        room.assert_matches(r#"
#######
#   @*#
#######
"#);

        room.assert_step(Action::Pull(Left));
        room.assert_matches(r#"
#######
#  @$.#
#######
"#);
        assert_eq!(original, room.room);
    }

    #[test]
    fn pull_and_push_share_direction_decoding(){
        for code in 1..=4 {
            let push = Action::from_code(code).unwrap();
            let pull = Action::from_code(code + 8).unwrap();
            assert_eq!(push.direction(), pull.direction());
        }
    }
}
