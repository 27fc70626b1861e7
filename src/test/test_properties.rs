#[cfg(test)]
mod test {
    use glam::{IVec2, Vec2};
    use proptest::prelude::*;

    use crate::core::hexagonal::{axial_to_offset, axial_to_screen, cubic_z, neighbors, offset_to_axial, screen_to_axial};
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    proptest! {
        #[test]
        fn offset_axial_round_trip(i in -200i32..200, j in -200i32..200) {
            let pos = GridPos::new(i, j);
            prop_assert_eq!(axial_to_offset(offset_to_axial(pos)), pos);
        }

        #[test]
        fn cubic_coordinates_sum_to_zero(x in -200i32..200, y in -200i32..200) {
            let axial = IVec2::new(x, y);
            prop_assert_eq!(axial.x + axial.y + cubic_z(axial), 0);
        }

        #[test]
        fn opposite_neighbour_returns_to_origin(x in -200i32..200, y in -200i32..200) {
            let origin = IVec2::new(x, y);
            let around = neighbors(origin);
            prop_assert_eq!(around.len(), 6);
            for (index, &neighbour) in around.iter().enumerate() {
                prop_assert_ne!(neighbour, origin);
                prop_assert_eq!(neighbors(neighbour)[(index + 3) % 6], origin);
            }
        }

        #[test]
        fn screen_to_axial_inverts_axial_to_screen(x in -50i32..50, y in -50i32..50, side in 1.0f32..100.0) {
            let axial = IVec2::new(x, y);
            prop_assert_eq!(screen_to_axial(axial_to_screen(axial, side), side), axial);
        }

        #[test]
        fn hex_layout_opposite_direction_returns_to_origin(i in -100i32..100, j in -100i32..100, d in 0usize..6) {
            let layout = HexagonalLayout::new(10, 10, 32.0, Vec2::ZERO);
            let direction = HexDirection::from_index(d).unwrap();
            let origin = GridPos::new(i, j);
            let there = layout.next_index_along(origin, direction);
            prop_assert_eq!(layout.next_index_along(there, direction.opposite()), origin);
        }

        #[test]
        fn random_hex_moves_keep_grid_and_entities_in_step(moves in proptest::collection::vec(0usize..6, 0..60)) {
            let mut game = GameTestState::hexagonal(r#"
# _ _ _ . #
 _ $ _ _ _ _
_ _ @ $ _ .
 # _ $ _ _ #
_ . _ _ _ _
"#);
            let balls = game.game.level().ball_count();
            for index in moves {
                game.game.try_move_index(index);
                game.assert_entities_consistent();
                let level = game.game.level();
                let on_grid = level.iter_cells().filter(|&(_, kind)| kind.has_ball()).count();
                prop_assert_eq!(on_grid, balls);
                prop_assert_eq!(level.iter_cells().filter(|&(_, kind)| kind.has_hero()).count(), 1);
                prop_assert_eq!(level.iter_cells().filter(|&(_, kind)| kind.is_destination()).count(), level.destination_count());
            }
        }

        #[test]
        fn random_iso_moves_keep_grid_and_entities_in_step(moves in proptest::collection::vec(0usize..4, 0..60)) {
            let mut game = GameTestState::isometric(r#"
#___.#
_$____
__@$_.
#_$__#
_.____
"#);
            let balls = game.game.level().ball_count();
            for index in moves {
                game.game.try_move_index(index);
                game.assert_entities_consistent();
                let level = game.game.level();
                prop_assert_eq!(level.iter_cells().filter(|&(_, kind)| kind.has_ball()).count(), balls);
                prop_assert_eq!(level.iter_cells().filter(|&(_, kind)| kind.is_destination()).count(), level.destination_count());
            }
        }
    }
}
