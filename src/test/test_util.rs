pub use dissimilar::diff as __diff;
use glam::Vec2;
use crate::config::TileCodes;
use crate::console_interface::{level_text_from_glyphs, render_level_to_string};
use crate::core::{CoordinateSystem, Game, HexagonalLayout, IsometricLayout, LevelGrid, MoveOutcome};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub fn load_glyphs(glyphs: &str) -> LevelGrid {
    let codes = TileCodes::default();
    LevelGrid::load(&level_text_from_glyphs(glyphs, &codes), &codes).unwrap()
}

pub struct GameTestState<C: CoordinateSystem> {
    pub game: Game<C>,
}

impl GameTestState<IsometricLayout> {
    pub fn isometric(glyphs: &str) -> Self {
        let level = load_glyphs(glyphs);
        let layout = IsometricLayout::new(level.rows(), level.cols(), 64.0);
        Self { game: Game::new(level, layout) }
    }
}

impl GameTestState<HexagonalLayout> {
    pub fn hexagonal(glyphs: &str) -> Self {
        let level = load_glyphs(glyphs);
        let layout = HexagonalLayout::new(level.rows(), level.cols(), 64.0, Vec2::ZERO);
        Self { game: Game::new(level, layout) }
    }
}

impl<C: CoordinateSystem> GameTestState<C> {
    pub fn game_to_string(&self) -> String {
        let topology = self.game.coordinates().topology();
        render_level_to_string(self.game.level(), topology).trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: C::Direction) -> MoveOutcome {
        let outcome = self.game.try_move(direction);
        let MoveOutcome::Moved(_) = outcome else {
            panic!("Expected a move, got {:?}, in map\n{}", outcome, self.game_to_string());
        };
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[C::Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn try_move(&mut self, direction: C::Direction) -> MoveOutcome {
        self.game.try_move(direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    /// Checks every tracked entity stands on a cell showing it, and vice versa
    pub fn assert_entities_consistent(&self) {
        let level = self.game.level();
        for (entity, pos) in level.iter_entities() {
            let kind = level.get_kind(pos).unwrap();
            assert_eq!(kind, kind.without_occupant().with_entity(entity), "{:?} at {:?}", entity, pos);
        }
        for (pos, kind) in level.iter_cells() {
            if kind.has_ball() || kind.has_hero() {
                assert!(level.entity_at(pos).is_some(), "untracked occupant at {:?}", pos);
            }
        }
    }
}
