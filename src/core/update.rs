use glam::Vec2;

use crate::core::coordinates::{CoordinateSystem, GridDirection};
use crate::core::GameChangeType::{HeroAndBallMove, HeroMove};
use crate::core::MoveOutcome::{Moved, Rejected};
use crate::core::RejectReason::{Blocked, MissingEntity, OutOfBounds, PushBlocked, PushOutOfBounds};
use crate::core::{CellKind, EntityId, GridPos, LevelGrid, MoveOutcome, RejectReason};

/// Applies one hero move to `level`. Either the whole move happens or nothing changes.
pub fn step<C: CoordinateSystem>(
    coordinates: &C,
    level: &mut LevelGrid,
    direction: C::Direction,
) -> MoveOutcome {
    let Some(hero) = level.hero_position() else {
        return untracked(level, None);
    };

    let hero_next = coordinates.next_index_along(hero, direction);
    let dest = match level.get_kind(hero_next) {
        None => return Rejected(OutOfBounds),
        Some(CellKind::Invalid) => return Rejected(Blocked),
        Some(kind) => kind,
    };

    if !dest.has_ball() {
        level.relocate(EntityId::Hero, hero_next);
        return Moved(HeroMove);
    }

    let ball_next = coordinates.next_index_along(hero_next, direction);
    match level.get_kind(ball_next) {
        None => return Rejected(PushOutOfBounds),
        Some(beyond) if !beyond.is_valid() || beyond.has_ball() => return Rejected(PushBlocked),
        Some(_) => {}
    }

    let Some(ball) = level.entity_at(hero_next) else {
        return untracked(level, Some(hero_next));
    };

    // ball first, the hero steps into the cell it vacated
    level.relocate(ball, ball_next);
    level.relocate(EntityId::Hero, hero_next);
    Moved(HeroAndBallMove)
}

fn untracked(level: &LevelGrid, pos: Option<GridPos>) -> MoveOutcome {
    let kind = pos.and_then(|pos| level.get_kind(pos));
    log::error!("occupied cell {:?} ({:?}) has no tracked entity", pos, kind);
    debug_assert!(false, "occupied cell {:?} has no tracked entity", pos);
    Rejected(MissingEntity)
}

/// A level being played in one topology. Owns all mutable puzzle state.
#[derive(Clone, Debug)]
pub struct Game<C: CoordinateSystem> {
    level: LevelGrid,
    coordinates: C,
    game_over: bool,
    moves_made: usize,
}

impl<C: CoordinateSystem> Game<C> {
    pub fn new(level: LevelGrid, coordinates: C) -> Game<C> {
        Game {
            level,
            coordinates,
            game_over: false,
            moves_made: 0,
        }
    }

    pub fn level(&self) -> &LevelGrid {
        &self.level
    }

    pub fn coordinates(&self) -> &C {
        &self.coordinates
    }

    /// True once every ball sits on a destination. Further moves are ignored.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn screen_position(&self, pos: GridPos) -> Vec2 {
        self.coordinates.index_to_screen(pos)
    }

    pub fn try_move(&mut self, direction: C::Direction) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }

        let outcome = step(&self.coordinates, &mut self.level, direction);
        match outcome {
            Moved(change) => {
                self.moves_made += 1;
                log::debug!("{:?} towards {:?}", change, direction);
                if self.level.is_solved() {
                    log::info!("level complete after {} moves", self.moves_made);
                    self.game_over = true;
                }
            }
            Rejected(reason) => log::debug!("move {:?} rejected: {}", direction, reason),
            MoveOutcome::Ignored => {}
        }
        outcome
    }

    /// Same as `try_move`, for callers holding a raw direction index
    pub fn try_move_index(&mut self, index: usize) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }
        match C::Direction::from_index(index) {
            Some(direction) => self.try_move(direction),
            None => Rejected(RejectReason::UnknownDirection),
        }
    }
}
