use crate::core::{CellKind, EntityId, LevelGrid};

impl CellKind {
    pub fn is_valid(self) -> bool {
        self != CellKind::Invalid
    }

    pub fn has_ball(self) -> bool {
        matches!(self, CellKind::Ball | CellKind::BallOnDestination)
    }

    pub fn has_hero(self) -> bool {
        matches!(self, CellKind::Hero | CellKind::HeroOnDestination)
    }

    pub fn is_destination(self) -> bool {
        matches!(
            self,
            CellKind::Destination | CellKind::HeroOnDestination | CellKind::BallOnDestination
        )
    }

    /// The kind left behind once the hero or ball standing here walks away
    pub fn without_occupant(self) -> CellKind {
        match self {
            CellKind::Hero | CellKind::Ball => CellKind::Ground,
            CellKind::HeroOnDestination | CellKind::BallOnDestination => CellKind::Destination,
            other => other,
        }
    }

    pub fn with_hero(self) -> CellKind {
        match self {
            CellKind::Ground => CellKind::Hero,
            CellKind::Destination => CellKind::HeroOnDestination,
            other => other,
        }
    }

    pub fn with_ball(self) -> CellKind {
        match self {
            CellKind::Ground => CellKind::Ball,
            CellKind::Destination => CellKind::BallOnDestination,
            other => other,
        }
    }

    pub fn with_entity(self, entity: EntityId) -> CellKind {
        match entity {
            EntityId::Hero => self.with_hero(),
            EntityId::Ball(_) => self.with_ball(),
        }
    }
}

impl LevelGrid {
    pub fn balls_on_destinations(&self) -> usize {
        self.iter_cells()
            .filter(|&(_, kind)| kind == CellKind::BallOnDestination)
            .count()
    }

    /// Solved once every ball counted at load time sits on a destination
    pub fn is_solved(&self) -> bool {
        self.balls_on_destinations() == self.ball_count()
    }
}
