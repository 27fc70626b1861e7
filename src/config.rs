//! Level configuration: which integer means which cell kind, and how big tiles are
//! drawn. Loaded from JSON; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CellKind, HexagonalLayout, IsometricLayout, LevelGrid, Topology};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tile code {code} is used for both {first:?} and {second:?}")]
    DuplicateTileCode {
        code: i32,
        first: CellKind,
        second: CellKind,
    },
    #[error("tile size must be positive, found {0}")]
    InvalidTileSize(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileCodes {
    pub invalid: i32,
    pub ground: i32,
    pub destination: i32,
    pub hero: i32,
    pub ball: i32,
    pub hero_on_destination: i32,
    pub ball_on_destination: i32,
}

impl Default for TileCodes {
    fn default() -> Self {
        TileCodes {
            invalid: -1,
            ground: 0,
            destination: 1,
            hero: 2,
            ball: 3,
            hero_on_destination: 4,
            ball_on_destination: 5,
        }
    }
}

impl TileCodes {
    fn pairs(&self) -> [(i32, CellKind); 7] {
        [
            (self.invalid, CellKind::Invalid),
            (self.ground, CellKind::Ground),
            (self.destination, CellKind::Destination),
            (self.hero, CellKind::Hero),
            (self.ball, CellKind::Ball),
            (self.hero_on_destination, CellKind::HeroOnDestination),
            (self.ball_on_destination, CellKind::BallOnDestination),
        ]
    }

    pub fn kind_for(&self, code: i32) -> Option<CellKind> {
        self.pairs()
            .into_iter()
            .find(|&(candidate, _)| candidate == code)
            .map(|(_, kind)| kind)
    }

    pub fn code_for(&self, kind: CellKind) -> i32 {
        match kind {
            CellKind::Invalid => self.invalid,
            CellKind::Ground => self.ground,
            CellKind::Destination => self.destination,
            CellKind::Hero => self.hero,
            CellKind::Ball => self.ball,
            CellKind::HeroOnDestination => self.hero_on_destination,
            CellKind::BallOnDestination => self.ball_on_destination,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let pairs = self.pairs();
        for (index, &(code, first)) in pairs.iter().enumerate() {
            if let Some(&(_, second)) = pairs[index + 1..].iter().find(|&&(other, _)| other == code) {
                return Err(ConfigError::DuplicateTileCode { code, first, second });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub topology: Topology,
    /// Tile width in screen units. Hex side length is half of this.
    pub tile_size: f32,
    /// Screen size the hexagonal layout centres itself in
    pub viewport: Vec2,
    pub tile_codes: TileCodes,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            topology: Topology::Isometric,
            tile_size: 64.0,
            viewport: Vec2::ZERO,
            tile_codes: TileCodes::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        GameConfig::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        self.tile_codes.validate()
    }

    pub fn isometric_layout(&self, level: &LevelGrid) -> IsometricLayout {
        IsometricLayout::new(level.rows(), level.cols(), self.tile_size)
    }

    pub fn hexagonal_layout(&self, level: &LevelGrid) -> HexagonalLayout {
        HexagonalLayout::new(level.rows(), level.cols(), self.tile_size, self.viewport)
    }
}
