use bimap::BiMap;
use thiserror::Error;

use crate::config::TileCodes;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{CellKind, EntityId, GridPos};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("level text contains no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no hero")]
    MissingHero,
    #[error("level has more than one hero, at {first:?} and {second:?}")]
    MultipleHeroes { first: GridPos, second: GridPos },
}

/// The authoritative puzzle state: the typed grid plus where every entity stands.
///
/// The grid and the entity map describe the same fact twice. `set_kind` only touches
/// the grid, so anything that moves an entity goes through `relocate`, which keeps both
/// in step.
#[derive(Clone, Debug)]
pub struct LevelGrid {
    grid: BoundedGrid<CellKind>,
    entities: BiMap<EntityId, GridPos>,
    ball_count: usize,
    destination_count: usize,
}

impl LevelGrid {
    /// Parses comma separated tile codes, one row per line.
    ///
    /// Tokens which are not integers, or integers that are not one of `codes`, become
    /// `CellKind::Invalid`. Sparse levels rely on this to punch holes in the map.
    pub fn load(text: &str, codes: &TileCodes) -> Result<LevelGrid, ParseError> {
        let lines: Vec<&str> = text
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(ParseError::Empty);
        };
        let cols = first.split(',').count();

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
            if tokens.len() != cols {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: cols,
                    found: tokens.len(),
                });
            }
            cells.extend(tokens.into_iter().map(|token| parse_cell(token, codes)));
        }

        let bounds = BoundsOriginRoot::new(lines.len() as i32, cols as i32);
        let grid = BoundedGrid::from_cells(bounds, cells).ok_or(ParseError::Empty)?;
        LevelGrid::from_grid(grid)
    }

    fn from_grid(grid: BoundedGrid<CellKind>) -> Result<LevelGrid, ParseError> {
        let mut entities = BiMap::new();
        let mut hero: Option<GridPos> = None;
        let mut ball_count = 0;
        let mut destination_count = 0;

        for (pos, &kind) in grid.iter() {
            if kind.is_destination() {
                destination_count += 1;
            }
            if kind.has_hero() {
                if let Some(first) = hero {
                    return Err(ParseError::MultipleHeroes { first, second: pos });
                }
                hero = Some(pos);
                entities.insert(EntityId::Hero, pos);
            } else if kind.has_ball() {
                entities.insert(EntityId::Ball(ball_count), pos);
                ball_count += 1;
            }
        }

        if hero.is_none() {
            return Err(ParseError::MissingHero);
        }
        if ball_count > destination_count {
            log::warn!(
                "there are more balls ({}) than destinations ({}), level cannot be solved",
                ball_count,
                destination_count
            );
        }
        log::info!(
            "loaded {}x{} level with {} balls and {} destinations",
            grid.size().rows,
            grid.size().cols,
            ball_count,
            destination_count
        );

        Ok(LevelGrid {
            grid,
            entities,
            ball_count,
            destination_count,
        })
    }

    pub fn rows(&self) -> i32 {
        self.grid.size().rows
    }

    pub fn cols(&self) -> i32 {
        self.grid.size().cols
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.grid.contains(&pos)
    }

    /// `None` when `pos` is off the grid
    pub fn get_kind(&self, pos: GridPos) -> Option<CellKind> {
        self.grid.get(&pos).copied()
    }

    /// Writes a cell without touching the entity map. Callers moving an entity must
    /// update the map too, or use `relocate`.
    pub fn set_kind(&mut self, pos: GridPos, kind: CellKind) {
        if !self.grid.contains(&pos) {
            log::error!("attempted to write {:?} outside the level at {:?}", kind, pos);
            return;
        }
        self.grid[&pos] = kind;
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    pub fn destination_count(&self) -> usize {
        self.destination_count
    }

    pub fn hero_position(&self) -> Option<GridPos> {
        self.position_of(EntityId::Hero)
    }

    pub fn position_of(&self, entity: EntityId) -> Option<GridPos> {
        self.entities.get_by_left(&entity).copied()
    }

    pub fn entity_at(&self, pos: GridPos) -> Option<EntityId> {
        self.entities.get_by_right(&pos).copied()
    }

    /// Entities sorted with the hero first, then balls in load order
    pub fn iter_entities(&self) -> impl Iterator<Item = (EntityId, GridPos)> {
        let mut entities: Vec<(EntityId, GridPos)> =
            self.entities.iter().map(|(&entity, &pos)| (entity, pos)).collect();
        entities.sort_unstable();
        entities.into_iter()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (GridPos, CellKind)> + '_ {
        self.grid.iter().map(|(pos, &kind)| (pos, kind))
    }

    pub fn cells(&self) -> &[CellKind] {
        self.grid.cells()
    }

    /// Moves `entity` to `to`, clearing its old cell and stamping the new one.
    pub fn relocate(&mut self, entity: EntityId, to: GridPos) {
        let Some(from) = self.position_of(entity) else {
            log::error!("cannot relocate untracked entity {:?}", entity);
            return;
        };
        let Some(target) = self.get_kind(to) else {
            log::error!("cannot relocate {:?} outside the level to {:?}", entity, to);
            return;
        };
        let left_behind = self.grid[&from].without_occupant();
        self.set_kind(from, left_behind);
        self.set_kind(to, target.with_entity(entity));
        self.entities.insert(entity, to);
    }

    /// Writes the grid back out in the comma separated level format
    pub fn to_level_text(&self, codes: &TileCodes) -> String {
        let mut result = String::new();
        for row in self.grid.cells().chunks(self.cols().max(1) as usize) {
            let line: Vec<String> = row.iter().map(|&kind| codes.code_for(kind).to_string()).collect();
            result.push_str(&line.join(","));
            result.push('\n');
        }
        result
    }
}

fn parse_cell(token: &str, codes: &TileCodes) -> CellKind {
    token
        .parse::<i32>()
        .ok()
        .and_then(|code| codes.kind_for(code))
        .unwrap_or(CellKind::Invalid)
}
