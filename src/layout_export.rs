use serde::{Deserialize, Serialize};

use crate::core::{CellKind, CoordinateSystem, EntityId, Game, Topology};

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonLayout {
    pub topology: Topology,
    pub rows: i32,
    pub cols: i32,
    pub solved: bool,
    pub cells: Vec<JsonCell>,
    pub entities: Vec<JsonEntity>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonCell {
    pub row: i32,
    pub col: i32,
    pub kind: CellKind,
    pub screen: [f32; 2],
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonEntity {
    pub entity: EntityId,
    pub row: i32,
    pub col: i32,
    pub screen: [f32; 2],
}

/// Everything a renderer needs to place tiles and sprites. Invalid cells are left out.
pub fn get_layout<C: CoordinateSystem>(game: &Game<C>) -> JsonLayout {
    let level = game.level();
    let cells = level
        .iter_cells()
        .filter(|&(_, kind)| kind.is_valid())
        .map(|(pos, kind)| JsonCell {
            row: pos.i,
            col: pos.j,
            kind,
            screen: game.screen_position(pos).to_array(),
        })
        .collect();

    let entities = level
        .iter_entities()
        .map(|(entity, pos)| JsonEntity {
            entity,
            row: pos.i,
            col: pos.j,
            screen: game.screen_position(pos).to_array(),
        })
        .collect();

    JsonLayout {
        topology: game.coordinates().topology(),
        rows: level.rows(),
        cols: level.cols(),
        solved: level.is_solved(),
        cells,
        entities,
    }
}

pub fn get_layout_json<C: CoordinateSystem>(game: &Game<C>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&get_layout(game))
}
