use crate::core::GameChangeType;

pub struct GameRenderState {
    pub board: String,
    pub won: bool,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
    pub moves_made: usize,
}
