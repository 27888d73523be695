use crate::game_state::{chess_types::Move, game_state::GameState};

/// Anything that can enumerate the legal moves of a position.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;
}
