//! Untrained single-hidden-layer network scorer.
//!
//! 768 one-hot inputs (piece kind x colour x square), 32 ReLU hidden units
//! and one linear output. Weights are drawn from a seeded generator and then
//! biased by hand so hidden-unit groups stand for centre, material, king
//! safety and pawn structure. The raw output is blended with a simple
//! material and centre count so play stays reasonable.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::search::board_scoring::{color_sign, piece_value, BoardScorer};

pub const INPUT_SIZE: usize = 768;
pub const HIDDEN_SIZE: usize = 32;
pub const DEFAULT_NETWORK_SEED: u64 = 42;

/// Board indices (row * 8 + col) of d5, e5, d4, e4.
const CENTRAL_SQUARE_INDICES: [usize; 4] = [27, 28, 35, 36];
const CENTRAL_WEIGHT_BOOST: f32 = 1.5;
const CENTRE_UNITS: usize = 8;

/// Output weight per group of eight hidden units.
const GROUP_OUTPUT_WEIGHTS: [f32; 4] = [10.0, 20.0, 15.0, 5.0];

// Game-state inputs reuse slots a white pawn can never occupy (row 0).
const SIDE_TO_MOVE_INPUT: usize = 0;
const CASTLING_INPUTS: usize = 1;
const EN_PASSANT_INPUT: usize = 5;

#[derive(Debug, Clone)]
pub struct ToyNetworkScorer {
    // Row-major [input][hidden].
    input_weights: Vec<[f32; HIDDEN_SIZE]>,
    hidden_bias: [f32; HIDDEN_SIZE],
    output_weights: [f32; HIDDEN_SIZE],
    output_bias: f32,
}

impl Default for ToyNetworkScorer {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_SEED)
    }
}

impl ToyNetworkScorer {
    /// Builds the network; equal seeds give identical weights.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let input_scale = (2.0 / INPUT_SIZE as f64).sqrt() as f32;
        let output_scale = (2.0 / HIDDEN_SIZE as f64).sqrt() as f32;

        let mut input_weights = vec![[0.0f32; HIDDEN_SIZE]; INPUT_SIZE];
        for row in input_weights.iter_mut() {
            for weight in row.iter_mut() {
                *weight = rng.random_range(-1.0f32..1.0) * input_scale;
            }
        }

        let mut output_weights = [0.0f32; HIDDEN_SIZE];
        for weight in output_weights.iter_mut() {
            *weight = rng.random_range(-1.0f32..1.0) * output_scale;
        }

        let mut network = Self {
            input_weights,
            hidden_bias: [0.0; HIDDEN_SIZE],
            output_weights,
            output_bias: 0.0,
        };
        network.apply_hand_bias();
        network
    }

    fn apply_hand_bias(&mut self) {
        for kind in ALL_PIECE_KINDS {
            for color in [Color::White, Color::Black] {
                for square in CENTRAL_SQUARE_INDICES {
                    let row = &mut self.input_weights[input_index(kind, color, square)];
                    for weight in row.iter_mut().take(CENTRE_UNITS) {
                        *weight *= CENTRAL_WEIGHT_BOOST;
                    }
                }
            }
        }

        for (unit, weight) in self.output_weights.iter_mut().enumerate() {
            *weight = GROUP_OUTPUT_WEIGHTS[unit / 8];
        }
    }

    fn features(game_state: &GameState) -> Vec<f32> {
        let mut features = vec![0.0f32; INPUT_SIZE];

        for (square, piece) in game_state.pieces() {
            features[input_index(piece.kind, piece.color, square.index())] = 1.0;
        }

        features[SIDE_TO_MOVE_INPUT] = match game_state.side_to_move {
            Color::White => 1.0,
            Color::Black => -1.0,
        };
        for (i, flag) in CastlingRights::flags_in_order().into_iter().enumerate() {
            features[CASTLING_INPUTS + i] = if game_state.castling_rights.has(flag) {
                1.0
            } else {
                0.0
            };
        }
        features[EN_PASSANT_INPUT] = if game_state.en_passant_square.is_some() {
            1.0
        } else {
            0.0
        };

        features
    }

    /// Forward pass, in centipawns, before blending.
    pub fn raw_output(&self, game_state: &GameState) -> i32 {
        let features = Self::features(game_state);

        let mut hidden = self.hidden_bias;
        for (input, row) in features.iter().zip(&self.input_weights) {
            if *input == 0.0 {
                continue;
            }
            for (acc, weight) in hidden.iter_mut().zip(row) {
                *acc += input * weight;
            }
        }

        let output = hidden
            .iter()
            .zip(&self.output_weights)
            .fold(self.output_bias, |sum, (h, w)| sum + h.max(0.0) * w);

        (output * 100.0) as i32
    }

    /// Material plus a bonus for pieces on the four central squares, White's
    /// side.
    pub fn simple_evaluation(game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(square, piece)| {
                let mut value = piece_value(piece.kind);
                if (3..=4).contains(&square.row) && (3..=4).contains(&square.col) {
                    value += if piece.kind == PieceKind::Pawn { 20 } else { 10 };
                }
                color_sign(piece.color) * value
            })
            .sum()
    }
}

impl BoardScorer for ToyNetworkScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let blended = (self.raw_output(game_state) + Self::simple_evaluation(game_state) * 3) / 4;
        match game_state.side_to_move {
            Color::White => blended,
            Color::Black => -blended,
        }
    }
}

#[inline]
fn input_index(kind: PieceKind, color: Color, square_index: usize) -> usize {
    kind.index() * 128 + color.index() * 64 + square_index
}
