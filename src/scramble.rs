use crate::{
    cube::CubeState,
    engine::MoveEngine,
    moves::{Move, MoveSequence},
};
use log::debug;

/// Draws uniformly random move sequences and applies them to a solved cube.
pub struct Scrambler {
    rng: fastrand::Rng,
    include_half_turns: bool,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler {
    /// A scrambler seeded from system entropy that draws only the twelve
    /// quarter-turn generators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
            include_half_turns: false,
        }
    }

    /// A scrambler that produces the same scrambles for the same seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            include_half_turns: false,
        }
    }

    /// Also draw the six half turns, uniformly among all 18 moves.
    #[must_use]
    pub fn with_half_turns(mut self, include_half_turns: bool) -> Self {
        self.include_half_turns = include_half_turns;
        self
    }

    /// Draw `n` independent moves and apply them to a solved cube. Returns
    /// the scrambled state together with the exact sequence applied.
    pub fn scramble(&mut self, n: usize) -> (CubeState, MoveSequence) {
        // `Move::ALL` starts with the generators.
        let pool_len = if self.include_half_turns {
            Move::ALL.len()
        } else {
            Move::GENERATORS.len()
        };
        let sequence: MoveSequence = (0..n)
            .map(|_| Move::ALL[self.rng.usize(..pool_len)])
            .collect();

        let mut state = CubeState::new_solved();
        MoveEngine::apply_sequence(&mut state, &sequence);
        debug!("Scrambled with {n} moves: {sequence}");

        (state, sequence)
    }
}

/// Scramble a solved cube with `n` random quarter turns.
#[must_use]
pub fn scramble(n: usize) -> (CubeState, MoveSequence) {
    Scrambler::new().scramble(n)
}
