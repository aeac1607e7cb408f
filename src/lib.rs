//! A facelet-level model of the 3x3x3 cube: the 54-sticker state, the twelve
//! generator permutations, random scrambles, move-sequence cancellation and a
//! bounded breadth-first solver.

pub mod cube;
pub mod engine;
pub mod history;
pub mod moves;
pub mod optimize;
pub mod scramble;
pub mod solver;

pub use cube::{CanonicalKey, Color, CubeState, Face, StateParseError};
pub use engine::MoveEngine;
pub use history::TrackedCube;
pub use moves::{Amount, Move, MoveSequence, ParseError};
pub use optimize::optimize;
pub use scramble::Scrambler;
pub use solver::{SearchStats, SolveResult, Solver};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
