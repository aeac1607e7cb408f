//! Cancellation of consecutive turns of the same face.

use crate::moves::{Amount, Move, MoveSequence};
use itertools::Itertools;

/// Merge every maximal run of consecutive same-face moves into at most one
/// move by summing the run's quarter turns modulo 4. A run whose sum is a
/// multiple of 4 disappears. Runs are only formed from moves that are
/// adjacent in the input, so `R U U' R'` becomes `R R'`; see
/// [`optimize_fully`] for repeated passes.
///
/// The result always has the same effect on a cube as the input.
#[must_use]
pub fn optimize(moves: &[Move]) -> MoveSequence {
    let runs = moves.iter().chunk_by(|move_| move_.face);
    runs.into_iter()
        .filter_map(|(face, run)| {
            let quarter_turns: i32 = run.map(|move_| i32::from(move_.quarter_turns())).sum();
            Amount::from_quarter_turns(quarter_turns).map(|amount| Move::new(face, amount))
        })
        .collect()
}

/// Apply [`optimize`] until nothing changes, so runs that become adjacent
/// after a cancellation are merged as well.
#[must_use]
pub fn optimize_fully(moves: &[Move]) -> MoveSequence {
    let mut current = optimize(moves);
    loop {
        let next = optimize(&current);
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}
