//! Turning moves into facelet permutations.
//!
//! A clockwise quarter turn of a face rotates that face's own 9 facelets and
//! cycles a ring of 12 facelets on its four neighbors. The rings are written
//! down once, in [`ring`], and every other turn is derived from them: a
//! counterclockwise turn walks the same ring backwards and a half turn is two
//! clockwise quarter turns.

use crate::{
    cube::{Color, CubeState, Face},
    moves::{Amount, Move, MoveSequence, ParseError},
};

/// Three facelets on one face, in the order they travel around a ring.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    pub face: Face,
    pub indices: [usize; 3],
}

const fn strip(face: Face, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

const UP_RING: [Strip; 4] = [
    strip(Face::Front, [0, 1, 2]),
    strip(Face::Left, [0, 1, 2]),
    strip(Face::Back, [0, 1, 2]),
    strip(Face::Right, [0, 1, 2]),
];
const DOWN_RING: [Strip; 4] = [
    strip(Face::Front, [6, 7, 8]),
    strip(Face::Right, [6, 7, 8]),
    strip(Face::Back, [6, 7, 8]),
    strip(Face::Left, [6, 7, 8]),
];
const LEFT_RING: [Strip; 4] = [
    strip(Face::Up, [0, 3, 6]),
    strip(Face::Front, [0, 3, 6]),
    strip(Face::Down, [0, 3, 6]),
    strip(Face::Back, [8, 5, 2]),
];
const RIGHT_RING: [Strip; 4] = [
    strip(Face::Up, [2, 5, 8]),
    strip(Face::Back, [6, 3, 0]),
    strip(Face::Down, [2, 5, 8]),
    strip(Face::Front, [2, 5, 8]),
];
const FRONT_RING: [Strip; 4] = [
    strip(Face::Up, [6, 7, 8]),
    strip(Face::Right, [0, 3, 6]),
    strip(Face::Down, [2, 1, 0]),
    strip(Face::Left, [8, 5, 2]),
];
const BACK_RING: [Strip; 4] = [
    strip(Face::Up, [0, 1, 2]),
    strip(Face::Left, [6, 3, 0]),
    strip(Face::Down, [8, 7, 6]),
    strip(Face::Right, [2, 5, 8]),
];

/// The ring of neighboring facelets moved by a clockwise turn of `face`. The
/// facelets of strip `k` move onto strip `k + 1`, and the last strip wraps
/// around onto the first.
#[must_use]
pub const fn ring(face: Face) -> &'static [Strip; 4] {
    match face {
        Face::Up => &UP_RING,
        Face::Down => &DOWN_RING,
        Face::Left => &LEFT_RING,
        Face::Right => &RIGHT_RING,
        Face::Front => &FRONT_RING,
        Face::Back => &BACK_RING,
    }
}

/// Applies moves to cube states.
pub struct MoveEngine;

impl MoveEngine {
    /// Apply a single move in place.
    pub fn apply(state: &mut CubeState, move_: Move) {
        match move_.amount {
            Amount::Clockwise => Self::quarter_turn_cw(state, move_.face),
            Amount::CounterClockwise => Self::quarter_turn_ccw(state, move_.face),
            Amount::Half => {
                Self::quarter_turn_cw(state, move_.face);
                Self::quarter_turn_cw(state, move_.face);
            }
        }
        debug_assert!(
            state.colors_conserved(),
            "{move_} broke color conservation: {state}"
        );
    }

    /// Apply a single move to a copy of `state`.
    #[must_use]
    pub fn applied(state: &CubeState, move_: Move) -> CubeState {
        let mut out = state.clone();
        Self::apply(&mut out, move_);
        out
    }

    pub fn apply_sequence<'a>(state: &mut CubeState, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            Self::apply(state, move_);
        }
    }

    /// Parse `moves` and apply them. The whole text is validated first, so
    /// on error `state` is left untouched.
    ///
    /// # Errors
    ///
    /// If any token is outside the move grammar.
    pub fn apply_str(state: &mut CubeState, moves: &str) -> Result<MoveSequence, ParseError> {
        let sequence: MoveSequence = moves.parse()?;
        Self::apply_sequence(state, &sequence);
        Ok(sequence)
    }

    fn quarter_turn_cw(state: &mut CubeState, face: Face) {
        state.rotate_face_cw(face);

        let ring = ring(face);
        let carried = Self::read_strip(state, &ring[3]);
        for k in (1..4).rev() {
            let moved = Self::read_strip(state, &ring[k - 1]);
            Self::write_strip(state, &ring[k], moved);
        }
        Self::write_strip(state, &ring[0], carried);
    }

    fn quarter_turn_ccw(state: &mut CubeState, face: Face) {
        state.rotate_face_ccw(face);

        let ring = ring(face);
        let carried = Self::read_strip(state, &ring[0]);
        for k in 0..3 {
            let moved = Self::read_strip(state, &ring[k + 1]);
            Self::write_strip(state, &ring[k], moved);
        }
        Self::write_strip(state, &ring[3], carried);
    }

    fn read_strip(state: &CubeState, strip: &Strip) -> [Color; 3] {
        strip.indices.map(|i| state.facelet(strip.face, i))
    }

    fn write_strip(state: &mut CubeState, strip: &Strip, colors: [Color; 3]) {
        for (&i, color) in strip.indices.iter().zip(colors) {
            state.set_facelet(strip.face, i, color);
        }
    }
}
