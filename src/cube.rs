//! The 54-facelet state of the cube.
//!
//! Each face holds 9 facelets in row-major order as seen head-on from outside
//! the cube. Up is viewed from above with its first row touching Back and
//! Down from below with its first row touching Front. The four side faces are
//! viewed with their first row touching Up; going around the cube their
//! first column touches, in turn, the face to their left: Left touches Back,
//! Front touches Left, Right touches Front and Back touches Right.

use itertools::Itertools;
use std::{fmt::Display, str::FromStr};
use strum::{EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Facelets per face.
pub const FACELETS_PER_FACE: usize = 9;
/// Facelets on the whole cube.
pub const FACELET_COUNT: usize = 6 * FACELETS_PER_FACE;

/// An enum for the faces of the cube. The notation letter is used both for
/// parsing and display.
///
/// - U: top face
/// - D: bottom face
/// - L: left face
/// - R: right face
/// - F: front face
/// - B: back face
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone, Copy)]
#[derive(EnumIter, EnumString, strum::Display)]
pub enum Face {
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "F")]
    Front,
    #[strum(serialize = "B")]
    Back,
}

impl Face {
    /// Every face in storage order.
    pub const ALL: [Self; 6] = {
        use Face::{Back, Down, Front, Left, Right, Up};
        let v = [Up, Down, Left, Right, Front, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face on the other side of the cube. A turn of one face never
    /// touches a facelet of its opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The color this face carries on a freshly constructed cube.
    #[must_use]
    pub const fn home_color(self) -> Color {
        Color::ALL[self as usize]
    }
}

/// A facelet color. Colors carry no meaning beyond equality; the letter is
/// only used for the textual facelet encoding.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone, Copy)]
#[derive(EnumIter, EnumString, strum::Display)]
pub enum Color {
    #[strum(serialize = "W")]
    White,
    #[strum(serialize = "Y")]
    Yellow,
    #[strum(serialize = "G")]
    Green,
    #[strum(serialize = "B")]
    Blue,
    #[strum(serialize = "R")]
    Red,
    #[strum(serialize = "O")]
    Orange,
}

impl Color {
    /// Colors indexed by the face that carries them on the solved cube.
    pub const ALL: [Self; 6] = {
        use Color::{Blue, Green, Orange, Red, White, Yellow};
        let v = [White, Yellow, Green, Blue, Red, Orange];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };
}

/// A deterministic, hashable encoding of a [`CubeState`] used to deduplicate
/// states during search. Two states have equal keys iff they are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey([u8; FACELET_COUNT]);

impl CanonicalKey {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; FACELET_COUNT] {
        &self.0
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateParseError {
    #[error("A facelet string must have exactly 54 letters, found {0}")]
    WrongLength(usize),
    #[error("Unknown color letter {letter:?} at position {position}")]
    UnknownColor { letter: char, position: usize },
    #[error("Every color must appear exactly 9 times, but {color:?} appears {count} times")]
    ColorCount { color: Color, count: usize },
}

/// The underlying struct for representing a configuration of the cube.
///
/// A state is a plain value: cloning it yields an independent copy and the
/// only mutators are the face rotation primitives here and the move engine.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CubeState {
    faces: [[Color; FACELETS_PER_FACE]; 6],
}

/// `FACE_CW[i]` is the index that lands on `i` after a clockwise turn.
const FACE_CW: [usize; FACELETS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// The inverse of `FACE_CW`.
const FACE_CCW: [usize; FACELETS_PER_FACE] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

impl Default for CubeState {
    fn default() -> CubeState {
        CubeState::new_solved()
    }
}

impl CubeState {
    /// The canonical solved cube: every face carries its home color.
    #[must_use]
    pub fn new_solved() -> Self {
        CubeState {
            faces: Face::ALL.map(|face| [face.home_color(); FACELETS_PER_FACE]),
        }
    }

    /// Whether every face is a single color. The colors do not have to be the
    /// home colors of their faces.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|facelets| facelets.iter().all(|&color| color == facelets[0]))
    }

    #[must_use]
    pub fn facelets(&self, face: Face) -> &[Color; FACELETS_PER_FACE] {
        &self.faces[face as usize]
    }

    pub(crate) fn facelets_mut(&mut self, face: Face) -> &mut [Color; FACELETS_PER_FACE] {
        &mut self.faces[face as usize]
    }

    /// The color at `index` of `face`, in row-major order.
    ///
    /// # Panics
    ///
    /// If `index` is not below 9.
    #[must_use]
    pub fn facelet(&self, face: Face, index: usize) -> Color {
        self.faces[face as usize][index]
    }

    pub(crate) fn set_facelet(&mut self, face: Face, index: usize, color: Color) {
        self.faces[face as usize][index] = color;
    }

    /// How often each color occurs, indexed by `Color as usize`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &color in self.faces.iter().flatten() {
            counts[color as usize] += 1;
        }
        counts
    }

    /// Whether every color occurs exactly 9 times.
    #[must_use]
    pub fn colors_conserved(&self) -> bool {
        self.color_counts()
            .iter()
            .all(|&count| count == FACELETS_PER_FACE)
    }

    #[must_use]
    pub fn canonical_key(&self) -> CanonicalKey {
        let mut key = [0; FACELET_COUNT];
        for (byte, &color) in key.iter_mut().zip(self.faces.iter().flatten()) {
            *byte = color as u8;
        }
        CanonicalKey(key)
    }

    /// Rotate the 9 facelets of `face` a quarter turn clockwise. Other faces
    /// are untouched; the ring of neighboring facelets is the engine's job.
    pub fn rotate_face_cw(&mut self, face: Face) {
        let facelets = self.facelets_mut(face);
        let old = *facelets;
        *facelets = FACE_CW.map(|i| old[i]);
    }

    /// Rotate the 9 facelets of `face` a quarter turn counterclockwise.
    pub fn rotate_face_ccw(&mut self, face: Face) {
        let facelets = self.facelets_mut(face);
        let old = *facelets;
        *facelets = FACE_CCW.map(|i| old[i]);
    }

    /// The 54 color letters in [`Face::ALL`] order.
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        self.faces.iter().flatten().join("")
    }

    /// An unfolded picture of the cube with Up on top, then the Left, Front,
    /// Right and Back faces side by side, then Down.
    #[must_use]
    pub fn net(&self) -> String {
        let row = |face: Face, r: usize| self.facelets(face)[r * 3..r * 3 + 3].iter().join(" ");
        let pad = " ".repeat(6);

        let mut lines = vec![];
        for r in 0..3 {
            lines.push(format!("{pad}{}", row(Face::Up, r)));
        }
        for r in 0..3 {
            lines.push(
                [Face::Left, Face::Front, Face::Right, Face::Back]
                    .into_iter()
                    .map(|face| row(face, r))
                    .join(" "),
            );
        }
        for r in 0..3 {
            lines.push(format!("{pad}{}", row(Face::Down, r)));
        }
        lines.join("\n")
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_facelet_string())
    }
}

impl FromStr for CubeState {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let letter_count = s.chars().count();
        if letter_count != FACELET_COUNT {
            return Err(StateParseError::WrongLength(letter_count));
        }

        let mut state = CubeState::new_solved();
        for (position, letter) in s.chars().enumerate() {
            let mut buf = [0; 4];
            let color = Color::from_str(letter.encode_utf8(&mut buf))
                .map_err(|_| StateParseError::UnknownColor { letter, position })?;
            state.set_facelet(
                Face::ALL[position / FACELETS_PER_FACE],
                position % FACELETS_PER_FACE,
                color,
            );
        }

        let counts = state.color_counts();
        if let Some(color) =
            Color::iter().find(|&color| counts[color as usize] != FACELETS_PER_FACE)
        {
            return Err(StateParseError::ColorCount {
                color,
                count: counts[color as usize],
            });
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "WWWWWWWWWYYYYYYYYYGGGGGGGGGBBBBBBBBBRRRRRRRRROOOOOOOOO";

    #[test]
    fn test_new_solved() {
        let cube = CubeState::new_solved();
        assert!(cube.is_solved());
        assert!(cube.colors_conserved());
        for face in Face::iter() {
            assert!(cube.facelets(face).iter().all(|&c| c == face.home_color()));
        }
        assert_eq!(cube.to_facelet_string(), SOLVED);
    }

    #[test]
    fn test_opposites() {
        for face in Face::ALL {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn test_face_letters() {
        assert_eq!(Face::ALL.iter().join(""), "UDLRFB");
        assert_eq!(Face::from_str("F"), Ok(Face::Front));
        assert!(Face::from_str("X").is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_facelet_index_past_face() {
        let _ = CubeState::new_solved().facelet(Face::Up, FACELETS_PER_FACE);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = CubeState::new_solved();
        let mut copy = original.clone();
        copy.rotate_face_cw(Face::Up);
        copy.set_facelet(Face::Up, 0, Color::Red);
        assert!(original.is_solved());
        assert_ne!(original, copy);
    }

    #[test]
    fn test_rotate_face_only_touches_that_face() {
        let mut cube = CubeState::new_solved();
        for (i, &color) in Color::ALL.iter().chain(&Color::ALL[..3]).enumerate() {
            cube.set_facelet(Face::Front, i, color);
        }
        let before = cube.clone();
        cube.rotate_face_cw(Face::Front);

        let front = cube.facelets(Face::Front);
        let old = before.facelets(Face::Front);
        assert_eq!(front[0], old[6]);
        assert_eq!(front[2], old[0]);
        assert_eq!(front[4], old[4]);
        assert_eq!(front[8], old[2]);
        for face in Face::ALL.into_iter().filter(|&f| f != Face::Front) {
            assert_eq!(cube.facelets(face), before.facelets(face));
        }
    }

    #[test]
    fn test_ccw_is_three_cw() {
        let mut cube = CubeState::new_solved();
        for (i, color) in Color::iter().cycle().take(9).enumerate() {
            cube.set_facelet(Face::Left, i, color);
        }
        let mut ccw = cube.clone();
        ccw.rotate_face_ccw(Face::Left);
        let mut cw3 = cube.clone();
        for _ in 0..3 {
            cw3.rotate_face_cw(Face::Left);
        }
        assert_eq!(ccw, cw3);

        let mut round_trip = cube.clone();
        round_trip.rotate_face_cw(Face::Left);
        round_trip.rotate_face_ccw(Face::Left);
        assert_eq!(round_trip, cube);
    }

    #[test]
    fn test_relabeled_state_is_solved() {
        let relabeled: CubeState = "YYYYYYYYYWWWWWWWWWBBBBBBBBBGGGGGGGGGOOOOOOOOORRRRRRRRR"
            .parse()
            .unwrap();
        assert!(relabeled.is_solved());
        assert_ne!(relabeled, CubeState::new_solved());
    }

    #[test]
    fn test_canonical_key() {
        let a = CubeState::new_solved();
        let mut b = a.clone();
        assert_eq!(a.canonical_key(), b.canonical_key());
        b.rotate_face_cw(Face::Down);
        // A face rotation of a uniform face changes nothing visible.
        assert_eq!(a.canonical_key(), b.canonical_key());
        b.set_facelet(Face::Down, 0, Color::White);
        b.set_facelet(Face::Up, 0, Color::Yellow);
        assert_ne!(a.canonical_key(), b.canonical_key());
        assert_eq!(a.canonical_key().as_bytes()[9], Color::Yellow as u8);
    }

    #[test]
    fn test_facelet_string_round_trip() {
        let cube: CubeState = SOLVED.parse().unwrap();
        assert_eq!(cube, CubeState::new_solved());
        assert_eq!(cube.to_string(), SOLVED);
    }

    #[test]
    fn test_facelet_string_errors() {
        assert_eq!(
            "WWW".parse::<CubeState>(),
            Err(StateParseError::WrongLength(3))
        );
        let bad_letter = SOLVED.replacen('Y', "X", 1);
        assert_eq!(
            bad_letter.parse::<CubeState>(),
            Err(StateParseError::UnknownColor {
                letter: 'X',
                position: 9
            })
        );
        let bad_count = SOLVED.replacen('Y', "W", 1);
        assert_eq!(
            bad_count.parse::<CubeState>(),
            Err(StateParseError::ColorCount {
                color: Color::White,
                count: 10
            })
        );
    }

    #[test]
    fn test_net() {
        let net = CubeState::new_solved().net();
        let lines = net.lines().collect_vec();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "      W W W");
        assert_eq!(lines[3], "G G G R R R B B B O O O");
        assert_eq!(lines[8], "      Y Y Y");
    }
}
