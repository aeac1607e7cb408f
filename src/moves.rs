//! The move vocabulary and its textual notation.
//!
//! A token is a face letter (`U D L R F B`) optionally followed by `'` for a
//! counterclockwise quarter turn or `2` for a half turn. A sequence is a list
//! of tokens separated by whitespace, e.g. `R U R' U'`.

use crate::cube::Face;
use itertools::Itertools;
use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};
use thiserror::Error;

/// How far to turn a face. `CounterClockwise` is a quarter turn against the
/// clock as seen looking at the face, and `Half` is a 180 degree turn.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Amount {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Amount {
    /// Signed quarter turns: +1, -1 or +2.
    #[must_use]
    pub const fn quarter_turns(self) -> i8 {
        match self {
            Amount::Clockwise => 1,
            Amount::CounterClockwise => -1,
            Amount::Half => 2,
        }
    }

    /// The amount that turns a face by `quarter_turns` modulo 4, or `None`
    /// when that is the identity.
    #[must_use]
    pub fn from_quarter_turns(quarter_turns: i32) -> Option<Self> {
        match quarter_turns.rem_euclid(4) {
            1 => Some(Amount::Clockwise),
            2 => Some(Amount::Half),
            3 => Some(Amount::CounterClockwise),
            _ => None,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Amount::Clockwise => Amount::CounterClockwise,
            Amount::CounterClockwise => Amount::Clockwise,
            Amount::Half => Amount::Half,
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Clockwise => write!(f, ""),
            Amount::CounterClockwise => write!(f, "'"),
            Amount::Half => write!(f, "2"),
        }
    }
}

/// A face equipped with a turning amount.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Move {
    pub face: Face,
    pub amount: Amount,
}

impl Move {
    /// The twelve quarter turns every cube position is reachable from, in
    /// [`Face::ALL`] order with the clockwise turn first.
    pub const GENERATORS: [Move; 12] = {
        let mut out = [Move::new(Face::Up, Amount::Clockwise); 12];
        let mut i = 0;
        while i < Face::ALL.len() {
            out[2 * i] = Move::new(Face::ALL[i], Amount::Clockwise);
            out[2 * i + 1] = Move::new(Face::ALL[i], Amount::CounterClockwise);
            i += 1;
        }
        out
    };

    /// The whole vocabulary: the generators followed by the six half turns.
    pub const ALL: [Move; 18] = {
        let mut out = [Move::new(Face::Up, Amount::Clockwise); 18];
        let mut i = 0;
        while i < Move::GENERATORS.len() {
            out[i] = Move::GENERATORS[i];
            i += 1;
        }
        while i < out.len() {
            out[i] = Move::new(Face::ALL[i - Move::GENERATORS.len()], Amount::Half);
            i += 1;
        }
        out
    };

    #[must_use]
    pub const fn new(face: Face, amount: Amount) -> Self {
        Self { face, amount }
    }

    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            face: self.face,
            amount: self.amount.inverse(),
        }
    }

    #[must_use]
    pub const fn quarter_turns(&self) -> i8 {
        self.amount.quarter_turns()
    }

    fn parse_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let letter = chars.next()?;
        let face = Face::from_str(letter.encode_utf8(&mut [0; 4])).ok()?;
        let amount = match chars.as_str() {
            "" => Amount::Clockwise,
            "'" => Amount::CounterClockwise,
            "2" => Amount::Half,
            _ => return None,
        };
        Some(Move::new(face, amount))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.amount)
    }
}

/// A token outside the move grammar. Nothing is applied when a sequence
/// fails to parse.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Unrecognized move {token:?} at position {position}")]
pub struct ParseError {
    pub token: String,
    /// Zero-based index of the token within its sequence.
    pub position: usize,
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse_token(s.trim()).ok_or_else(|| ParseError {
            token: s.trim().to_owned(),
            position: 0,
        })
    }
}

/// A struct representing sequences of moves, used for representing
/// scramble sequences and solution sequences.
#[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self(vec![])
    }

    /// The sequence that undoes this one: reversed, with every move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.iter().rev().map(Move::inverse).collect()
    }

    /// Length in the quarter-turn metric, where a half turn counts twice.
    #[must_use]
    pub fn quarter_turn_count(&self) -> usize {
        self.iter()
            .map(|move_| usize::from(move_.quarter_turns().unsigned_abs()))
            .sum()
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = ParseError;

    /// Parses the whole text before returning anything, so a bad token
    /// anywhere rejects the entire sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                Move::parse_token(token).ok_or_else(|| ParseError {
                    token: token.to_owned(),
                    position,
                })
            })
            .collect()
    }
}
