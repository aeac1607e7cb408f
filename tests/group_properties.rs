use facecube::{
    Amount, Color, CubeState, Face, Move, MoveEngine, MoveSequence, Scrambler, TrackedCube,
    optimize::{optimize, optimize_fully},
};
use itertools::Itertools;

fn apply_moves(state: &CubeState, moves: &str, repeat: u32) -> CubeState {
    let sequence: MoveSequence = moves.parse().unwrap();
    let mut result = state.clone();
    for _ in 0..repeat {
        MoveEngine::apply_sequence(&mut result, &sequence);
    }
    result
}

/// A reachable state with no symmetry, so equality checks are meaningful.
fn busy_state() -> CubeState {
    apply_moves(&CubeState::new_solved(), "R U2 F' L D B2 R' U", 1)
}

#[test_log::test]
fn test_identity_after_four() {
    let start = busy_state();
    for face in Face::ALL {
        let mut state = start.clone();
        for i in 0..4 {
            MoveEngine::apply(&mut state, Move::new(face, Amount::Clockwise));
            if i < 3 {
                assert_ne!(state, start, "{face} has order below 4");
            }
        }
        assert_eq!(state, start, "{face} applied four times");
    }
}

#[test_log::test]
fn test_inverse_cancels() {
    let start = busy_state();
    for face in Face::ALL {
        let quarter = Move::new(face, Amount::Clockwise);

        let mut state = start.clone();
        MoveEngine::apply(&mut state, quarter);
        MoveEngine::apply(&mut state, quarter.inverse());
        assert_eq!(state, start);

        let mut state = start.clone();
        MoveEngine::apply(&mut state, quarter);
        for _ in 0..3 {
            MoveEngine::apply(&mut state, quarter);
        }
        assert_eq!(state, start);

        let mut state = start.clone();
        MoveEngine::apply(&mut state, Move::new(face, Amount::Half));
        MoveEngine::apply(&mut state, Move::new(face, Amount::Half));
        assert_eq!(state, start);
    }
}

#[test_log::test]
fn test_opposite_faces_commute() {
    let start = busy_state();
    for (a, b) in [("U", "D"), ("L", "R"), ("F", "B")] {
        let commutator = format!("{a} {b} {a}' {b}'");
        assert_eq!(apply_moves(&start, &commutator, 1), start, "{commutator}");
    }
    // Adjacent faces do not.
    assert_ne!(apply_moves(&start, "U R U' R'", 1), start);
}

#[test_log::test]
fn test_color_conservation() {
    let mut scrambler = Scrambler::with_seed(2024).with_half_turns(true);
    for n in [1, 7, 30, 100] {
        let (state, _) = scrambler.scramble(n);
        assert_eq!(state.color_counts(), [9; 6]);
        for color in Color::ALL {
            let count = Face::ALL
                .iter()
                .flat_map(|&face| state.facelets(face))
                .filter(|&&c| c == color)
                .count();
            assert_eq!(count, 9);
        }
    }
}

#[test_log::test]
fn test_centers_never_move() {
    let (state, _) = Scrambler::with_seed(5).scramble(50);
    for face in Face::ALL {
        assert_eq!(state.facelet(face, 4), face.home_color());
    }
}

#[test_log::test]
fn test_commutator_order() {
    let solved = CubeState::new_solved();
    let sexy = "R U R' U'";

    let once = apply_moves(&solved, sexy, 1);
    assert!(!once.is_solved());
    for repeat in 2..6 {
        assert!(!apply_moves(&solved, sexy, repeat).is_solved());
    }
    assert!(apply_moves(&solved, sexy, 6).is_solved());
}

#[test_log::test]
fn test_t_perm_involution() {
    let solved = CubeState::new_solved();
    let t_perm = "R U R' U' R' F R2 U' R' U' R U R' F'";
    assert!(!apply_moves(&solved, t_perm, 1).is_solved());
    assert_eq!(apply_moves(&solved, t_perm, 2), solved);
}

#[test_log::test]
fn test_many_compositions() {
    // R U has order 105.
    let solved = CubeState::new_solved();
    assert!(apply_moves(&solved, "R F", 105).is_solved());
    assert!(apply_moves(&solved, "R U", 105).is_solved());
    assert!(!apply_moves(&solved, "R U", 35).is_solved());
    assert!(!apply_moves(&solved, "R U", 21).is_solved());
    assert!(!apply_moves(&solved, "R U", 15).is_solved());
}

#[test_log::test]
fn test_optimizer_soundness() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..200 {
        let length = rng.usize(0..30);
        // Draw from few faces so long same-face runs are common.
        let faces = [Face::Up, Face::Right];
        let sequence: MoveSequence = (0..length)
            .map(|_| {
                let face = faces[rng.usize(..faces.len())];
                let amount = [Amount::Clockwise, Amount::CounterClockwise, Amount::Half]
                    [rng.usize(..3)];
                Move::new(face, amount)
            })
            .collect();

        let start = busy_state();
        let mut original = start.clone();
        let mut optimized = start.clone();
        MoveEngine::apply_sequence(&mut original, &sequence);
        let rewritten = optimize(&sequence);
        MoveEngine::apply_sequence(&mut optimized, &rewritten);

        assert_eq!(original, optimized, "{sequence} vs {rewritten}");

        let fully = optimize_fully(&sequence);
        let mut fully_optimized = start.clone();
        MoveEngine::apply_sequence(&mut fully_optimized, &fully);
        assert_eq!(original, fully_optimized, "{sequence} vs {fully}");
        assert!(
            fully
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.face != b.face),
            "{fully} still has a mergeable run"
        );
    }
}

#[test_log::test]
fn test_zero_move_scramble() {
    let (state, sequence) = Scrambler::new().scramble(0);
    assert!(state.is_solved());
    assert_eq!(state, CubeState::new_solved());
    assert!(sequence.is_empty());
}

#[test_log::test]
fn test_reverse_scramble() {
    let mut scrambler = Scrambler::with_seed(8);
    for n in [5, 20] {
        let (state, sequence) = scrambler.scramble(n);
        let mut cube = TrackedCube::from(state);
        let undo = sequence.inverse();
        cube.apply_sequence(&undo);
        assert!(cube.is_solved());
        assert_eq!(cube.move_count(), n);
    }
}

#[test_log::test]
fn test_checkerboard_is_an_involution() {
    let solved = CubeState::new_solved();
    let checkerboard = apply_moves(&solved, "U2 D2 F2 B2 L2 R2", 1);
    assert!(!checkerboard.is_solved());
    for face in Face::ALL {
        let facelets = checkerboard.facelets(face);
        assert_eq!(facelets[0], face.home_color());
        assert_eq!(facelets[1], face.opposite().home_color());
        assert_eq!(facelets[4], face.home_color());
    }
    assert_eq!(apply_moves(&checkerboard, "U2 D2 F2 B2 L2 R2", 1), solved);
}
