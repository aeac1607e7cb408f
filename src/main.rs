use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use env_logger::TimestampPrecision;
use facecube::{
    CubeState, MoveEngine, MoveSequence, Scrambler, Solver,
    optimize::{optimize, optimize_fully},
    solver::DEFAULT_MAX_VISITED,
};
use log::{LevelFilter, info};

/// Scrambles, solves and rewrites 3x3x3 cube move sequences
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a solved cube with random moves
    Scramble {
        /// How many moves to draw
        #[arg(short, default_value_t = 20)]
        n: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
        /// Draw half turns as well as quarter turns
        #[arg(long)]
        half_turns: bool,
    },
    /// Apply a move sequence to a solved cube and show the result
    Apply {
        /// The move sequence, e.g. "R U' F2"
        moves: String,
    },
    /// Search for the shortest sequence that undoes a scramble
    Solve {
        /// The scramble to undo, e.g. "R U R' U'"
        moves: String,
        /// Longest solution to search for, in quarter turns
        #[arg(long, default_value_t = 6)]
        max_depth: usize,
        /// Give up after recording this many distinct states
        #[arg(long, default_value_t = DEFAULT_MAX_VISITED)]
        max_visited: usize,
        /// Give up after this many milliseconds
        #[arg(long)]
        time_limit_ms: Option<u64>,
    },
    /// Cancel consecutive turns of the same face
    Optimize {
        /// The move sequence to rewrite
        moves: String,
        /// Repeat until no more runs merge
        #[arg(long)]
        fully: bool,
    },
    /// Print the sequence that undoes a move sequence
    Invert {
        /// The move sequence to invert
        moves: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match cli.command {
        Commands::Scramble {
            n,
            seed,
            half_turns,
        } => {
            let scrambler = match seed {
                Some(seed) => Scrambler::with_seed(seed),
                None => Scrambler::new(),
            };
            let (state, sequence) = scrambler.with_half_turns(half_turns).scramble(n);
            println!("{sequence}");
            print_state(&state);
        }
        Commands::Apply { moves } => {
            let mut state = CubeState::new_solved();
            let sequence =
                MoveEngine::apply_str(&mut state, &moves).wrap_err("Could not parse the moves")?;
            println!("{sequence}");
            print_state(&state);
        }
        Commands::Solve {
            moves,
            max_depth,
            max_visited,
            time_limit_ms,
        } => {
            let mut solver = Solver::new(max_depth).with_max_visited(max_visited);
            if let Some(time_limit_ms) = time_limit_ms {
                solver = solver.with_time_limit(Duration::from_millis(time_limit_ms));
            }
            let solved = solve_scramble(&solver, &moves)?;
            if !solved.found {
                println!("No solution within {max_depth} moves; undoing the scramble instead:");
            }
            println!("{}", solved.solution);
            print_state(&solved.state);
        }
        Commands::Optimize { moves, fully } => {
            let sequence = moves.parse::<MoveSequence>().wrap_err("Could not parse the moves")?;
            let optimized = if fully {
                optimize_fully(&sequence)
            } else {
                optimize(&sequence)
            };
            println!("{optimized}");
        }
        Commands::Invert { moves } => {
            let sequence = moves.parse::<MoveSequence>().wrap_err("Could not parse the moves")?;
            println!("{}", sequence.inverse());
        }
    }

    Ok(())
}

/// The moves that undo a scramble and the state they leave the cube in.
struct SolvedScramble {
    solution: MoveSequence,
    state: CubeState,
    /// False when the search gave up and the scramble was simply inverted.
    found: bool,
}

fn solve_scramble(solver: &Solver, moves: &str) -> color_eyre::Result<SolvedScramble> {
    let mut state = CubeState::new_solved();
    let scramble =
        MoveEngine::apply_str(&mut state, moves).wrap_err("Could not parse the scramble")?;

    let (result, stats) = solver.solve_with_stats(&state);
    info!(
        "Expanded {} nodes and visited {} states",
        stats.nodes_expanded, stats.states_visited
    );

    let found = result.is_solved();
    let solution = result.into_moves().unwrap_or_else(|| scramble.inverse());
    MoveEngine::apply_sequence(&mut state, &solution);
    Ok(SolvedScramble {
        solution,
        state,
        found,
    })
}

fn print_state(state: &CubeState) {
    println!("{}", state.net());
    println!("Solved: {}", state.is_solved());
}
