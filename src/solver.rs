use crate::{
    cube::{CanonicalKey, CubeState},
    engine::MoveEngine,
    moves::{Move, MoveSequence},
    start, success, working,
};
use fxhash::FxHashSet;
use log::{debug, info, trace};
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// The visited-state cap used unless [`Solver::with_max_visited`] says
/// otherwise.
pub const DEFAULT_MAX_VISITED: usize = 5_000_000;

/// How often, in expanded nodes, the wall clock is consulted.
const TIME_CHECK_INTERVAL: u64 = 1024;

/// The outcome of a search. Not finding a solution within the bounds is an
/// expected result rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// A shortest sequence of quarter turns that solves the cube.
    Solved(MoveSequence),
    /// No solution of at most `max_depth` moves was found before the search
    /// ran out of states or hit one of its optional limits.
    NotFoundWithinDepth,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    #[must_use]
    pub fn moves(&self) -> Option<&MoveSequence> {
        match self {
            SolveResult::Solved(moves) => Some(moves),
            SolveResult::NotFoundWithinDepth => None,
        }
    }

    #[must_use]
    pub fn into_moves(self) -> Option<MoveSequence> {
        match self {
            SolveResult::Solved(moves) => Some(moves),
            SolveResult::NotFoundWithinDepth => None,
        }
    }
}

/// An optional bound that cut a search short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    MaxVisited,
    TimeLimit,
}

#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Nodes whose children were generated.
    pub nodes_expanded: u64,
    /// Distinct states recorded in the visited set, including the start.
    pub states_visited: usize,
    pub elapsed: Duration,
    /// Set when the search ended early because of an optional limit.
    pub limit_hit: Option<SearchLimit>,
}

/// Bounded breadth-first search over the twelve quarter-turn generators.
pub struct Solver {
    max_depth: usize,
    max_visited: usize,
    time_limit: Option<Duration>,
}

struct SolverMutable {
    frontier: VecDeque<(CubeState, Vec<Move>)>,
    visited: FxHashSet<CanonicalKey>,
    stats: SearchStats,
}

impl Solver {
    /// A solver that considers solutions of at most `max_depth` quarter turns.
    /// The search grows roughly twelvefold per level, so depths beyond 7 need
    /// a generous [`Solver::with_max_visited`] and patience.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            max_visited: DEFAULT_MAX_VISITED,
            time_limit: None,
        }
    }

    /// Give up once recording a new state would take the visited set past
    /// `max_visited` distinct states.
    #[must_use]
    pub fn with_max_visited(mut self, max_visited: usize) -> Self {
        self.max_visited = max_visited;
        self
    }

    /// Give up once the search has run this long.
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    #[must_use]
    pub fn solve(&self, state: &CubeState) -> SolveResult {
        self.solve_with_stats(state).0
    }

    /// Breadth-first search from `state`. Levels are explored in order of
    /// path length, so the first solution found is a shortest one.
    ///
    /// Children at exactly `max_depth` are tested for being solved but never
    /// queued, since they would not be expanded anyway.
    #[must_use]
    pub fn solve_with_stats(&self, state: &CubeState) -> (SolveResult, SearchStats) {
        info!(
            start!("Searching for a solution of at most {} moves"),
            self.max_depth
        );
        let start = Instant::now();

        let mut mutable = SolverMutable {
            frontier: VecDeque::new(),
            visited: FxHashSet::default(),
            stats: SearchStats::default(),
        };

        let result = self.search(state, &mut mutable, start);

        mutable.stats.states_visited = mutable.visited.len();
        mutable.stats.elapsed = start.elapsed();
        match &result {
            SolveResult::Solved(moves) => info!(
                success!("Found {} in {:.3}s ({} moves)"),
                moves,
                mutable.stats.elapsed.as_secs_f64(),
                moves.len()
            ),
            SolveResult::NotFoundWithinDepth => info!(
                "No solution within {} moves after {:.3}s ({:?})",
                self.max_depth,
                mutable.stats.elapsed.as_secs_f64(),
                mutable.stats.limit_hit
            ),
        }
        debug!(
            "Expanded {} nodes, visited {} states",
            mutable.stats.nodes_expanded, mutable.stats.states_visited
        );

        (result, mutable.stats)
    }

    fn search(&self, state: &CubeState, mutable: &mut SolverMutable, start: Instant) -> SolveResult {
        if state.is_solved() {
            return SolveResult::Solved(MoveSequence::new());
        }

        mutable.visited.insert(state.canonical_key());
        mutable.frontier.push_back((state.clone(), vec![]));

        let mut expanding_depth = None;
        while let Some((node, path)) = mutable.frontier.pop_front() {
            if path.len() >= self.max_depth {
                continue;
            }
            if expanding_depth != Some(path.len()) {
                expanding_depth = Some(path.len());
                debug!(
                    working!("Searching depth {}, {} states queued..."),
                    path.len() + 1,
                    mutable.frontier.len() + 1
                );
            }

            if mutable
                .stats
                .nodes_expanded
                .is_multiple_of(TIME_CHECK_INTERVAL)
                && self
                    .time_limit
                    .is_some_and(|time_limit| start.elapsed() >= time_limit)
            {
                mutable.stats.limit_hit = Some(SearchLimit::TimeLimit);
                return SolveResult::NotFoundWithinDepth;
            }
            mutable.stats.nodes_expanded += 1;

            // Every sibling is goal tested before any of them can trip the
            // visited cap.
            let children = Move::GENERATORS.map(|move_| (move_, MoveEngine::applied(&node, move_)));
            if let Some(&(move_, _)) = children.iter().find(|(_, child)| child.is_solved()) {
                let mut solution = path;
                solution.push(move_);
                return SolveResult::Solved(solution.into());
            }

            let child_depth = path.len() + 1;
            if child_depth >= self.max_depth {
                continue;
            }
            for (move_, child) in children {
                if !mutable.visited.insert(child.canonical_key()) {
                    continue;
                }
                if mutable.visited.len() > self.max_visited {
                    mutable.stats.limit_hit = Some(SearchLimit::MaxVisited);
                    return SolveResult::NotFoundWithinDepth;
                }
                let mut child_path = Vec::with_capacity(child_depth);
                child_path.extend_from_slice(&path);
                child_path.push(move_);
                mutable.frontier.push_back((child, child_path));
            }
            trace!(
                "Expanded {} nodes, {} visited",
                mutable.stats.nodes_expanded,
                mutable.visited.len()
            );
        }

        SolveResult::NotFoundWithinDepth
    }
}
