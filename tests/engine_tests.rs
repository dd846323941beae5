//! Decision engine integration tests.

use std::collections::HashSet;

use ttt_engine::core::{Board, EngineConfig, GameOutcome, GameRng, Side, WinDetector, LINES};
use ttt_engine::engine::{minimax, DecisionEngine, Minimax, Rule};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn decide(s: &str, side: Side) -> (usize, Rule) {
    let mut engine = DecisionEngine::default();
    let decision = engine.choose_move(&board(s), side).unwrap();
    (decision.cell, decision.rule)
}

/// Every reachable non-terminal board with the side to move.
fn reachable_positions() -> Vec<(Board, Side)> {
    fn walk(board: Board, to_move: Side, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Side)>) {
        if WinDetector::evaluate(&board).is_terminal() || !seen.insert(board) {
            return;
        }
        out.push((board, to_move));
        for cell in board.empty_cells() {
            walk(board.with(cell, to_move), to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Side::PlayerA, &mut seen, &mut out);
    out
}

// =============================================================================
// Win / Block
// =============================================================================

#[test]
fn test_takes_win_on_every_line() {
    for side in [Side::PlayerA, Side::PlayerB] {
        for line in LINES {
            let [a, b, target] = line;
            let mut position = Board::new().with(a, side).with(b, side);
            for cell in (0..9).filter(|c| !line.contains(c)).take(2) {
                position = position.with(cell, side.opponent());
            }

            let mut engine = DecisionEngine::default();
            let decision = engine.choose_move(&position, side).unwrap();

            assert_eq!(decision.cell, target, "line {line:?} for {side:?}");
            assert_eq!(decision.rule, Rule::Win);
            assert_eq!(
                WinDetector::evaluate(&position.with(decision.cell, side)),
                GameOutcome::Win(side)
            );
        }
    }
}

#[test]
fn test_blocks_on_every_line() {
    for side in [Side::PlayerA, Side::PlayerB] {
        let opponent = side.opponent();
        for line in LINES {
            let [a, b, target] = line;
            let own = (0..9).find(|c| !line.contains(c)).unwrap();
            let position = Board::new()
                .with(a, opponent)
                .with(b, opponent)
                .with(own, side);

            let mut engine = DecisionEngine::default();
            let decision = engine.choose_move(&position, side).unwrap();

            assert_eq!(decision.cell, target, "line {line:?} for {side:?}");
            assert_eq!(decision.rule, Rule::Block);
        }
    }
}

#[test]
fn test_win_preferred_over_block() {
    // X X .
    // O O .
    // . . .
    assert_eq!(decide("XX.|OO.|...", Side::PlayerA), (2, Rule::Win));
    assert_eq!(decide("XX.|OO.|...", Side::PlayerB), (5, Rule::Win));
}

// =============================================================================
// Rule Ordering
// =============================================================================

#[test]
fn test_fork() {
    // . . .
    // . . X
    // X O O
    assert_eq!(decide("...|..X|XOO", Side::PlayerA), (3, Rule::Fork));
}

#[test]
fn test_fork_block() {
    // . . .
    // X . O
    // . . X
    assert_eq!(decide("...|X.O|..X", Side::PlayerB), (0, Rule::BlockFork));

    // . . .
    // . . .
    // X X O   (single fork cell)
    assert_eq!(decide("...|...|XXO", Side::PlayerB), (4, Rule::BlockFork));
}

#[test]
fn test_fork_block_double_fork_forces_instead() {
    // X . .
    // . O .
    // . . X   (X forks at 2 and 6; O threatens on an edge)
    assert_eq!(decide("X..|.O.|..X", Side::PlayerB), (1, Rule::BlockFork));
}

#[test]
fn test_pattern_library() {
    // . . O
    // . X .
    // . . .
    assert_eq!(decide("..O|.X.|...", Side::PlayerA), (6, Rule::Pattern));

    // O . .
    // . X .
    // . . .
    assert_eq!(decide("O..|.X.|...", Side::PlayerA), (8, Rule::Pattern));
}

#[test]
fn test_positional_rules() {
    assert_eq!(decide("...|...|..X", Side::PlayerB), (4, Rule::Center));
    assert_eq!(decide("...|.X.|..O", Side::PlayerA), (0, Rule::OppositeCorner));
    assert_eq!(decide("...|.X.|...", Side::PlayerB), (0, Rule::Corner));

    // X . O
    // O X X
    // X . O
    assert_eq!(decide("X.O|OXX|X.O", Side::PlayerB), (1, Rule::Edge));
}

#[test]
fn test_opening_book() {
    let mut engine = DecisionEngine::new(EngineConfig::default().with_seed(3));
    let decision = engine.choose_move(&Board::new(), Side::PlayerA).unwrap();

    assert_eq!(decision.rule, Rule::Opening);
    assert!([0, 2, 4, 8].contains(&decision.cell));
}

#[test]
fn test_opening_reproducible_with_seed() {
    let openings = |seed| {
        let mut engine = DecisionEngine::new(EngineConfig::default().with_seed(seed));
        (0..10)
            .map(|_| engine.choose_move(&Board::new(), Side::PlayerA).unwrap().cell)
            .collect::<Vec<_>>()
    };
    assert_eq!(openings(11), openings(11));
}

#[test]
fn test_restored_rng_replays_openings() {
    let mut engine = DecisionEngine::default();
    for _ in 0..5 {
        engine.choose_move(&Board::new(), Side::PlayerA);
    }
    let state = engine.rng().state();

    fn openings(engine: &mut DecisionEngine) -> Vec<usize> {
        (0..10)
            .map(|_| engine.choose_move(&Board::new(), Side::PlayerA).unwrap().cell)
            .collect()
    }
    let expected = openings(&mut engine);

    let mut resumed = DecisionEngine::default().with_rng(GameRng::from_state(&state));
    assert_eq!(resumed.rng().seed(), state.seed);
    assert_eq!(openings(&mut resumed), expected);
}

// =============================================================================
// Safety and Determinism
// =============================================================================

#[test]
fn test_never_selects_occupied_cell() {
    let mut engine = DecisionEngine::default();
    for (position, side) in reachable_positions() {
        let decision = engine.choose_move(&position, side).unwrap();
        assert!(position.is_empty(decision.cell), "{position}\nchose {}", decision.cell);
    }
}

#[test]
fn test_idempotent_decisions() {
    for memoize in [true, false] {
        let mut engine = DecisionEngine::new(EngineConfig::default().with_memoize(memoize));
        for (position, side) in reachable_positions().into_iter().skip(1).step_by(7) {
            let first = engine.choose_move(&position, side).unwrap();
            let second = engine.choose_move(&position, side).unwrap();
            assert_eq!(first.cell, second.cell);
            assert_eq!(first.rule, second.rule);
        }
    }
}

#[test]
fn test_cache_keyed_by_engine_side() {
    let mut engine = DecisionEngine::default();
    // . . O
    // . X .
    // . . .
    let position = board("..O|.X.|...");

    let as_a = engine.choose_move(&position, Side::PlayerA).unwrap();
    assert_eq!((as_a.cell, as_a.rule), (6, Rule::Pattern));

    // Same physical board after a label swap must not replay cell 6.
    let as_b = engine.choose_move(&position, Side::PlayerB).unwrap();
    assert!(!as_b.cached);
    assert_eq!((as_b.cell, as_b.rule), (0, Rule::Corner));

    assert_eq!(engine.cache().len(), 2);
    assert!(engine.choose_move(&position, Side::PlayerA).unwrap().cached);
}

#[test]
fn test_full_board_returns_none() {
    let mut engine = DecisionEngine::default();
    assert!(engine.choose_move(&board("XOX|XOO|OXX"), Side::PlayerA).is_none());
}

// =============================================================================
// Minimax
// =============================================================================

#[test]
fn test_pruning_never_changes_selected_move() {
    for (position, side) in reachable_positions().into_iter().skip(1) {
        let plain = Minimax::new(side).best_move(&position);
        let pruned = Minimax::new(side).with_pruning(true).best_move(&position);
        assert_eq!(plain, pruned, "{position}");
    }
}

#[test]
fn test_minimax_prefers_faster_win() {
    // X X .
    // X O O
    // O . .   (X to move, 2 wins at once)
    let position = board("XX.|XOO|O..");
    let (cell, score) = Minimax::new(Side::PlayerA).best_move(&position).unwrap();
    assert_eq!(cell, 2);
    assert_eq!(score, 10);
}

#[test]
fn test_reply_to_corner_opening_is_not_losing() {
    let opened = Board::new().with(0, Side::PlayerA);
    let mut engine = DecisionEngine::default();
    let reply = engine.choose_move(&opened, Side::PlayerB).unwrap();

    let after = opened.with(reply.cell, Side::PlayerB);
    assert!(minimax(&after, 0, false, Side::PlayerB) >= 0);
}

// =============================================================================
// Never Loses
// =============================================================================

/// Outcomes of every game where `engine` plays `engine_side` against every
/// possible sequence of opponent replies.
fn all_outcomes(engine: &mut DecisionEngine, engine_side: Side) -> Vec<GameOutcome> {
    fn walk(
        engine: &mut DecisionEngine,
        engine_side: Side,
        position: Board,
        to_move: Side,
        out: &mut Vec<GameOutcome>,
    ) {
        let outcome = WinDetector::evaluate(&position);
        if outcome.is_terminal() {
            out.push(outcome);
            return;
        }
        if to_move == engine_side {
            let cell = engine.choose_move(&position, to_move).unwrap().cell;
            walk(engine, engine_side, position.with(cell, to_move), to_move.opponent(), out);
        } else {
            for cell in position.empty_cells() {
                walk(engine, engine_side, position.with(cell, to_move), to_move.opponent(), out);
            }
        }
    }

    let mut out = Vec::new();
    walk(engine, engine_side, Board::new(), Side::PlayerA, &mut out);
    out
}

#[test]
fn test_minimax_only_never_loses() {
    for (engine_side, alpha_beta) in [(Side::PlayerB, false), (Side::PlayerA, true)] {
        let config = EngineConfig::default()
            .with_heuristics(false)
            .with_alpha_beta(alpha_beta);
        let mut engine = DecisionEngine::new(config);

        let outcomes = all_outcomes(&mut engine, engine_side);
        assert!(!outcomes.is_empty());
        assert!(
            outcomes
                .iter()
                .all(|o| *o != GameOutcome::Win(engine_side.opponent())),
            "minimax lost as {engine_side:?}"
        );
        assert_eq!(engine.stats().openings, 0);
        assert!(engine.stats().searches > 0);
    }
}

#[test]
fn test_heuristic_engine_never_loses() {
    for engine_side in [Side::PlayerA, Side::PlayerB] {
        for seed in 0..8 {
            let mut engine = DecisionEngine::new(EngineConfig::default().with_seed(seed));
            let outcomes = all_outcomes(&mut engine, engine_side);
            assert!(
                outcomes
                    .iter()
                    .all(|o| *o != GameOutcome::Win(engine_side.opponent())),
                "heuristics lost as {engine_side:?} with seed {seed}"
            );
        }
    }
}

#[test]
fn test_best_vs_best_always_draws() {
    for opening in [0, 2, 4, 8] {
        let mut a = DecisionEngine::default();
        let mut b = DecisionEngine::default();

        let mut position = Board::new().with(opening, Side::PlayerA);
        let mut to_move = Side::PlayerB;
        while !WinDetector::evaluate(&position).is_terminal() {
            let engine = if to_move == Side::PlayerA { &mut a } else { &mut b };
            let cell = engine.choose_move(&position, to_move).unwrap().cell;
            position.place(cell, to_move);
            to_move = to_move.opponent();
        }

        assert_eq!(
            WinDetector::evaluate(&position),
            GameOutcome::Draw,
            "opening {opening}:\n{position}"
        );
    }
}
