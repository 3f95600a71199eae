//! End-to-end scenarios for the search/evaluation core.
//!
//! These drive the public surface the way the host UI does: build a
//! position through the rules engine, ask the engine for a move, apply it,
//! and check the statistics and the running advantage along the way.

use maestro::{evaluate, evaluate_incremental, search, EngineError, GameSession, Score};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Position, Square};

fn position(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .expect("valid FEN")
        .into_position(CastlingMode::Standard)
        .expect("legal position")
}

/// Side-to-move sign for the canonical (positive favors Black) frame.
fn perspective(side: Color) -> Score {
    match side {
        Color::Black => 1,
        Color::White => -1,
    }
}

#[test]
fn test_opening_search_finds_a_legal_move() {
    //! Starting position, depth 2, White to move, balanced baseline.
    let pos = Chess::default();
    let result = search(&pos, Color::White, 0, 2).expect("search runs");

    let chosen = result.best_move.expect("an opening move exists");
    assert!(
        pos.legal_moves().contains(&chosen),
        "chosen move must come from the rules engine's list"
    );
    assert!(result.stats.positions_evaluated > 0);
    assert!(result.stats.time_elapsed_seconds >= 0.0);
}

#[test]
fn test_engine_finds_mate_in_one() {
    // Back-rank mate: Ra8#.
    let pos = position("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1");
    for depth in 2..=3 {
        let result = search(&pos, Color::White, -evaluate(&pos), depth).expect("search runs");
        let chosen = result.best_move.expect("a move exists");
        let after = pos.clone().play(&chosen).expect("legal move applies");
        assert!(
            after.is_checkmate(),
            "depth {depth} should find the mating move, got {chosen:?}"
        );
    }
}

#[test]
fn test_forced_move_is_returned_at_any_depth() {
    // Black's only legal move is the pawn push h6-h5.
    let pos = position("k7/8/K6p/8/8/8/8/1R6 b - - 0 1");
    assert_eq!(pos.legal_moves().len(), 1);

    for depth in 1..=4 {
        let result = search(&pos, Color::Black, evaluate(&pos), depth).expect("search runs");
        let chosen = result.best_move.expect("the forced move");
        assert_eq!(chosen.from(), Some(Square::H6));
        assert_eq!(chosen.to(), Square::H5);
    }
}

#[test]
fn test_forced_move_at_depth_one_evaluates_one_position() {
    let pos = position("k7/8/K6p/8/8/8/8/1R6 b - - 0 1");
    let result = search(&pos, Color::Black, evaluate(&pos), 1).expect("search runs");
    assert_eq!(result.stats.positions_evaluated, 1);
}

#[test]
fn test_repeated_searches_are_identical() {
    let pos = position("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3");
    let baseline = evaluate(&pos);
    let a = search(&pos, Color::Black, baseline, 3).expect("search runs");
    let b = search(&pos, Color::Black, baseline, 3).expect("search runs");
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.stats.positions_evaluated, b.stats.positions_evaluated);
}

#[test]
fn test_root_score_round_trips_through_incremental_evaluation() {
    //! At depth 1 the root score is the child evaluation re-signed per the
    //! caller contract, so refreshing the accumulator reproduces it.
    let pos = position("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2");
    let accumulator = evaluate(&pos);
    let baseline = -accumulator; // White to move

    let result = search(&pos, Color::White, baseline, 1).expect("search runs");
    let chosen = result.best_move.expect("a move exists");
    let score = result.score.expect("a score exists");

    let after = pos.clone().play(&chosen).expect("legal move applies");
    let refreshed = evaluate_incremental(&after, &chosen, accumulator);
    assert_eq!(refreshed, perspective(Color::White) * score);
}

#[test]
fn test_depth_zero_and_terminal_roots_yield_no_move() {
    let start = search(&Chess::default(), Color::White, 0, 0).expect("search runs");
    assert!(start.best_move.is_none());
    assert!(start.stats.positions_evaluated <= 1);

    let stalemate = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = search(&stalemate, Color::Black, evaluate(&stalemate), 3).expect("search runs");
    assert!(result.best_move.is_none());
    assert!(result.stats.positions_evaluated <= 1);
}

#[test]
fn test_depth_validation_is_enforced_at_the_boundary() {
    assert!(matches!(
        search(&Chess::default(), Color::White, 0, 7),
        Err(EngineError::DepthOutOfRange { .. })
    ));
}

#[test]
fn test_scripted_game_keeps_advantage_synchronized() {
    //! A few human/engine exchanges; after every half-move the running
    //! accumulator must equal a full re-evaluation.
    let mut session = GameSession::with_depth(2);

    for (from, to) in [(Square::E2, Square::E4), (Square::D2, Square::D4)] {
        session.play_move(from, to).expect("scripted move is legal");
        assert_eq!(session.advantage(), evaluate(session.position()));

        if session.is_game_over() {
            break;
        }
        let reply = session.engine_reply().expect("engine finds a move");
        assert_eq!(reply.advantage, evaluate(session.position()));
        assert!(reply.stats.positions_evaluated > 0);
        assert!(reply.stats.positions_per_second >= 0.0);
    }
}

#[test]
fn test_hint_proposes_a_legal_move_without_playing_it() {
    let session = GameSession::with_depth(4);
    let hint = session.hint().expect("hint runs").expect("a move exists");
    assert!(session.position().legal_moves().contains(&hint));
    assert_eq!(session.advantage(), 0, "hints must not touch the game");
}
