//! Depth-bounded adversarial search
//!
//! Two symmetric procedures: plain minimax with alpha-beta pruning for
//! finding the strongest move, and an inverted variant that hunts for the
//! weakest one, used by the sabotage player to steer an opponent toward
//! their worst outcome. Both cut off at a fixed depth and fall back to
//! [`GameState::evaluate_score`], so neither is exact; they are bounded
//! approximations by design.

use crate::logic::{GameState, Mark, Move};

/// Depth cutoff for best-move search, in plies
pub const MINIMAX_DEPTH: usize = 4;
/// Depth cutoff for the sabotage search, in plies
pub const SABOTAGE_DEPTH: usize = 5;

/// Standard alpha-beta minimax.
///
/// Returns `state.evaluate_score(maximizer)` at the depth cutoff or on
/// terminal states; otherwise recurses over the legal moves in ascending
/// cell-index order, alternating between maximizing and minimizing, and
/// prunes subtrees once `alpha >= beta`.
pub fn minimax(
    state: &GameState,
    maximizer: Mark,
    is_maximizing: bool,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth >= MINIMAX_DEPTH || state.game_over() {
        return state.evaluate_score(maximizer);
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for mv in state.possible_moves() {
            best = best.max(minimax(&mv.after_state, maximizer, false, depth + 1, alpha, beta));
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in state.possible_moves() {
            best = best.min(minimax(&mv.after_state, maximizer, true, depth + 1, alpha, beta));
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Anti-minimax: the same search with the roles inverted.
///
/// On the mover's turn it assumes the worst move is chosen, and on the
/// adversary's turn the best one, so the result is the score of the trap
/// the mover can steer the game into. The pruning comparisons are
/// inverted to match.
pub fn reverse_minimax(
    state: &GameState,
    maximizer: Mark,
    is_maximizing: bool,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth >= SABOTAGE_DEPTH || state.game_over() {
        return state.evaluate_score(maximizer);
    }

    if is_maximizing {
        let mut worst = i32::MAX;
        for mv in state.possible_moves() {
            worst = worst.min(reverse_minimax(
                &mv.after_state,
                maximizer,
                false,
                depth + 1,
                alpha,
                beta,
            ));
            beta = beta.min(worst);
            if alpha >= beta {
                break;
            }
        }
        worst
    } else {
        let mut worst = i32::MIN;
        for mv in state.possible_moves() {
            worst = worst.max(reverse_minimax(
                &mv.after_state,
                maximizer,
                true,
                depth + 1,
                alpha,
                beta,
            ));
            alpha = alpha.max(worst);
            if alpha >= beta {
                break;
            }
        }
        worst
    }
}

/// Pick the move with the strictly greatest minimax score for `mark`.
///
/// Each root move is scored one ply down; ties keep the first move in
/// ascending cell-index order. Returns `None` when the state is already
/// terminal, so callers must check before applying.
pub fn find_best_move(state: &GameState, mark: Mark) -> Option<Move> {
    let mut best: Option<(i32, Move)> = None;

    for mv in state.possible_moves() {
        let score = minimax(&mv.after_state, mark, false, 1, i32::MIN, i32::MAX);
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, mv));
        }
    }

    best.map(|(_, mv)| mv)
}

/// Pick the move with the strictly least anti-minimax score for `mark`.
///
/// The mirror of [`find_best_move`]: first move keeps ties under strict
/// `<`, and `None` signals a terminal state.
pub fn find_worst_move(state: &GameState, mark: Mark) -> Option<Move> {
    let mut worst: Option<(i32, Move)> = None;

    for mv in state.possible_moves() {
        let score = reverse_minimax(&mv.after_state, mark, false, 1, i32::MIN, i32::MAX);
        if worst.is_none_or(|(worst_score, _)| score < worst_score) {
            worst = Some((score, mv));
        }
    }

    worst.map(|(_, mv)| mv)
}
