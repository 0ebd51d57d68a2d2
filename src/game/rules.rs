/// Round resolution rules for rock/paper/scissors.
///
/// Pure functions over the game vocabulary; no session state involved.

use crate::game::types::Move;

/// True if `a` beats `b` under the classic cyclic dominance:
/// rock beats scissors, scissors beats paper, paper beats rock.
pub fn beats(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
    )
}

/// Resolve a round between slot 0 (`p1`) and slot 1 (`p2`).
///
/// Returns the winning slot index, or None on a tie.
pub fn resolve(p1: Move, p2: Move) -> Option<usize> {
    if p1 == p2 {
        None
    } else if beats(p1, p2) {
        Some(0)
    } else {
        Some(1)
    }
}
