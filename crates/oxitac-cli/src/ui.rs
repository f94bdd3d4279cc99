use std::fmt::Write as _;

use oxitac_engine::{Board, GRID_SIZE, Mark, MatchStats};

/// Renders the board with row/column labels for coordinate entry.
pub(crate) fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   0   1   2\n");
    out.push_str("  -----------\n");
    for row in 0..GRID_SIZE {
        write!(&mut out, "{row} |").unwrap();
        for col in 0..GRID_SIZE {
            let cell = board.cell(row, col).map_or(' ', Mark::as_char);
            write!(&mut out, " {cell} |").unwrap();
        }
        out.push_str("\n  -----------\n");
    }
    out
}

/// Renders the cumulative statistics block shown after each round.
pub(crate) fn render_stats(stats: &MatchStats) -> String {
    format!(
        "--- Match statistics ---\n\
         Rounds played: {}\n\
         X wins: {}\n\
         O wins: {}\n\
         Draws: {}\n\
         ------------------------",
        stats.total_rounds(),
        stats.wins(Mark::X),
        stats.wins(Mark::O),
        stats.draws(),
    )
}
