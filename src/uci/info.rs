//! Formats `info` and `bestmove` lines (§6.1), mirroring the donor's
//! `uci_info::Info::to_uci_line` but built directly from a [`DepthReport`]
//! instead of routed through an mpsc channel — this crate's driver already
//! serializes per-depth callbacks through the same stdout lock `println!`
//! takes.

use crate::constants::{MATE, MATE_THRESHOLD};
use crate::search::DepthReport;

/// `score cp <n>` or, once within mate range, `score mate <n>` with `n`
/// signed by which side is winning and counted in whole moves rather than
/// plies.
fn score_token(score: i32) -> String {
    if score.abs() >= MATE_THRESHOLD {
        let plies_to_mate = MATE - score.abs();
        let moves_to_mate = (plies_to_mate + 1) / 2;
        let signed = if score > 0 { moves_to_mate } else { -moves_to_mate };
        format!("score mate {signed}")
    } else {
        format!("score cp {score}")
    }
}

/// One `info depth ... score ... nodes ... pv ...` line for a completed
/// iterative-deepening depth.
#[must_use]
pub fn depth_info_line(report: &DepthReport) -> String {
    let pv = report.pv.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    let mut line = format!(
        "info depth {} {} nodes {}",
        report.depth,
        score_token(report.score),
        report.nodes
    );
    if !pv.is_empty() {
        line.push_str(" pv ");
        line.push_str(&pv);
    }
    line
}

/// `bestmove <m>` or `bestmove 0000` when the root has no legal moves (§7
/// "Game-over at root" — see [`super::mod`]'s handling, which suppresses
/// this line entirely and prints `info string` instead).
#[must_use]
pub fn bestmove_line(best: Option<crate::types::Move>) -> String {
    match best {
        Some(mv) => format!("bestmove {mv}"),
        None => "bestmove 0000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MATE;

    #[test]
    fn ordinary_scores_print_as_centipawns() {
        assert_eq!(score_token(37), "score cp 37");
        assert_eq!(score_token(-12), "score cp -12");
    }

    #[test]
    fn immediate_mate_prints_as_mate_one() {
        assert_eq!(score_token(MATE), "score mate 1");
        assert_eq!(score_token(-MATE), "score mate -1");
    }

    #[test]
    fn deeper_mate_rounds_up_to_whole_moves() {
        // Three plies from mate is two of this side's moves away.
        assert_eq!(score_token(MATE - 3), "score mate 2");
    }

    #[test]
    fn depth_line_includes_nodes_and_pv() {
        let report = DepthReport { depth: 4, score: 15, pv: Vec::new(), nodes: 1000 };
        let line = depth_info_line(&report);
        assert_eq!(line, "info depth 4 score cp 15 nodes 1000");
    }
}
