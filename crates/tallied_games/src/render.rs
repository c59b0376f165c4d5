//! Text rendering of engine state.

use chrono::SecondsFormat;
use tallied_audit::AuditEntry;
use tallied_tictactoe::{
    Board, GameMetadata, GameSnapshot, GameStatus, Player, Position, Scoreboard, Square,
};

/// Icon drawn for a mark.
pub fn mark_icon(player: Player) -> &'static str {
    match player {
        Player::X => "X",
        Player::O => "O",
    }
}

/// Accessible label for a mark.
pub fn mark_label(player: Player) -> &'static str {
    match player {
        Player::X => "Player X",
        Player::O => "Player O",
    }
}

/// Formats the board as a grid. Empty cells show the index to type.
pub fn board(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = row * 3 + col;
            let symbol = match board.squares()[pos] {
                Square::Empty => pos.to_string(),
                Square::Occupied(player) => mark_icon(player).to_string(),
            };
            result.push(' ');
            result.push_str(&symbol);
            result.push(' ');
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

/// One-line status, including whose turn it is while the game runs.
pub fn status(snapshot: &GameSnapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => {
            format!("{} to move", mark_label(snapshot.current_player()))
        }
        GameStatus::Won(player) => format!("{} wins!", mark_label(player)),
        GameStatus::Draw => "Draw".to_string(),
    }
}

/// One-line scoreboard.
pub fn scores(scores: &Scoreboard) -> String {
    format!(
        "X: {}  O: {}  Draws: {}",
        scores.x_wins(),
        scores.o_wins(),
        scores.draws()
    )
}

/// One line per audit entry, in the order given.
pub fn audit(entries: &[AuditEntry<GameMetadata>]) -> String {
    entries
        .iter()
        .map(audit_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn audit_line(entry: &AuditEntry<GameMetadata>) -> String {
    let detail = match entry.metadata() {
        GameMetadata::Move { index, .. } => match Position::from_index(*index) {
            Some(pos) => format!("cell {} ({})", index, pos),
            None => format!("cell {}", index),
        },
        GameMetadata::Reset { reason, .. } => format!("reason: {}", reason),
        GameMetadata::Error { message } => message.clone(),
    };
    let stamp = entry.timestamp();
    format!(
        "{}  {:<5}  {:<8}  {}",
        stamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        entry.action().to_string(),
        entry.actor(),
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallied_tictactoe::GameEngine;

    #[test]
    fn test_empty_board_shows_indices() {
        let text = board(&Board::new());
        assert_eq!(
            text,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_marks_replace_indices() {
        let mut engine = GameEngine::new();
        assert!(engine.make_move(0));
        assert!(engine.make_move(4));
        let text = board(&engine.board());
        assert!(text.starts_with(" X | 1 |"));
        assert!(text.contains(" 3 | O | 5 "));
    }

    #[test]
    fn test_status_lines() {
        let mut engine = GameEngine::new();
        assert_eq!(status(&engine.snapshot()), "Player X to move");
        for index in [0, 3, 1, 4, 2] {
            engine.make_move(index);
        }
        assert_eq!(status(&engine.snapshot()), "Player X wins!");
    }

    #[test]
    fn test_audit_lines() {
        let mut engine = GameEngine::new();
        engine.make_move(4);
        engine.reset(Some("again"));
        let text = audit(&engine.audit_trail());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("RESET"));
        assert!(lines[0].ends_with("reason: again"));
        assert!(lines[1].contains("playerX"));
        assert!(lines[1].ends_with("cell 4 (Center)"));
    }
}
