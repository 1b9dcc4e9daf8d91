//! JSON messages exchanged between a board UI and the game engine.
//!
//! The UI sends one [`ClientMessage`] per user action and renders the [`ServerMessage`] it gets
//! back. Face-down pieces are only ever sent as `"hidden"`.

use banqi_core::{
    CellView, ClickOutcome, Coord2, GameConfig, GameError, GameSession, GameStatus, Observation,
    PieceKind, Player, Turn,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Click {
        row: u8,
        col: u8,
    },
    Reset {
        #[serde(default)]
        seed: Option<u64>,
    },
    Snapshot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Snapshot(Snapshot),
    Rejected { reason: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedLists {
    pub red: Vec<String>,
    pub black: Vec<String>,
}

/// Flattened [`Observation`]. Cells are `"hidden"`, `"empty"`, or the revealed piece's glyph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Vec<Vec<String>>,
    pub current_player: String,
    pub status: String,
    pub selected: Option<Coord2>,
    pub targets: Vec<Coord2>,
    pub captured: CapturedLists,
    pub last_event: Option<String>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession, last_event: Option<ClickOutcome>) -> Self {
        let obs = Observation::from_session(session);

        let cells = obs
            .cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&cell| cell_label(cell)).collect())
            .collect();

        Self {
            cells,
            current_player: turn_label(obs.turn).to_owned(),
            status: status_label(obs.status).to_owned(),
            selected: obs.selected,
            targets: obs.targets,
            captured: CapturedLists {
                red: captured_glyphs(&obs.captured_red, Player::Red),
                black: captured_glyphs(&obs.captured_black, Player::Black),
            },
            last_event: last_event
                .filter(|outcome| outcome.has_update())
                .map(event_label),
        }
    }
}

fn cell_label(cell: CellView) -> String {
    match cell {
        CellView::Hidden => "hidden".to_owned(),
        CellView::Empty => "empty".to_owned(),
        CellView::Revealed(piece) => piece.glyph().to_string(),
    }
}

fn turn_label(turn: Turn) -> &'static str {
    match turn {
        Turn::Undetermined => "?",
        Turn::Player(player) => player.name(),
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status.winner() {
        None => "ongoing",
        Some(Player::Red) => "red wins",
        Some(Player::Black) => "black wins",
    }
}

fn captured_glyphs(kinds: &[PieceKind], owner: Player) -> Vec<String> {
    kinds
        .iter()
        .map(|&kind| banqi_core::Piece::new(kind, owner).glyph().to_string())
        .collect()
}

fn event_label(outcome: ClickOutcome) -> String {
    match outcome {
        ClickOutcome::NoChange => "no change".to_owned(),
        ClickOutcome::Flipped(piece) => format!("flipped {piece}"),
        ClickOutcome::Selected => "selected".to_owned(),
        ClickOutcome::MoveRejected => "move rejected".to_owned(),
        ClickOutcome::Moved => "moved".to_owned(),
        ClickOutcome::Captured(piece) => format!("captured {piece}"),
        ClickOutcome::Won(player) => format!("{player} wins"),
    }
}

fn rejected(err: GameError) -> ServerMessage {
    ServerMessage::Rejected {
        reason: err.to_string(),
    }
}

/// Applies one client action to `session`. Rejections never change the session.
pub fn handle_message(session: &mut GameSession, message: ClientMessage) -> ServerMessage {
    match message {
        ClientMessage::Click { row, col } => match session.click((row, col)) {
            Ok(outcome) => {
                log::debug!("Click at ({row}, {col}): {outcome:?}");
                ServerMessage::Snapshot(Snapshot::from_session(session, Some(outcome)))
            }
            Err(err) => {
                log::debug!("Click at ({row}, {col}) rejected: {err}");
                rejected(err)
            }
        },
        ClientMessage::Reset { seed } => match session.reset(&GameConfig::new(seed)) {
            Ok(()) => ServerMessage::Snapshot(Snapshot::from_session(session, None)),
            Err(err) => {
                log::warn!("Reset failed: {err}");
                rejected(err)
            }
        },
        ClientMessage::Snapshot => ServerMessage::Snapshot(Snapshot::from_session(session, None)),
    }
}

pub fn decode(text: &str) -> Result<ClientMessage, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}

pub fn encode(message: &ServerMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}

/// Decode, apply and encode in one step, for transports that only carry text.
pub fn handle_text(session: &mut GameSession, text: &str) -> Result<String, ProtocolError> {
    let message = decode(text)?;
    encode(&handle_message(session, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use banqi_core::{Board, Piece};

    fn two_piece_session() -> GameSession {
        let board = Board::from_placements(&[
            ((0, 0), Piece::new(PieceKind::Chariot, Player::Red)),
            ((0, 1), Piece::new(PieceKind::Soldier, Player::Black)),
        ])
        .unwrap();
        GameSession::new(board)
    }

    fn snapshot(message: ServerMessage) -> Snapshot {
        match message {
            ServerMessage::Snapshot(snapshot) => snapshot,
            other => panic!("expected snapshot, got {other:?}"),
        }
    }

    #[test]
    fn decodes_client_messages() {
        assert_eq!(
            decode(r#"{"type":"click","row":1,"col":2}"#).unwrap(),
            ClientMessage::Click { row: 1, col: 2 }
        );
        assert_eq!(
            decode(r#"{"type":"reset"}"#).unwrap(),
            ClientMessage::Reset { seed: None }
        );
        assert_eq!(
            decode(r#"{"type":"reset","seed":9}"#).unwrap(),
            ClientMessage::Reset { seed: Some(9) }
        );
        assert!(matches!(
            decode(r#"{"type":"castle"}"#),
            Err(ProtocolError::Json(_))
        ));
    }

    #[test]
    fn fresh_snapshot_hides_everything() {
        let mut session = GameSession::from_config(&GameConfig::seeded(11)).unwrap();
        let snap = snapshot(handle_message(&mut session, ClientMessage::Snapshot));

        assert_eq!(snap.cells.len(), 4);
        assert!(snap.cells.iter().all(|row| row.len() == 8));
        assert!(snap.cells.iter().flatten().all(|cell| cell == "hidden"));
        assert_eq!(snap.current_player, "?");
        assert_eq!(snap.status, "ongoing");
        assert_eq!(snap.last_event, None);
    }

    #[test]
    fn click_flips_and_reports_glyph() {
        let mut session = two_piece_session();
        let snap = snapshot(handle_message(
            &mut session,
            ClientMessage::Click { row: 0, col: 0 },
        ));

        assert_eq!(snap.cells[0][0], "俥");
        assert_eq!(snap.cells[0][1], "hidden");
        assert_eq!(snap.cells[1][0], "empty");
        assert_eq!(snap.current_player, "black");
        assert_eq!(snap.last_event.as_deref(), Some("flipped 俥"));
    }

    #[test]
    fn full_game_ends_with_winner_and_rejects_further_clicks() {
        let mut session = two_piece_session();
        for (row, col) in [(0, 0), (0, 1), (0, 0)] {
            handle_message(&mut session, ClientMessage::Click { row, col });
        }
        let snap = snapshot(handle_message(
            &mut session,
            ClientMessage::Click { row: 0, col: 1 },
        ));

        assert_eq!(snap.status, "red wins");
        assert_eq!(snap.captured.black, ["卒"]);
        assert!(snap.captured.red.is_empty());

        let reply = handle_message(&mut session, ClientMessage::Click { row: 0, col: 1 });
        assert_eq!(
            reply,
            ServerMessage::Rejected {
                reason: "Game already ended, no new moves are accepted".to_owned()
            }
        );
    }

    #[test]
    fn ignored_click_reports_no_event() {
        let mut session = two_piece_session();
        handle_message(&mut session, ClientMessage::Click { row: 0, col: 0 });

        let snap = snapshot(handle_message(
            &mut session,
            ClientMessage::Click { row: 2, col: 2 },
        ));

        assert_eq!(snap.last_event, None);
        assert_eq!(snap.selected, None);
    }

    #[test]
    fn out_of_bounds_click_is_rejected() {
        let mut session = two_piece_session();
        let reply = handle_message(&mut session, ClientMessage::Click { row: 4, col: 0 });
        assert!(matches!(reply, ServerMessage::Rejected { .. }));
    }

    #[test]
    fn reset_with_seed_is_reproducible() {
        let mut a = two_piece_session();
        let mut b = two_piece_session();
        handle_message(&mut a, ClientMessage::Reset { seed: Some(21) });
        handle_message(&mut b, ClientMessage::Reset { seed: Some(21) });

        assert_eq!(a.board(), b.board());
        assert_eq!(a.seed(), Some(21));
    }

    #[test]
    fn handle_text_round_trips_json() {
        let mut session = two_piece_session();
        let reply = handle_text(&mut session, r#"{"type":"click","row":0,"col":1}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();

        assert_eq!(value["type"], "snapshot");
        assert_eq!(value["cells"][0][1], "卒");
        assert_eq!(value["current_player"], "red");
    }
}
