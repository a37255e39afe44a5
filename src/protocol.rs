//! Wire documents for the match host's live-game API.
//!
//! Everything travels as JSON over HTTP:
//! - `POST /api/live/start` with [`StartRequest`] opens a match
//! - `GET  /api/live/{id}` returns the authoritative [`LiveState`]
//! - `POST /api/live/{id}/move` with [`MoveRequest`] submits a move
//!
//! Every response uses the same [`LiveState`] shape. The FEN inside it is
//! the single source of truth for the position; the `turn` string, when
//! present, must agree with it or the whole document is untrustworthy.

use serde::{Deserialize, Serialize};
use shakmaty::{fen::Fen, CastlingMode, Chess, Color, Position};
use thiserror::Error;

/// Body for `POST /api/live/start`.
#[derive(Debug, Clone, Serialize)]
pub struct StartRequest {
    /// Opponent selector; the autoplay agent always asks for the hosted AI.
    pub mode: String,
}

impl StartRequest {
    pub fn ai() -> Self {
        Self {
            mode: "ai".to_string(),
        }
    }
}

/// Body for `POST /api/live/{id}/move`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRequest {
    /// SAN or UCI; the host accepts both.
    #[serde(rename = "move")]
    pub mv: String,
}

/// One authoritative state document from the match host.
///
/// Every field is optional on the wire; what the agent requires of a given
/// document depends on what it is about to do with it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveState {
    /// Host-reported failure. Fatal on a fetch, a rejection on a submit.
    pub error: Option<String>,
    /// Game id, present on creation responses.
    pub id: Option<String>,
    /// Terminal flag, authoritative.
    pub game_over: bool,
    /// Human-readable completion kind ("checkmate", "draw", ...).
    pub status: Option<String>,
    /// Conventional result string ("1-0", "0-1", "1/2-1/2").
    pub result: Option<String>,
    /// Side to move, "white" or "black".
    pub turn: Option<String>,
    /// Full FEN of the current position.
    pub fen: Option<String>,
    /// SAN moves played so far.
    pub history: Vec<String>,
    /// The host engine's reply when it answers a submission synchronously.
    pub stockfish_move: Option<String>,
    /// Explicit seat assignment for the caller, when the host provides one.
    pub role: Option<String>,
}

impl LiveState {
    /// Parse the FEN into a playable position.
    ///
    /// Cross-checks the `turn` field against the FEN when both are present;
    /// a disagreement means the document cannot be interpreted.
    pub fn position(&self) -> Result<Chess, ProtocolError> {
        let fen = self.fen.as_deref().ok_or(ProtocolError::MissingFen)?;
        let position: Chess = fen
            .parse::<Fen>()
            .map_err(|_| ProtocolError::BadFen {
                fen: fen.to_string(),
            })?
            .into_position(CastlingMode::Standard)
            .map_err(|_| ProtocolError::BadFen {
                fen: fen.to_string(),
            })?;

        if let Some(turn) = self.turn.as_deref() {
            if parse_color(turn)? != position.turn() {
                return Err(ProtocolError::TurnMismatch {
                    turn: turn.to_string(),
                    fen: fen.to_string(),
                });
            }
        }
        Ok(position)
    }

    /// Side to move according to this document.
    pub fn side_to_move(&self) -> Result<Color, ProtocolError> {
        Ok(self.position()?.turn())
    }

    /// Explicit seat assignment, when the host sent one.
    pub fn assigned_role(&self) -> Result<Option<Color>, ProtocolError> {
        self.role.as_deref().map(parse_color).transpose()
    }
}

fn parse_color(name: &str) -> Result<Color, ProtocolError> {
    match name.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(ProtocolError::BadColor {
            value: name.to_string(),
        }),
    }
}

/// A state document the agent cannot safely act on.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("state carries no FEN but play is supposed to continue")]
    MissingFen,

    #[error("state FEN does not parse: {fen}")]
    BadFen { fen: String },

    #[error("state claims {turn} to move but the FEN disagrees: {fen}")]
    TurnMismatch { turn: String, fen: String },

    #[error("unrecognized color name: {value}")]
    BadColor { value: String },

    #[error("creation response carries no game id")]
    MissingGameId,
}
