//! The autoplay state machine.
//!
//! Drives one live match from resolution to completion:
//!
//! ```text
//! RESOLVING -> WAITING <-> THINKING -> SUBMITTING -> WAITING | DONE
//! ```
//!
//! Every cycle acts on a freshly fetched host state; nothing is decided on
//! a stale snapshot. All per-match data lives in a context threaded through
//! the transitions, so a run is fully described by its configuration plus
//! what the host returned.
//!
//! Fault policy:
//! - transport faults sleep the configured delay and retry, bounded
//! - a rejected submission means the turn was lost to a race: re-fetch
//!   immediately (no sleep) and re-decide, bounded by consecutive count
//! - a state document that cannot be interpreted is fatal

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use shakmaty::{san::SanPlus, CastlingMode, Chess, Color, Move, Position};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use minimax_engine::{mate_in, search, Score};

use crate::client::{ClientError, LiveGameApi};
use crate::error::{AgentError, AgentResult};
use crate::protocol::LiveState;

/// Attempts per request before a transport fault becomes fatal.
const TRANSPORT_ATTEMPTS: u32 = 3;
/// Consecutive rejected submissions tolerated before giving up.
const REJECTION_LIMIT: u32 = 3;

/// Agent configuration, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub game: GameRef,
    /// Search depth in plies, at least 1.
    pub depth: u8,
    /// Idle-poll and post-move pause, also the transport retry backoff.
    pub delay: Duration,
    /// Ceiling on moves played this run; reaching it ends the run cleanly.
    pub max_moves: u32,
}

/// Which match to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameRef {
    /// Ask the host to open a fresh match against its AI.
    New,
    /// Adopt an existing live game by id.
    Existing(String),
}

/// How a run ended cleanly. Anything else aborts through [`AgentError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The host reported the game over.
    Finished {
        status: Option<String>,
        result: Option<String>,
    },
    /// The configured move ceiling was reached.
    MoveLimit { moves: u32 },
    /// Shutdown was requested from outside.
    Stopped,
}

/// Per-match data threaded through the state transitions.
struct MatchContext {
    game_id: String,
    color: Color,
    /// Accepted moves this run, for the ceiling and the log lines.
    moves_played: u32,
    /// Consecutive rejected submissions; reset by any accepted move.
    rejections: u32,
}

enum Phase {
    Waiting,
    Thinking { position: Chess },
    Submitting { san: String, mv: Move },
    Done(Completion),
}

/// What a freshly fetched state means for us.
enum NextAction {
    GameOver(Completion),
    OurTurn { position: Chess },
    OpponentTurn,
}

pub struct Agent<A: LiveGameApi> {
    api: A,
    config: AgentConfig,
    shutdown: Arc<AtomicBool>,
}

impl<A: LiveGameApi> Agent<A> {
    pub fn new(api: A, config: AgentConfig, shutdown: Arc<AtomicBool>) -> Self {
        Self {
            api,
            config,
            shutdown,
        }
    }

    /// Play the configured match to completion.
    pub async fn run(self) -> AgentResult<Completion> {
        let mut ctx = self.resolve().await?;
        let mut phase = Phase::Waiting;
        loop {
            phase = match phase {
                Phase::Waiting => self.wait_for_turn(&ctx).await?,
                Phase::Thinking { position } => self.think(&ctx, position)?,
                Phase::Submitting { san, mv } => self.submit(&mut ctx, san, mv).await?,
                Phase::Done(completion) => return Ok(completion),
            };
        }
    }

    /// RESOLVING: create or adopt the match and fix our color from the
    /// first fetched state. The color is assigned exactly once.
    async fn resolve(&self) -> AgentResult<MatchContext> {
        let game_id = match &self.config.game {
            GameRef::New => {
                let state = self
                    .with_retry("create game", || self.api.create_game())
                    .await?;
                if let Some(message) = &state.error {
                    return Err(AgentError::Host(message.clone()));
                }
                let id = state
                    .id
                    .clone()
                    .ok_or(crate::protocol::ProtocolError::MissingGameId)?;
                info!("[AGENT] created live game {id}");
                if let Some(first) = state.history.first() {
                    info!("[HOST] opening move {first}");
                }
                id
            }
            GameRef::Existing(id) => {
                info!("[AGENT] joining live game {id}");
                id.clone()
            }
        };

        let state = self
            .with_retry("fetch state", || self.api.fetch_state(&game_id))
            .await?;
        if let Some(message) = &state.error {
            return Err(AgentError::Host(message.clone()));
        }

        let color = if let Some(assigned) = state.assigned_role()? {
            assigned
        } else if state.game_over {
            // Nothing left to play; the first WAITING pass reports the end.
            Color::White
        } else {
            // The host leaves its pending side to the caller.
            state.side_to_move()?
        };

        info!(
            "[AGENT] playing {} in game {game_id} (depth {}, delay {:?})",
            color_name(color),
            self.config.depth,
            self.config.delay
        );

        Ok(MatchContext {
            game_id,
            color,
            moves_played: 0,
            rejections: 0,
        })
    }

    /// WAITING: fetch fresh state and decide. The shutdown flag is only
    /// honored here, so an accepted move is always followed by a consistent
    /// host state before we leave.
    async fn wait_for_turn(&self, ctx: &MatchContext) -> AgentResult<Phase> {
        if self.shutdown.load(Ordering::SeqCst) {
            info!("[AGENT] shutdown requested, leaving the match as it stands");
            return Ok(Phase::Done(Completion::Stopped));
        }

        let state = self
            .with_retry("fetch state", || self.api.fetch_state(&ctx.game_id))
            .await?;

        match self.classify(ctx, state)? {
            NextAction::GameOver(completion) => Ok(Phase::Done(completion)),
            NextAction::OurTurn { position } => Ok(Phase::Thinking { position }),
            NextAction::OpponentTurn => {
                debug!(
                    "[AGENT] opponent to move, polling again in {:?}",
                    self.config.delay
                );
                sleep(self.config.delay).await;
                Ok(Phase::Waiting)
            }
        }
    }

    /// THINKING: run the engine on the fetched position.
    fn think(&self, ctx: &MatchContext, position: Chess) -> AgentResult<Phase> {
        if position.legal_moves().is_empty() {
            // The host said play continues; a terminal position means the
            // document cannot be trusted.
            return Err(AgentError::InconsistentState);
        }

        let result = search(&position, self.config.depth);
        let mv = result.best_move.ok_or(AgentError::InconsistentState)?;
        let san = SanPlus::from_move(position.clone(), &mv).to_string();

        let move_number = ctx.moves_played + 1;
        if let Some(plies) = mate_in(result.score) {
            info!(
                "[THINK] our move {move_number}: {san}, mate in {plies} plies, {} nodes",
                result.nodes
            );
        } else {
            info!(
                "[THINK] our move {move_number}: {san}, score {:+} cp, win estimate {}%, {} nodes",
                result.score,
                win_percent(result.score),
                result.nodes
            );
        }

        Ok(Phase::Submitting { san, mv })
    }

    /// SUBMITTING: one logical submission is SAN first, then the UCI
    /// spelling if the host turns SAN down. A rejection of both is a lost
    /// race for the turn: re-fetch immediately and re-decide.
    async fn submit(&self, ctx: &mut MatchContext, san: String, mv: Move) -> AgentResult<Phase> {
        let response = self
            .with_retry("submit move", || self.api.submit_move(&ctx.game_id, &san))
            .await?;

        let response = if response.error.is_some() {
            let uci = mv.to_uci(CastlingMode::Standard).to_string();
            debug!("[SUBMIT] {san} rejected as SAN, retrying as {uci}");
            self.with_retry("submit move", || self.api.submit_move(&ctx.game_id, &uci))
                .await?
        } else {
            response
        };

        if let Some(reason) = response.error {
            ctx.rejections += 1;
            if ctx.rejections >= REJECTION_LIMIT {
                return Err(AgentError::Rejected {
                    attempts: ctx.rejections,
                    reason,
                });
            }
            warn!(
                "[SUBMIT] {san} rejected ({reason}), re-fetching ({}/{})",
                ctx.rejections, REJECTION_LIMIT
            );
            let state = self
                .with_retry("fetch state", || self.api.fetch_state(&ctx.game_id))
                .await?;
            return match self.classify(ctx, state)? {
                NextAction::GameOver(completion) => Ok(Phase::Done(completion)),
                NextAction::OurTurn { position } => Ok(Phase::Thinking { position }),
                NextAction::OpponentTurn => Ok(Phase::Waiting),
            };
        }

        ctx.rejections = 0;
        ctx.moves_played += 1;
        info!("[SUBMIT] played {san} ({} moves this run)", ctx.moves_played);
        if let Some(reply) = &response.stockfish_move {
            info!("[HOST] opponent replied {reply}");
        }

        if response.game_over {
            return Ok(Phase::Done(Completion::Finished {
                status: response.status,
                result: response.result,
            }));
        }
        if ctx.moves_played >= self.config.max_moves {
            warn!(
                "[AGENT] move ceiling {} reached, stopping cleanly",
                self.config.max_moves
            );
            return Ok(Phase::Done(Completion::MoveLimit {
                moves: ctx.moves_played,
            }));
        }

        sleep(self.config.delay).await;
        Ok(Phase::Waiting)
    }

    /// Interpret a fetched state relative to our seat.
    fn classify(&self, ctx: &MatchContext, state: LiveState) -> AgentResult<NextAction> {
        if let Some(message) = &state.error {
            return Err(AgentError::Host(message.clone()));
        }
        if state.game_over {
            return Ok(NextAction::GameOver(Completion::Finished {
                status: state.status,
                result: state.result,
            }));
        }
        let position = state.position()?;
        if position.turn() == ctx.color {
            Ok(NextAction::OurTurn { position })
        } else {
            Ok(NextAction::OpponentTurn)
        }
    }

    /// Run one request with bounded transport retries, sleeping the
    /// configured delay between attempts.
    async fn with_retry<T, F, Fut>(&self, what: &str, mut op: F) -> AgentResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(source) if attempt < TRANSPORT_ATTEMPTS => {
                    warn!(
                        "[NET] {what} failed ({attempt}/{TRANSPORT_ATTEMPTS}): {source}; retrying in {:?}",
                        self.config.delay
                    );
                    attempt += 1;
                    sleep(self.config.delay).await;
                }
                Err(source) => {
                    return Err(AgentError::Transport {
                        attempts: attempt,
                        source,
                    });
                }
            }
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Crude win-probability estimate for log lines: 50% at equality, one pawn
/// up is roughly 58%, saturating toward the ends as the score grows.
fn win_percent(score: Score) -> u8 {
    let pct = 50.0 + 50.0 * (f64::from(score) / 600.0).tanh();
    pct.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_percent_is_calibrated() {
        assert_eq!(win_percent(0), 50);
        assert!(win_percent(100) > 50);
        assert!(win_percent(-100) < 50);
        assert_eq!(win_percent(30_000), 100);
        assert_eq!(win_percent(-30_000), 0);
    }

    #[test]
    fn test_win_percent_is_monotonic() {
        let samples = [-2000, -600, -100, 0, 100, 600, 2000];
        for pair in samples.windows(2) {
            assert!(win_percent(pair[0]) <= win_percent(pair[1]));
        }
    }

    #[test]
    fn test_color_names_match_the_wire() {
        assert_eq!(color_name(Color::White), "white");
        assert_eq!(color_name(Color::Black), "black");
    }
}
