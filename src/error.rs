//! Error taxonomy for the autoplay agent.
//!
//! Every variant that aborts a run maps to a non-zero process exit. The
//! recoverable classes (transport faults, rejected submissions) only show
//! up here after their bounded retries are spent.

use thiserror::Error;

use crate::client::ClientError;
use crate::protocol::ProtocolError;

/// Errors that abort an autoplay run.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Transport kept failing after bounded retries.
    #[error("match host unreachable after {attempts} attempts")]
    Transport {
        attempts: u32,
        #[source]
        source: ClientError,
    },

    /// The host rejected our submission too many times in a row.
    #[error("move rejected {attempts} times in a row: {reason}")]
    Rejected { attempts: u32, reason: String },

    /// The host reported a failure in the state body ("Game not found", ...).
    #[error("match host reported: {0}")]
    Host(String),

    /// A state document the agent cannot safely act on.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The host claims play continues but the position has no legal moves.
    #[error("match host claims play continues but the position is terminal")]
    InconsistentState,
}

/// Result type alias for agent operations.
pub type AgentResult<T> = Result<T, AgentError>;
