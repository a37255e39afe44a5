pub mod agent;
pub mod cli;
pub mod client;
pub mod error;
pub mod protocol;

pub use agent::{Agent, AgentConfig, Completion, GameRef};
pub use client::{HttpLiveClient, LiveGameApi};
pub use error::{AgentError, AgentResult};
pub use protocol::LiveState;
