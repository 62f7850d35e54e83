//! Conversation turns — the prior history a caller threads into a run.

use serde::{Deserialize, Serialize};

/// One completed exchange: what the user said and what the agent returned.
///
/// Supplied by the caller, read-only during a run. This is also how an
/// `AwaitingUser` outcome gets resumed: the caller appends the question
/// and the user's reply as a turn, then starts a fresh run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub agent: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            agent: agent.into(),
        }
    }
}
