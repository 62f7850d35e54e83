//! # Reagent Engine
//!
//! The decision engine: drives the iterate-until-done loop, holds per-run
//! state, requests one structured decision per iteration, and interprets
//! it. No component below the engine has any concurrency or retry logic
//! of its own — all of that responsibility lives here.
//!
//! Entry point: [`DecisionEngine::run`], which always returns a
//! [`reagent_core::RunReport`].

pub mod engine;
pub mod prompt;
pub mod state;

pub use engine::{DecisionEngine, DEFAULT_MAX_ITERATIONS, DEFAULT_TOOL_TIMEOUT};
pub use state::RunState;

#[cfg(test)]
pub(crate) mod test_helpers;
