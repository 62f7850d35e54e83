//! # Reagent Core
//!
//! Domain types, traits, and error definitions for the reagent decision
//! engine. This crate has **zero framework dependencies** — it defines the
//! vocabulary every other crate implements against.
//!
//! ## Design Philosophy
//!
//! The two external collaborators — the completion capability and the
//! tools — are traits here ([`Provider`], [`Tool`]); implementations live
//! in their respective crates. The decision contract, the trace, and the
//! terminal outcomes are plain data. All crates depend inward on core.

pub mod decision;
pub mod error;
pub mod outcome;
pub mod provider;
pub mod tool;
pub mod trace;
pub mod turn;

// Re-export key types at crate root for ergonomics
pub use decision::{
    Action, Decision, decision_schema, format_question, value_to_text, ASK_USER, FINAL_ANSWER,
};
pub use error::{DecisionError, Error, ProviderError, RegistryError, Result, ToolError};
pub use outcome::{RunOutcome, RunReport, MAX_ITERATIONS_MESSAGE};
pub use provider::{DecisionRequest, Provider};
pub use tool::{Tool, ToolRegistry, ToolSpec};
pub use trace::TraceEntry;
pub use turn::Turn;
