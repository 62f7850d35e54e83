//! Per-run state — the mutable accumulator one `run()` call owns.
//!
//! Nothing here survives the run: `finish` consumes the state and hands
//! everything worth keeping to the [`RunReport`]. There is no cross-run
//! persistence by design; callers thread context forward through
//! `prior_turns`.

use reagent_core::outcome::{RunOutcome, RunReport};
use reagent_core::trace::TraceEntry;
use reagent_core::turn::Turn;
use uuid::Uuid;

/// Accumulator for a single run of the decision loop.
///
/// `trace` and `iteration` grow in lockstep: exactly one entry and one
/// increment per completed (non-terminal) iteration, via [`record`].
///
/// [`record`]: RunState::record
#[derive(Debug)]
pub struct RunState {
    pub run_id: Uuid,

    /// The query this run is answering. Immutable for the whole run.
    pub user_query: String,

    /// Caller-supplied history, read-only during the run.
    pub prior_turns: Vec<Turn>,

    /// Append-only log of completed iterations.
    pub trace: Vec<TraceEntry>,

    /// Completed iterations so far. Starts at 0.
    pub iteration: usize,
}

impl RunState {
    pub fn new(user_query: impl Into<String>, prior_turns: &[Turn]) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            user_query: user_query.into(),
            prior_turns: prior_turns.to_vec(),
            trace: Vec::new(),
            iteration: 0,
        }
    }

    /// Record one completed iteration: append its entry and bump the
    /// counter together.
    pub fn record(&mut self, entry: TraceEntry) {
        self.trace.push(entry);
        self.iteration += 1;
    }

    /// Consume the state into the run's report. The state is gone after
    /// this — a terminal outcome is the only way out of a run.
    pub fn finish(self, outcome: RunOutcome) -> RunReport {
        RunReport {
            run_id: self.run_id,
            outcome,
            trace: self.trace,
            iterations: self.iteration,
        }
    }
}
