//! `reagent ask` — run one query through the decision loop.

use reagent_config::AppConfig;
use reagent_core::{RunOutcome, RunReport};

pub async fn run(query: &str, show_trace: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let engine = super::build_engine(&config)?;

    eprint!("  Thinking...");
    let report = engine.run(query, &[]).await;
    eprint!("\r              \r");

    if json {
        // The report embeds the trace, so --trace is subsumed here.
        println!("{}", serde_json::to_string_pretty(&report)?);
        return match &report.outcome {
            RunOutcome::EngineError(_) => Err(report.text().into()),
            _ => Ok(()),
        };
    }

    if show_trace {
        print_trace(&report);
    }

    match &report.outcome {
        RunOutcome::EngineError(_) => Err(report.text().into()),
        RunOutcome::AwaitingUser(question) => {
            println!("{question}");
            eprintln!();
            eprintln!("  (Run `reagent chat` to answer follow-up questions.)");
            Ok(())
        }
        _ => {
            println!("{}", report.text());
            Ok(())
        }
    }
}

fn print_trace(report: &RunReport) {
    if report.trace.is_empty() {
        return;
    }
    println!("  ── Trace ({} steps) ──", report.trace.len());
    for (i, entry) in report.trace.iter().enumerate() {
        println!("  [{}] Thought:     {}", i + 1, entry.thought);
        println!("      Action:      {} {}", entry.tool, entry.tool_input);
        println!("      Observation: {}", first_line(&entry.observation));
    }
    println!();
}

/// Observations can be multi-line digests; the trace view keeps one line.
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_of_multiline_observation() {
        assert_eq!(first_line("line one\nline two"), "line one");
        assert_eq!(first_line(""), "");
    }
}
