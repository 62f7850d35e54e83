//! `reagent chat` — interactive session with conversation history.
//!
//! Every run's outcome is appended to the history, questions included,
//! so when the agent pauses to ask something the next line typed is read
//! in context as the answer.

use reagent_config::AppConfig;
use reagent_core::{RunOutcome, Turn};
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let engine = super::build_engine(&config)?;

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║         reagent — Interactive Session        ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Provider:  {}", config.provider);
    println!("  Model:     {}", config.model);
    println!("  Budget:    {} iterations per run", config.max_iterations);
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let mut turns: Vec<Turn> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let query = line.trim();
        if query.is_empty() {
            prompt()?;
            continue;
        }
        if query == "exit" || query == "quit" {
            break;
        }

        eprint!("  ...");
        let report = engine.run(query, &turns).await;
        eprint!("\r     \r");

        let reply = report.text();
        println!();
        for reply_line in reply.lines() {
            println!("  Assistant > {reply_line}");
        }
        println!();

        if matches!(report.outcome, RunOutcome::EngineError(_)) {
            // Keep the session alive; the failed run leaves no turn behind.
            eprintln!("  [!] That run failed. History is unchanged; try again.");
            println!();
        } else {
            turns.push(Turn::new(query, reply));
        }

        prompt()?;
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    use std::io::Write;
    print!("  You > ");
    std::io::stdout().flush()
}
