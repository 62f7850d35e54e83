//! `reagent tools` — list the built-in tools.

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let registry = reagent_tools::builtin_registry(None, None)?;

    println!("🔧 Built-in Tools");
    println!("=================");
    println!();
    for spec in registry.specs() {
        println!("  {:<18} {}", spec.name, spec.description);
    }
    println!();
    println!("  The decision loop reserves the name 'Final Answer' for finishing a run.");
    println!();
    println!("  Credentials (via env or ~/.reagent/config.toml):");
    println!("    TAVILY_API_KEY         enables tavily_search");
    println!("    WOLFRAM_ALPHA_APP_ID   enables wolfram_alpha");

    Ok(())
}
