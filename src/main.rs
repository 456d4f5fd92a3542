use anyhow::{bail, Context};
use planmark::{init_logging_with, Classification, Config, DesignerSession, BUILD_DATE, VERSION};

const USAGE: &str = "Usage:
  planmark summary <layout.json>          Print the symbol summary of a saved layout
  planmark symbols <classification> [q]   List catalog symbols, optionally filtered
  planmark --version";

fn main() -> anyhow::Result<()> {
    let config_path = Config::default_path();
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    init_logging_with(&config.logging)?;
    tracing::debug!("Using config {}", config_path.display());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["--version"] => println!("planmark {} (built {})", VERSION, BUILD_DATE),
        ["summary", path] => print_summary(&config, path)?,
        ["symbols", key] => print_symbols(&config, key, "")?,
        ["symbols", key, query] => print_symbols(&config, key, query)?,
        _ => bail!("{}", USAGE),
    }

    Ok(())
}

fn print_summary(config: &Config, path: &str) -> anyhow::Result<()> {
    let mut session = DesignerSession::with_config(config);
    session.load_layout(path)?;

    let layout = session.to_layout();
    println!("Classification: {}", layout.classification);
    if let Some(background) = &layout.background {
        println!("Background:     {} ({:?})", background.file_name, background.file_type);
    }
    println!("Items:          {}", layout.items.len());
    for count in &layout.symbol_summary {
        println!("  {:>4}  {}", count.count, count.label);
    }
    Ok(())
}

fn print_symbols(config: &Config, key: &str, query: &str) -> anyhow::Result<()> {
    let classification = Classification::parse(key)
        .with_context(|| format!("Unknown classification '{}'", key))?;

    let mut session = DesignerSession::with_config(config);
    session.set_classification(classification);
    for symbol in session.search_symbols(query) {
        println!("{:<8} {:<28} {:<20} {}", symbol.code, symbol.label, symbol.category, symbol.id);
    }
    Ok(())
}
