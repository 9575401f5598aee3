use anyhow::Result;
use build_journal::config::Configuration;
use build_journal::Journal;

fn main() -> Result<()> {
    let configuration = Configuration::new()?;

    let journal = if configuration.journal.seed_sample_data {
        Journal::with_sample_data()
    } else {
        Journal::new()
    };

    run_ui_mode(&configuration, journal)
}

#[cfg(feature = "tui")]
fn run_ui_mode(configuration: &Configuration, journal: Journal) -> Result<()> {
    let log_path = std::path::Path::new(&configuration.logging.file);
    let _log_guard = build_journal::logging::init_file_logging(log_path)?;
    tracing::info!(log = %log_path.display(), "starting terminal UI");

    let mut app = build_journal::ui::App::new(journal);
    build_journal::ui::run_ui(&mut app)?;

    println!("Logs written to {}", log_path.display());

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_configuration: &Configuration, _journal: Journal) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin journal-server --features server");
    std::process::exit(1);
}
