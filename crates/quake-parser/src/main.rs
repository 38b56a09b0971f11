mod bootstrap;

use anyhow::Result;
use quake_core::settings::Settings;
use quake_data::analysis::analyze_log_file;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Quake log parser v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Log: {}, indent: {}, output: {}",
        settings.log_path.display(),
        settings.indent,
        settings
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string())
    );

    // An unreadable log aborts the run before anything is written.
    let analysis = analyze_log_file(&settings.log_path)?;

    let json = analysis.report.to_json(usize::from(settings.indent))?;
    bootstrap::write_report(&json, settings.output.as_deref())?;

    tracing::debug!(
        "Parsed {} games in {:.3}s",
        analysis.metadata.games_found,
        analysis.metadata.parse_time_seconds
    );

    Ok(())
}
