use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use latency_numbers::config::{AppConfig, OutputFormat};
use latency_numbers::displayers::{self, TextDisplayer};
use latency_numbers_core::MetricCatalog;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// latency-numbers - Latency numbers every programmer should know, estimated for any year
#[derive(Parser, Debug, Clone)]
#[command(name = "latency-numbers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Year to estimate the numbers for (defaults to the current year)
    #[arg(short = 'y', long = "year")]
    year: Option<i32>,

    /// Output format (overrides the config file)
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Reveal the metrics one at a time in real time (text output only)
    #[arg(short = 'p', long = "play")]
    play: bool,

    /// Milliseconds between reveals (overrides the config file)
    #[arg(short = 's', long = "step-ms", value_name = "MS")]
    step_ms: Option<u64>,

    /// Configuration file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long = "save-config")]
    save_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting latency-numbers v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&cli)?;
    if let Some(step_ms) = cli.step_ms {
        config.animation.step_duration_ms = step_ms;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config.validate().context("Invalid settings")?;

    if cli.save_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => AppConfig::config_path()?,
        };
        config.save_to_path(&path)?;
        info!("Saved settings to {}", path.display());
        return Ok(());
    }

    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    let mut catalog = MetricCatalog::for_year(year)
        .with_context(|| format!("Failed to estimate metrics for {}", year))?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if cli.play {
        if config.output.format != OutputFormat::Text {
            warn!(
                "--play only supports text output, ignoring format {:?}",
                config.output.format
            );
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let events = config.animation.scheduler().schedule(&mut catalog);
        let mut displayer = TextDisplayer::new(&mut out);
        let summary = runtime.block_on(latency_numbers::core::play(&mut displayer, events))?;
        info!(
            "Revealed {} metrics in {:.1}s",
            summary.applied,
            summary.elapsed.as_secs_f64()
        );
    } else {
        displayers::render_static(&config, config.output.format, &mut catalog, &mut out)?;
    }

    Ok(())
}

/// Load the config named on the command line, or the user's config file.
/// A broken user config falls back to defaults; an explicit one is an error.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    if let Some(path) = &cli.config {
        return AppConfig::load_from_path(path);
    }
    match AppConfig::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Failed to load config, using defaults: {:#}", e);
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "latency-numbers",
            "--year",
            "1999",
            "-f",
            "html",
            "--step-ms",
            "250",
            "-d",
            "2",
        ]);
        assert_eq!(cli.year, Some(1999));
        assert_eq!(cli.format, Some(OutputFormat::Html));
        assert_eq!(cli.step_ms, Some(250));
        assert_eq!(cli.debug, 2);
        assert!(!cli.play);
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latency.json");
        let mut config = AppConfig::default();
        config.animation.step_duration_ms = 250;
        config.save_to_path(&path).unwrap();

        let cli = Cli::parse_from(["latency-numbers", "-c", path.to_str().unwrap()]);
        assert_eq!(load_config(&cli).unwrap(), config);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let cli = Cli::parse_from(["latency-numbers", "-c", "/nonexistent/latency.json"]);
        assert!(load_config(&cli).is_err());
    }
}
