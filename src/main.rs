//! Data Grid - Main Entry Point
//!
//! Console host for the grid core: draws the grid as text and applies one
//! action per input line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use data_grid::constants::DEMO_ROW_COUNT;
use data_grid::domain::LogConfig;
use data_grid::helpers::get_or_create_data_dir;
use data_grid::surface::TextSurface;
use data_grid::utils::{default_config_path, demo_rows, load_config, load_rows};
use data_grid::{DataGrid, Error, GridAction};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const HELP: &str = "commands: next | prev | page N | toggle KEY | show KEY | hide KEY | menu | \
resize KEY W | press KEY X | move X | release | edit SLOT KEY | type VALUE | save | cancel | quit";

fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let (file_layer, guard) = if log.file {
        match get_or_create_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, "data-grid.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_timer(fmt::time::LocalTime::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("file logging disabled: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .with_writer(io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn parse_line(line: &str) -> Result<GridAction, Error> {
    if line.starts_with('{') {
        Ok(serde_json::from_str(line)?)
    } else {
        line.parse()
    }
}

fn redraw(grid: &DataGrid, surface: &mut TextSurface, out: &mut impl Write) -> io::Result<()> {
    grid.render(surface);
    writeln!(out, "{}", surface.take_frame())?;
    write!(out, "> ")?;
    out.flush()
}

fn main() -> Result<()> {
    let config_path = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => default_config_path().context("Failed to locate config directory")?,
    };
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let _guard = init_tracing(&config.log);
    tracing::info!(config = %config_path.display(), "Starting data grid...");

    let rows = match &config.data {
        Some(path) => load_rows(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
        None => demo_rows(DEMO_ROW_COUNT),
    };
    let mut grid = DataGrid::from_config(&config, rows).context("Invalid column schema")?;

    let mut surface = TextSurface::new(config.locale);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    redraw(&grid, &mut surface, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            _ => {}
        }

        match parse_line(line).and_then(|action| grid.dispatch(action)) {
            Ok(()) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Action failed");
                writeln!(out, "error: {e}")?;
            }
        }
        redraw(&grid, &mut surface, &mut out)?;
    }

    tracing::info!("Exiting");
    Ok(())
}
