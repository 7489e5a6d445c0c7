use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to `~/.local/state/smg/smg.log`.
///
/// Uses the XDG base directory spec via the `xdg` crate to locate the state directory.
/// Progress and warnings meant for the operator are printed to stdout/stderr by the
/// pipeline itself; the log file carries the tracing mirror of those events.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smg")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("smg.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,smg=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(move || file.try_clone().expect("failed to clone log file handle"))
        .with_ansi(false)
        .init();

    tracing::info!("smg logging initialized at {}", log_file_path.display());

    Ok(())
}
