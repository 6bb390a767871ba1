//! FocusFlow - A terminal Pomodoro timer
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after every 4 focus sessions

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;

use focusflow::cli::{Cli, Commands, Display, RunArgs, SessionRunner, ThemeAction};
use focusflow::notification::{DesktopNotifier, NotificationGate, NotificationSender};
use focusflow::sound::{self, SoundPlayer};
use focusflow::theme::{Theme, ThemeStore};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with the status line.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run_session(args, cli.settings).await?,
        Some(Commands::Theme { action }) => run_theme(action, cli.settings)?,
        Some(Commands::Completions { shell }) => generate_completions(shell),
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Resolves the settings file location.
fn settings_path(overridden: Option<PathBuf>) -> Result<PathBuf> {
    match overridden {
        Some(path) => Ok(path),
        None => ThemeStore::default_path().context("cannot locate the settings file"),
    }
}

/// Runs an interactive timer session on stdin.
async fn run_session(args: RunArgs, settings: Option<PathBuf>) -> Result<()> {
    let config = args.to_config();
    config.validate().context("invalid timer settings")?;

    let player: Option<Arc<dyn SoundPlayer>> = if args.no_sound {
        None
    } else {
        sound::try_create_player().map(|p| p as Arc<dyn SoundPlayer>)
    };
    let sender: Arc<dyn NotificationSender> = Arc::new(DesktopNotifier::new(!args.no_notify));
    let gate = NotificationGate::new(player, Some(sender));

    let theme = match settings_path(settings) {
        Ok(path) => Some(ThemeStore::load(path, Theme::from_env())),
        Err(e) => {
            tracing::warn!("{:#}; theme will not be saved", e);
            None
        }
    };
    let display = Display::new(theme.as_ref().map(ThemeStore::theme).unwrap_or_default());

    let mut runner = SessionRunner::new(config, gate, display, theme);
    if args.start {
        runner.apply(focusflow::cli::Command::Start);
    }

    runner.run(BufReader::new(tokio::io::stdin())).await
}

/// Shows or changes the saved theme.
fn run_theme(action: ThemeAction, settings: Option<PathBuf>) -> Result<()> {
    let path = settings_path(settings)?;
    let mut store = ThemeStore::load(path, Theme::from_env());

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            store.toggle().context("failed to save theme")?;
        }
        ThemeAction::Light | ThemeAction::Dark => {
            if let Some(theme) = action.target() {
                store.set(theme).context("failed to save theme")?;
            }
        }
    }

    println!("{}", store.theme());
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["focusflow"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["focusflow", "run", "--start"]);
        match cli.command {
            Some(Commands::Run(args)) => assert!(args.start),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_settings_path_override() {
        let path = PathBuf::from("/tmp/focusflow-test.json");
        assert_eq!(settings_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_run_theme_toggle_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        run_theme(ThemeAction::Dark, Some(path.clone())).unwrap();
        assert_eq!(
            ThemeStore::load(&path, None).theme(),
            Theme::Dark
        );

        run_theme(ThemeAction::Toggle, Some(path.clone())).unwrap();
        assert_eq!(ThemeStore::load(&path, None).theme(), Theme::Light);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }
}
