//! Wordgame - CLI
//!
//! Daily word puzzle with a TUI and a line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordgame::{
    commands::{print_score, run_simple, score_guess},
    config::{ConfigError, GameConfig},
    game::Game,
    session::{AutoSave, FileStore, SessionKey, SessionStore, resume},
};

#[derive(Parser)]
#[command(
    name = "wordgame",
    about = "Guess the hidden word in a fixed number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wordgame/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the hidden word
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Override the number of attempts
    #[arg(short, long, global = true)]
    max_attempts: Option<usize>,

    /// Override where the session is saved
    #[arg(short, long, global = true)]
    state_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: type one guess per line
    Simple,

    /// Score a single guess against an answer
    Evaluate {
        /// The hidden word
        answer: String,

        /// The guess to score
        guess: String,
    },

    /// Delete today's saved session
    Reset,
}

impl Cli {
    /// File settings with command-line overrides applied
    ///
    /// An unusable config file is returned alongside the defaults so it can be
    /// reported once logging is up.
    fn game_config(&self) -> (GameConfig, Option<ConfigError>) {
        let loaded = match &self.config {
            Some(path) => GameConfig::load_from(path),
            None => GameConfig::load(),
        };
        let (mut config, load_error) = match loaded {
            Ok(config) => (config, None),
            Err(err) => (GameConfig::default(), Some(err)),
        };
        if let Some(answer) = &self.answer {
            config.answer.clone_from(answer);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if let Some(state_file) = &self.state_file {
            config.state_file = Some(state_file.clone());
        }
        if let Some(log_level) = &self.log_level {
            config.log_level.clone_from(log_level);
        }
        (config, load_error)
    }
}

fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, load_error) = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Keep log lines off the alternate screen
    let log_file = match command {
        Commands::Play => Some(config.state_path()?.with_extension("log")),
        Commands::Simple | Commands::Evaluate { .. } | Commands::Reset => None,
    };
    init_logging(&config.log_level, log_file.as_deref())?;
    if let Some(err) = load_error {
        warn!(%err, "ignoring config file, using defaults");
    }

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Evaluate { answer, guess } => {
            let scored = score_guess(&answer, &guess)?;
            print_score(&scored);
            Ok(())
        }
        Commands::Reset => run_reset_command(&config),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordgame::interactive::{App, run_tui};

    config.validate()?;
    let game = start_game(config, FileStore::new(config.state_path()?))?;
    run_tui(App::new(game))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    config.validate()?;
    let mut game = start_game(config, FileStore::new(config.state_path()?))?;
    run_simple(&mut game, io::stdin().lock())?;
    Ok(())
}

fn run_reset_command(config: &GameConfig) -> Result<()> {
    let state_path = config.state_path()?;
    let mut store = FileStore::new(&state_path);
    store.clear()?;
    println!("Removed {}", state_path.display());
    Ok(())
}

fn start_game(config: &GameConfig, store: FileStore) -> Result<Game> {
    let key = SessionKey::today();
    let mut game = resume(&store, &key, config.answer_word()?, config.max_attempts);
    game.subscribe(Box::new(AutoSave::new(store, key)));
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_config_is_kept_for_reporting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "max_attempts = \"six\"").unwrap();

        let cli = Cli::parse_from([
            "wordgame",
            "--config",
            path.to_str().unwrap(),
            "--answer",
            "crane",
            "evaluate",
            "ghast",
            "ghost",
        ]);
        let (config, load_error) = cli.game_config();

        assert!(matches!(load_error, Some(ConfigError::Parse { .. })));
        assert_eq!(config.answer, "crane");
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn missing_config_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = Cli::parse_from(["wordgame", "--config", path.to_str().unwrap(), "reset"]);

        let (config, load_error) = cli.game_config();
        assert!(load_error.is_none());
        assert_eq!(config, GameConfig::default());
    }
}
