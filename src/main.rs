use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::{Connect4, Glyphs, Player};
use connect_four::prompt::Prompt;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Line-mode prompt instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Use ASCII glyphs instead of the configured ones
    #[arg(long)]
    ascii: bool,

    /// Override which player moves first
    #[arg(long, value_enum)]
    first: Option<Player>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(first) = cli.first {
        config.game.first_player = first;
    }
    if cli.ascii {
        config.display = Glyphs::ascii();
    }
    info!("{} moves first", config.game.first_player.name());

    if cli.plain {
        run_plain(&config)
    } else {
        run_tui(&config).context("terminal UI failed")
    }
}

fn run_plain(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout(), config.display.clone());
    let mut engine = Connect4::new();
    prompt
        .play(&mut engine, config.game.first_player)
        .context("line-mode game aborted")?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config.game.first_player, config.display.clone());
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
