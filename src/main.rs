mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use view::AppView;
use controller::{script, AppController};
use model::{AppModel, Playlist};

const DEVICE_NAME: &str = "state-player";

/// Terminal media player with lock, play, next and previous buttons
#[derive(Parser, Debug)]
#[command(name = "state-player", version, about)]
struct Cli {
    /// Track names to play (defaults to a three-song demo playlist)
    tracks: Vec<String>,

    /// Load tracks from a JSON playlist file
    #[arg(long, value_name = "FILE", conflicts_with = "tracks")]
    playlist: Option<PathBuf>,

    /// Replay a comma or space separated action script without the TUI,
    /// e.g. "play next! lock lock prev"
    #[arg(long, value_name = "SCRIPT", conflicts_with = "demo")]
    replay: Option<String>,

    /// Replay the built-in walkthrough without the TUI
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== state-player starting ===");

    let playlist = load_playlist(&cli)?;

    let script = match (&cli.replay, cli.demo) {
        (Some(script), _) => Some(script.as_str()),
        (None, true) => Some(script::DEMO_SCRIPT),
        (None, false) => None,
    };

    if let Some(script) = script {
        return run_headless(playlist, script);
    }

    let playlist_name = playlist.name.clone();
    let player = playlist.into_context()?;
    let app_model = AppModel::new(playlist_name, device_name(), player);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("state-player shutting down");
    Ok(())
}

fn load_playlist(cli: &Cli) -> Result<Playlist> {
    if let Some(path) = &cli.playlist {
        return Playlist::load(path)
            .with_context(|| format!("Could not open playlist {}", path.display()));
    }

    if cli.tracks.is_empty() {
        tracing::debug!("No tracks given, using demo playlist");
        Ok(Playlist::demo())
    } else {
        Ok(Playlist::from_tracks("Command line", &cli.tracks))
    }
}

fn device_name() -> String {
    let hostname = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    format!("{}@{}", DEVICE_NAME, hostname)
}

fn run_headless(playlist: Playlist, script: &str) -> Result<()> {
    let steps = script::parse_script(script)?;
    let mut player = playlist.into_context()?;

    tracing::info!(steps = steps.len(), "Replaying action script");

    for result in script::replay(&mut player, &steps) {
        println!("{:<6} {}", result.step.to_string(), result.outcome);
    }

    println!(
        "-- {} | track {}/{}: {}",
        player.mode(),
        player.current_index() + 1,
        player.playlist().len(),
        player.current_track()
    );

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (player, history, ui_state, should_quit) = {
            let model_guard = model.lock().await;

            model_guard.auto_clear_old_notices().await;

            (
                model_guard.get_player_snapshot().await,
                model_guard.get_history().await,
                model_guard.get_ui_state().await,
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &player, &history, &ui_state);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
