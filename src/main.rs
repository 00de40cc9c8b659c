use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::stdout,
    time::{Duration, Instant},
};
use tracing::info;

use tcrush::config::{CliArgs, Config};
use tcrush::game::{Game, GameEvent};
use tcrush::input::{handle_event, Cursor, InputAction};
use tcrush::logging;
use tcrush::ui::{board_area, ui};

fn main() -> Result<()> {
    let config = Config::from_args(CliArgs::parse())?;
    logging::init(&config)?;
    info!(seed = ?config.seed, "starting tcrush");

    // Setup terminal
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Cleanup
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, config: &Config) -> Result<()> {
    let mut game = Game::new(config);
    let mut cursor = Cursor::new();
    let mut last_tick = Instant::now();

    // Game loop
    loop {
        // Render
        let snapshot = game.snapshot();
        terminal.draw(|f| ui(f, &snapshot, &cursor))?;
        let area = board_area(terminal.size()?);

        // Handle input
        if event::poll(Duration::from_millis(16))? {
            let event = event::read()?;
            match handle_event(&mut game, &mut cursor, &event, area) {
                InputAction::Quit => break,
                InputAction::Restart => game.reset(),
                InputAction::Click(outcome) => tracing::trace!(?outcome, "click handled"),
                InputAction::None => {}
            }
        }

        // Update game state
        let now = Instant::now();
        for event in game.update(now.duration_since(last_tick)) {
            if let GameEvent::ScoreChanged(score) = event {
                info!(score, "score");
            }
        }
        last_tick = now;
    }

    info!(score = game.score(), "session finished");
    Ok(())
}
