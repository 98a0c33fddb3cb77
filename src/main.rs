mod app;
mod config;
mod event;
mod game;
mod ui;

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use app::App;
use config::Config;
use event::{Event, EventHandler};
use game::{Grid, Session};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();
    let seed = config.seed_or_random();
    log::info!("starting with seed {} and {} ms frames", seed, config.frame_ms);

    // The grid is sized once from the terminal at startup
    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let field = ui::field_area(Rect::new(0, 0, cols, rows));
    let grid = Grid::from_surface(field.width, field.height, config.cell_size())
        .context("terminal too small for the playfield")?;
    log::info!("grid is {}x{} cells", grid.width(), grid.height());

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, grid, seed, config.frame_ms);

    // Restore terminal even if the loop failed
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leaving alternate screen")?;
    terminal.show_cursor()?;

    log::info!("shutting down");
    result
}

fn run(terminal: &mut Tui, grid: Grid, seed: u64, frame_ms: u64) -> anyhow::Result<()> {
    let clock = Instant::now();
    let now_ms = || u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);

    let mut app = App::new(Session::new(grid, seed, now_ms()));
    let event_handler = EventHandler::new(frame_ms);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(now_ms()),
            Event::Key(key) => app.on_key(key, now_ms()),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
