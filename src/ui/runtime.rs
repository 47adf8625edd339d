use crate::api::{AnimalType, PetApiClient};
use crate::config::Config;
use crate::gallery::{FetchCommand, FetchSink, Fetcher};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::grid_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(120);
const COMMAND_QUEUE: usize = 256;

pub fn run(config: Config, animal: AnimalType) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("pet-gallery-fetch")
        .build()
        .context("failed to start async runtime")?;
    let client = PetApiClient::new(&config.api).context("failed to build HTTP client")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);

    let fetcher = Fetcher::new(client, events.sender(), config.gallery.page_size);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(fetch_worker(fetcher, command_rx));

    let mut app = App::new(&config.gallery, animal);
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows);
    }
    tracing::info!(animal = %animal, "Gallery started");
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => resize(&mut app, cols, rows),
            Ok(AppEvent::Fetch(event)) => app.apply_fetch_event(event),
            Ok(AppEvent::InputClosed) => {
                tracing::warn!("Input thread stopped; closing gallery");
                break;
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Outstanding requests are abandoned; their outcomes have nowhere to go.
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Gallery closed");
    Ok(())
}

fn resize(app: &mut App, cols: u16, rows: u16) {
    let grid = grid_rect(Rect::new(0, 0, cols, rows));
    app.on_resize(grid.width, grid.height);
}

/// Turns queued UI commands into fetch tasks until the UI drops its sender.
async fn fetch_worker<S: FetchSink>(
    fetcher: Fetcher<S>,
    mut commands: mpsc::Receiver<FetchCommand>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "Fetch command");
        drop(fetcher.execute(command));
    }
    tracing::debug!("Fetch worker stopped");
}
