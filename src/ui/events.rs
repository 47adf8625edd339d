use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::gallery::{FetchEvent, FetchSink};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// Outcome of a background fetch.
    Fetch(FetchEvent),
    /// The input thread stopped; no further keys will arrive.
    InputClosed,
}

/// Fetch tasks report straight into the UI event queue.
impl FetchSink for mpsc::Sender<AppEvent> {
    fn deliver(&self, event: FetchEvent) {
        if self.send(AppEvent::Fetch(event)).is_err() {
            tracing::trace!("Fetch outcome dropped (event loop gone)");
        }
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        thread::spawn(move || pump_events(tick_rate, event_tx, read_terminal));
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn read_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward input and ticks until the source fails or the receiver is gone.
///
/// `InputClosed` is always the last event sent.
fn pump_events<F>(tick_rate: Duration, tx: mpsc::Sender<AppEvent>, mut source: F)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let tx = scopeguard::guard(tx, |tx| {
        let _ = tx.send(AppEvent::InputClosed);
    });
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let forwarded = match source(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Key(key)),
            Ok(Some(Event::Mouse(mouse))) => tx.send(AppEvent::Mouse(mouse)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!("Terminal input failed: {}", err);
                break;
            }
        };
        if forwarded.is_err() {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
