use crate::api::Backend;
use crate::app::App;
use crate::last_task::LastTaskStore;
use crate::ui::{self, Theme};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action, ActionTx};
use super::actions::drain_actions;
use super::views::handle_key;

pub async fn run_app<B: Backend + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: &B,
    store: &LastTaskStore,
    theme: &Theme,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app, theme))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, app, &action_tx);
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.click(mouse.column, mouse.row);
                    }
                }
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        schedule_refresh(app, Instant::now(), &action_tx);
        drain_actions(&mut action_rx, app, backend, store).await;

        if !app.running {
            break;
        }
    }

    Ok(())
}

/// Expire status messages and queue a reload when the refresh timer fires.
fn schedule_refresh(app: &mut App, now: Instant, action_tx: &ActionTx) {
    if app.on_tick(now) {
        let _ = action_tx.send(Action::ReloadEntries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::REFRESH_INTERVAL;
    use crate::runtime::actions::tests::{temp_store, RecordingBackend};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn refresh_tick_reloads_entries() {
        let backend = RecordingBackend::default();
        let (_dir, store) = temp_store();
        let (tx, mut rx) = channel();
        let start = Instant::now();
        let mut app = App::new(&[], None, start);

        schedule_refresh(&mut app, start + Duration::from_secs(5), &tx);
        drain_actions(&mut rx, &mut app, &backend, &store).await;
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);

        schedule_refresh(&mut app, start + REFRESH_INTERVAL, &tx);
        drain_actions(&mut rx, &mut app, &backend, &store).await;
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_reloads_after_quit() {
        let backend = RecordingBackend::default();
        let (_dir, store) = temp_store();
        let (tx, mut rx) = channel();
        let start = Instant::now();
        let mut app = App::new(&[], None, start);

        app.escape();
        for n in 1..=5 {
            schedule_refresh(&mut app, start + REFRESH_INTERVAL * n, &tx);
        }
        drain_actions(&mut rx, &mut app, &backend, &store).await;

        assert!(!app.running);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
    }
}
