use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::App;

pub(in crate::tui_shell) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                TermEvent::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // While the viewer is up only dismissal is handled; everything else
    // waits for the countdown.
    if !app.viewer.is_idle() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            if let Some(id) = app.viewer.dismiss() {
                app.consume(id);
            }
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected = app.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if !app.feed.is_empty() {
                app.selected = (app.selected + 1).min(app.feed.len() - 1);
            }
        }
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('l') => app.logout(),
        _ => {}
    }
}
