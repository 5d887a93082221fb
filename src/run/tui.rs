use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::error::SubmitError;
use crate::ledger::Ledger;
use crate::models::Filter;
use crate::ui::app::{App, Focus};
use crate::ui::render::CHROME_ROWS;
use crate::ui::util::format_money;

pub(crate) fn as_tui(ledger: Ledger) -> Result<()> {
    let mut app = App::new(ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "terminal session failed");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_ROWS) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.running = false;
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.focus {
                Focus::Form => handle_form_input(key, app),
                Focus::List => handle_list_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('t') {
            app.toggle_type();
        }
        return;
    }

    match key.code {
        KeyCode::Enter => handle_submit(app),
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        KeyCode::F(1) => app.show_help = true,
        _ if !app.form.field.is_text() => handle_category_input(key, app),
        KeyCode::Backspace => {
            if let Some(input) = app.form.input_mut() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.form.input_mut() {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_category_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.form.cycle_category(1),
        KeyCode::Char('-') | KeyCode::Left => app.form.cycle_category(-1),
        KeyCode::Char('t') | KeyCode::Char(' ') => app.toggle_type(),
        _ => {}
    }
}

fn handle_list_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.move_to_top(),
        KeyCode::Char('G') => app.move_to_bottom(),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_down();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_up();
            }
        }
        KeyCode::Char('D') | KeyCode::Delete => handle_delete(app),
        KeyCode::Char('1') => select_filter(app, Filter::All),
        KeyCode::Char('2') => select_filter(app, Filter::Income),
        KeyCode::Char('3') => select_filter(app, Filter::Expense),
        KeyCode::Char('t') => {
            app.toggle_type();
            let kind = app.form.kind;
            app.set_status(format!("New records are {kind}"));
        }
        KeyCode::Char('?') | KeyCode::F(1) => app.show_help = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('i') | KeyCode::Esc => {
            app.focus = Focus::Form;
        }
        _ => {}
    }
}

fn handle_submit(app: &mut App) {
    match app.submit() {
        Ok(record) => {
            let msg = format!(
                "Saved: {}{} {}",
                record.kind.sign(),
                format_money(record.amount),
                record.category
            );
            app.set_status(msg);
        }
        Err(SubmitError::Storage(e)) => {
            tracing::error!(error = ?e, "failed to save record");
            app.set_status(format!("Could not save: {e}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn handle_delete(app: &mut App) {
    match app.delete_selected() {
        Ok(Some(item)) => app.set_status(format!("Deleted: {} {}", item.title, item.amount)),
        Ok(None) => app.set_status("Nothing to delete"),
        Err(e) => {
            tracing::error!(error = ?e, "failed to delete record");
            app.set_status(format!("Could not delete: {e}"));
        }
    }
}

fn select_filter(app: &mut App, filter: Filter) {
    app.select_filter(filter);
    app.set_status(format!("Showing: {filter}"));
}
