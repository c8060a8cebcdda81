use crate::app::App;
use crate::models::AppState;
use crate::render::Tab;
use crate::utils::normalize_dropped_path;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::Write;

pub fn handle_key<W: Write>(app: &mut App, key: KeyEvent, out: &mut W) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Upload => handle_upload_input(app, key),
        AppState::Materials => handle_materials_input(app, key, out),
        AppState::GameFormats => app.state = AppState::Materials,
    }
}

/// A file dropped on the terminal arrives as pasted text; treat it as an
/// upload request right away, even while an earlier upload is pending.
pub fn handle_paste(app: &mut App, text: &str) {
    let path = normalize_dropped_path(text);
    app.path_input = path.display().to_string();
    app.cursor_position = app.path_input.len();
    app.start_upload(&path);
}

fn handle_upload_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.results.is_some() && !app.loading {
                app.state = AppState::Materials;
            } else if app.results.is_none() && !app.loading {
                app.should_quit = true;
            }
        }
        KeyCode::Enter => {
            if !app.path_input.trim().is_empty() {
                let path = normalize_dropped_path(&app.path_input);
                app.start_upload(&path);
            }
        }
        KeyCode::Left => {
            if let Some(ch) = app.path_input[..app.cursor_position].chars().next_back() {
                app.cursor_position -= ch.len_utf8();
            }
        }
        KeyCode::Right => {
            if let Some(ch) = app.path_input[app.cursor_position..].chars().next() {
                app.cursor_position += ch.len_utf8();
            }
        }
        KeyCode::Home => app.cursor_position = 0,
        KeyCode::End => app.cursor_position = app.path_input.len(),
        KeyCode::Backspace => {
            if let Some(ch) = app.path_input[..app.cursor_position].chars().next_back() {
                app.cursor_position -= ch.len_utf8();
                app.path_input.remove(app.cursor_position);
            }
        }
        KeyCode::Char(c) => {
            app.path_input.insert(app.cursor_position, c);
            app.cursor_position += c.len_utf8();
        }
        _ => {}
    }
}

fn handle_materials_input<W: Write>(app: &mut App, key: KeyEvent, out: &mut W) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('u') => {
            app.state = AppState::Upload;
            return;
        }
        KeyCode::Char('a') => {
            if app.primary_content_type().is_some() {
                app.state = AppState::GameFormats;
            }
            return;
        }
        _ => {}
    }

    let Some(session) = app.session_mut() else {
        return;
    };

    let target = match key.code {
        KeyCode::Tab => Some(session.tab.next()),
        KeyCode::BackTab => Some(session.tab.prev()),
        KeyCode::F(n @ 1..=4) => Some(Tab::ALL[n as usize - 1]),
        _ => None,
    };
    if let Some(tab) = target {
        session.show_tab(tab);
        return;
    }

    let tab = session.tab;
    match tab {
        Tab::Guide => match key.code {
            KeyCode::Down => session.guide_scroll = session.guide_scroll.saturating_add(1),
            KeyCode::Up => session.guide_scroll = session.guide_scroll.saturating_sub(1),
            KeyCode::PageDown => session.guide_scroll = session.guide_scroll.saturating_add(10),
            KeyCode::PageUp => session.guide_scroll = session.guide_scroll.saturating_sub(10),
            _ => {}
        },
        Tab::Cards => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let cursor = session.navigator.cursor();
                session.navigator.flip(cursor);
            }
            KeyCode::Right | KeyCode::Char('n') => session.navigator.next(),
            KeyCode::Left | KeyCode::Char('p') => session.navigator.prev(),
            KeyCode::Char(c @ '1'..='3') => {
                // Rating buttons live on the back of the card.
                if session.navigator.is_revealed(session.navigator.cursor()) {
                    app.rate_current_card(c as u8 - b'0');
                }
            }
            _ => {}
        },
        Tab::Test => match key.code {
            KeyCode::Down => session.quiz.focus_next(),
            KeyCode::Up => session.quiz.focus_prev(),
            KeyCode::Right => session.quiz.cycle(true),
            KeyCode::Left => session.quiz.cycle(false),
            KeyCode::Char(c @ '1'..='9') => {
                let focus = session.quiz.focus();
                session.quiz.select(focus, c as usize - '1' as usize);
            }
            KeyCode::Enter => app.submit_test(),
            _ => {}
        },
        Tab::Export => match key.code {
            KeyCode::Down => session.export_scroll = session.export_scroll.saturating_add(1),
            KeyCode::Up => session.export_scroll = session.export_scroll.saturating_sub(1),
            KeyCode::Char('v') => session.export_preview = !session.export_preview,
            KeyCode::Char('c') => app.copy_export(out),
            KeyCode::Char('d') => app.download_export(),
            KeyCode::Char('p') => app.print_export(),
            _ => {}
        },
    }
}
