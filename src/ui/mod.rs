mod cards;
mod export;
mod guide;
pub mod layout;
mod materials;
mod popup;
mod upload;

use crate::app::App;
use crate::models::AppState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub use layout::{calculate_materials_chunks, calculate_upload_chunks};
pub use materials::draw_materials;
pub use popup::{draw_game_formats, draw_notification};
pub use upload::draw_upload;

/// Styled "key label" pair for the help bars.
pub fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", label)),
    ]
}

/// Draws the whole screen for the current state, with the notification
/// toast on top.
pub fn draw(f: &mut Frame, app: &mut App, tick: usize) {
    match app.state {
        AppState::Upload => draw_upload(f, app, tick),
        AppState::Materials => draw_materials(f, app),
        AppState::GameFormats => {
            draw_materials(f, app);
            if let Some(content_type) = app.primary_content_type() {
                draw_game_formats(f, content_type);
            }
        }
    }

    if let Some(notification) = app.notifier.current() {
        draw_notification(f, notification);
    }
}
