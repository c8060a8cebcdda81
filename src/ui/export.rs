use crate::app::MaterialsSession;
use crate::export::EXPORT_FILE_NAME;
use crate::utils::markdown::render_markdown;
use crate::utils::{calculate_max_scroll, estimate_text_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_export(f: &mut Frame, session: &mut MaterialsSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let intro = Paragraph::new(format!(
        "Copy this text or save it as {}",
        EXPORT_FILE_NAME
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(intro, chunks[0]);

    let (text, title) = if session.export_preview {
        (Text::from(render_markdown(&session.view.markdown)), "Markdown preview")
    } else {
        (
            Text::from(
                session
                    .view
                    .markdown
                    .lines()
                    .map(|l| Line::from(l.to_string()))
                    .collect::<Vec<_>>(),
            ),
            "Markdown (read-only)",
        )
    };

    let area = chunks[1];
    let visible_height = area.height.saturating_sub(2) as usize;
    let text_width = area.width.saturating_sub(2) as usize;
    let max_scroll = calculate_max_scroll(estimate_text_height(&text, text_width), visible_height);
    session.export_scroll = session.export_scroll.min(max_scroll);

    let content = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((session.export_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, area);
}
