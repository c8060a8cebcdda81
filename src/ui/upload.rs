use crate::app::App;
use crate::ui::layout::calculate_upload_chunks;
use crate::ui::key_hint;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn draw_upload(f: &mut Frame, app: &App, tick: usize) {
    let layout = calculate_upload_chunks(f.area());

    let title = Paragraph::new("LearnGame AI v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let input_text = if app.path_input.is_empty() {
        Span::styled(
            "[Type a PDF path or drop the file here...]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::from(app.path_input.as_str())
    };
    let input = Paragraph::new(Line::from(input_text))
        .block(Block::default().borders(Borders::ALL).title("PDF file"));
    f.render_widget(input, layout.input_area);

    let before_cursor = &app.path_input[..app.cursor_position];
    let cursor_x = layout.input_area.x + 1 + before_cursor.width() as u16;
    f.set_cursor_position((
        cursor_x.min(layout.input_area.right().saturating_sub(2)),
        layout.input_area.y + 1,
    ));

    let status: Vec<Line> = if app.loading {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} The AI is analysing {}...",
                    SPINNER[tick % SPINNER.len()],
                    app.loading_file.as_deref().unwrap_or("the document")
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("This can take a minute for long documents."),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from("Upload a PDF to get a study guide, flashcards, a test"),
            Line::from("and a markdown export generated from it."),
        ]
    };
    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status_area);

    let mut spans = key_hint("Enter", "Upload");
    if app.results.is_some() && !app.loading {
        spans.extend(key_hint("Esc", "Back to materials"));
    } else if app.results.is_none() && !app.loading {
        spans.extend(key_hint("Esc", "Quit"));
    }
    spans.extend(key_hint("Ctrl+C", "Exit App"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
