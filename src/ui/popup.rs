use crate::models::ContentType;
use crate::notify::Notification;
use crate::ui::layout::{centered_rect, toast_rect};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn game_formats_text(content_type: ContentType) -> Text<'static> {
    let (format, features) = content_type.game_format();
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        format!("🎮 GAME FORMATS FOR {}", content_type.label()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("✅ {}:", format),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for feature in features {
        text.push_line(Line::from(format!("  • {}", feature)));
    }
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "🚀 This feature is coming soon!",
        Style::default().fg(Color::Yellow),
    )));
    text
}

pub fn draw_game_formats(f: &mut Frame, content_type: ContentType) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let popup = Paragraph::new(game_formats_text(content_type))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("Advanced game formats")
                .title_bottom(Line::from("Press any key").alignment(Alignment::Center)),
        );
    f.render_widget(popup, area);
}

pub fn draw_notification(f: &mut Frame, notification: &Notification) {
    let area = toast_rect(f.area());
    f.render_widget(Clear, area);

    let color = notification.severity.color();
    let toast = Paragraph::new(notification.message.clone())
        .style(Style::default().fg(Color::White).bg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(toast, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_formats_for_process() {
        let rendered: Vec<String> = game_formats_text(ContentType::Process)
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(rendered[0], "🎮 GAME FORMATS FOR PROCESS");
        assert!(rendered.contains(&"✅ Algorithm simulator:".to_string()));
        assert!(rendered.contains(&"  • Step-by-step execution".to_string()));
        assert_eq!(rendered.last().unwrap(), "🚀 This feature is coming soon!");
    }
}
