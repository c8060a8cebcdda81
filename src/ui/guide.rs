use crate::app::MaterialsSession;
use crate::render::{GuideView, ItemView};
use crate::utils::{calculate_max_scroll, estimate_text_height};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn guide_text(guide: &GuideView) -> Text<'static> {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        guide.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(Span::styled(
        format!("Created: {}", guide.created_at),
        Style::default().fg(Color::DarkGray),
    )));

    for section in &guide.sections {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            format!("{} {}", section.icon, section.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        for item in &section.items {
            push_item(&mut text, item);
        }
    }
    text
}

fn push_item(text: &mut Text<'static>, item: &ItemView) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    text.push_line(Line::from(""));
    if let Some(name) = &item.name {
        text.push_line(Line::from(Span::styled(
            format!("  {} {}", item.icon, name),
            bold,
        )));
    }
    if let Some(role) = &item.role {
        text.push_line(Line::from(vec![
            Span::styled("    Role: ", bold),
            Span::from(role.clone()),
        ]));
    }
    if let Some(description) = &item.description {
        for line in description.lines() {
            text.push_line(Line::from(format!("    {}", line)));
        }
    }
    if let Some(participants) = &item.participants {
        text.push_line(Line::from(vec![
            Span::styled("    Participants: ", bold),
            Span::from(participants.clone()),
        ]));
    }
}

pub fn draw_guide(f: &mut Frame, session: &mut MaterialsSession, area: Rect) {
    let text = guide_text(&session.view.guide);

    let visible_height = area.height.saturating_sub(2) as usize;
    let text_width = area.width.saturating_sub(2) as usize;
    let max_scroll = calculate_max_scroll(estimate_text_height(&text, text_width), visible_height);
    session.guide_scroll = session.guide_scroll.min(max_scroll);

    let guide = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((session.guide_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Study guide"));
    f.render_widget(guide, area);
}
