use crate::app::MaterialsSession;
use crate::flashcards::{CardView, Difficulty};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn card_text(card: &CardView, revealed: bool) -> Text<'static> {
    let mut text = Text::default();
    if revealed {
        for line in card.back.lines() {
            text.push_line(Line::from(line.to_string()));
        }
        text.push_line(Line::from(""));
        let buttons: Vec<Span> = [Difficulty::Hard, Difficulty::Normal, Difficulty::Easy]
            .into_iter()
            .flat_map(|d| {
                [
                    Span::styled(
                        format!("[{}] {}", d as u8, d.label()),
                        Style::default()
                            .fg(match d {
                                Difficulty::Hard => Color::Red,
                                Difficulty::Normal => Color::Yellow,
                                Difficulty::Easy => Color::Green,
                            })
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::from("   "),
                ]
            })
            .collect();
        text.push_line(Line::from(buttons));
    } else {
        text.push_line(Line::from(Span::styled(
            card.front.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if let Some(hint) = &card.hint {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                format!("💡 {}", hint),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }
    text
}

pub fn draw_cards(f: &mut Frame, session: &MaterialsSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let nav = &session.navigator;
    let (title, body) = match nav.current() {
        Some(card) => {
            let revealed = nav.is_revealed(nav.cursor());
            let title = if revealed { "Answer" } else { "Question" };
            (title, card_text(card, revealed))
        }
        None => ("Flashcards", Text::from("No flashcards were created.")),
    };

    let card = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from("Press Space to flip").alignment(Alignment::Center)),
        );
    f.render_widget(card, chunks[0]);

    let counter = Paragraph::new(format!("◀  {}  ▶", nav.counter()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(counter, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: Text) -> String {
        text.lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn card() -> CardView {
        CardView {
            front: "Who is Anna?".into(),
            back: "heroine\n\nlives in Moscow".into(),
            hint: Some("Role: heroine".into()),
        }
    }

    #[test]
    fn test_front_shows_hint_not_back() {
        let text = plain(card_text(&card(), false));
        assert!(text.contains("Who is Anna?"));
        assert!(text.contains("Role: heroine"));
        assert!(!text.contains("lives in Moscow"));
    }

    #[test]
    fn test_back_shows_rating_buttons() {
        let text = plain(card_text(&card(), true));
        assert!(text.contains("lives in Moscow"));
        assert!(text.contains("[1] Hard"));
        assert!(text.contains("[3] Easy"));
        assert!(!text.contains("Who is Anna?"));
    }
}
