use crate::app::{App, MaterialsSession, Results};
use crate::render::{AnalysisView, MISSING_MATERIALS, StatView, Tab};
use crate::ui::layout::calculate_materials_chunks;
use crate::ui::{cards, export, guide, key_hint, test};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw_materials(f: &mut Frame, app: &mut App) {
    match &mut app.results {
        Some(Results::Ready(session)) => draw_session(f, session),
        Some(Results::Missing) => draw_missing(f),
        None => {}
    }
}

fn draw_missing(f: &mut Frame) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let placeholder = Paragraph::new(MISSING_MATERIALS)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Error"));
    f.render_widget(placeholder, chunks[0]);

    let mut spans = key_hint("u", "Upload another file");
    spans.extend(key_hint("q", "Quit"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn draw_session(f: &mut Frame, session: &mut MaterialsSession) {
    let analysis_height = if session.view.analysis.is_some() { 6 } else { 0 };
    let layout = calculate_materials_chunks(f.area(), analysis_height);

    let header = Paragraph::new(format!("Study materials - {}", session.view.guide.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    draw_stats(f, &session.view.stats, layout.stats_area);

    if let Some(analysis) = &session.view.analysis {
        draw_analysis(f, analysis, layout.analysis_area);
    }

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!("F{} {}", t.index() + 1, t.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(session.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, layout.tabs_area);

    match session.tab {
        Tab::Guide => guide::draw_guide(f, session, layout.content_area),
        Tab::Cards => cards::draw_cards(f, session, layout.content_area),
        Tab::Test => test::draw_test(f, session, layout.content_area),
        Tab::Export => export::draw_export(f, session, layout.content_area),
    }

    let mut spans = key_hint("Tab", "Switch");
    match session.tab {
        Tab::Guide => spans.extend(key_hint("↑/↓", "Scroll")),
        Tab::Cards => {
            spans.extend(key_hint("Space", "Flip"));
            spans.extend(key_hint("←/→", "Prev/Next"));
            spans.extend(key_hint("1-3", "Rate"));
        }
        Tab::Test => {
            spans.extend(key_hint("↑/↓", "Question"));
            spans.extend(key_hint("←/→", "Answer"));
            spans.extend(key_hint("Enter", "Check test"));
        }
        Tab::Export => {
            spans.extend(key_hint("c", "Copy"));
            spans.extend(key_hint("d", "Download"));
            spans.extend(key_hint("p", "Print"));
            spans.extend(key_hint("v", "Preview"));
        }
    }
    if session.view.analysis.is_some() {
        spans.extend(key_hint("a", "Game formats"));
    }
    spans.extend(key_hint("u", "Upload"));
    spans.extend(key_hint("q", "Quit"));
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_stats(f: &mut Frame, stats: &[StatView], area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len().max(1) as u32); stats.len()])
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let line = Line::from(vec![
            Span::styled(
                stat.value.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!(" {}", stat.label)),
        ]);
        let widget = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, *cell);
    }
}

fn draw_analysis(f: &mut Frame, analysis: &AnalysisView, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type: ", bold),
            Span::from(analysis.primary.label()),
            Span::styled("   Confidence: ", bold),
            Span::from(format!("{}%", analysis.confidence_percent)),
        ]),
        Line::from(vec![
            Span::styled("Recommendation: ", bold),
            Span::from(analysis.reason.clone()),
        ]),
    ];
    if let Some(secondary) = &analysis.secondary {
        lines.push(Line::from(vec![
            Span::styled("Additional types: ", bold),
            Span::from(secondary.clone()),
        ]));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Content analysis"),
        );
    f.render_widget(widget, area);
}
