use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static::lazy_static! {
    static ref INLINE_RE: Regex = Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*").expect("valid regex");
    static ref NUMBERED_RE: Regex = Regex::new(r"^(\d+)\.\s+(.*)$").expect("valid regex");
}

/// Styled preview of the exported markdown: headings, bullet items with the
/// ✓/○ answer markers, numbered items and inline **bold** / *italic*.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    content.lines().map(render_line).collect()
}

fn render_line(line: &str) -> Line<'static> {
    let trimmed = line.trim();

    if let Some(level) = heading_level(trimmed) {
        let text = trimmed[level..].trim_start().to_string();
        let style = match level {
            1 => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            2 => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            _ => Style::default().add_modifier(Modifier::BOLD),
        };
        return Line::from(Span::styled(text, style));
    }

    if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
        let mut spans = vec![Span::from("  • ")];
        if let Some(rest) = item.strip_prefix("✓ ") {
            spans.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
            spans.extend(parse_inline(rest));
        } else if let Some(rest) = item.strip_prefix("○ ") {
            spans.push(Span::styled("○ ", Style::default().fg(Color::DarkGray)));
            spans.extend(parse_inline(rest));
        } else {
            spans.extend(parse_inline(item));
        }
        return Line::from(spans);
    }

    if let Some(caps) = NUMBERED_RE.captures(trimmed) {
        let mut spans = vec![Span::from(format!("  {}. ", &caps[1]))];
        spans.extend(parse_inline(&caps[2]));
        return Line::from(spans);
    }

    if trimmed.is_empty() {
        Line::from("")
    } else {
        Line::from(parse_inline(line))
    }
}

fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some(hashes)
    } else {
        None
    }
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::from(text[last..whole.start()].to_string()));
        }
        if let Some(bold) = caps.get(1) {
            spans.push(Span::styled(
                bold.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else if let Some(italic) = caps.get(2) {
            spans.push(Span::styled(
                italic.as_str().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        last = whole.end();
    }

    if last < text.len() || spans.is_empty() {
        spans.push(Span::from(text[last..].to_string()));
    }
    spans
}
