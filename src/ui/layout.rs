use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct UploadLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct MaterialsLayout {
    pub header_area: Rect,
    pub stats_area: Rect,
    pub analysis_area: Rect,
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_upload_chunks(area: Rect) -> UploadLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    UploadLayout {
        header_area: chunks[0],
        input_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_materials_chunks(area: Rect, analysis_height: u16) -> MaterialsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(analysis_height),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    MaterialsLayout {
        header_area: chunks[0],
        stats_area: chunks[1],
        analysis_area: chunks[2],
        tabs_area: chunks[3],
        content_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Single-row strip at the bottom of `area`, used for the notification toast.
pub fn toast_rect(area: Rect) -> Rect {
    let height = 3.min(area.height);
    Rect {
        x: area.x + area.width / 4,
        y: area.y + area.height.saturating_sub(height + 1),
        width: area.width / 2,
        height,
    }
}
