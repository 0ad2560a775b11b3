//! Panel shown for paths that match no route

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::ui::Styles;

pub fn draw(f: &mut Frame, area: Rect, path: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Page not found", Styles::error())),
        Line::from(""),
        Line::from(format!("Nothing is routed at '{}'.", path)),
        Line::from(Span::styled(
            "Use the nav bar or press Esc to go home.",
            Styles::inactive(),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title("Not Found")
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border()),
    );
    f.render_widget(paragraph, area);
}
