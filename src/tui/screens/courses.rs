//! Courses screen presentation

use ratatui::text::{Line, Span};

use crate::models::Course;
use crate::tui::{
    traits::{ItemLayout, ItemView},
    ui::Styles,
};

impl ItemView for Course {
    const LAYOUT: ItemLayout = ItemLayout::Cards { per_row: 3 };

    fn heading() -> &'static str {
        "Courses"
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(self.title.clone(), Styles::title())),
            Line::from(self.description_str().to_string()),
        ]
    }

    fn card_title(&self) -> String {
        self.title.clone()
    }

    fn card_body(&self) -> String {
        self.description_str().to_string()
    }
}
