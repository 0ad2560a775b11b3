//! Users screen presentation

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::models::User;
use crate::tui::{
    traits::{ItemLayout, ItemView},
    ui::Styles,
};

impl ItemView for User {
    const LAYOUT: ItemLayout = ItemLayout::List;

    fn heading() -> &'static str {
        "Users"
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                self.username.clone(),
                Styles::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Email: ", Styles::inactive()),
                Span::raw(self.email.clone()),
            ]),
            Line::from(""),
        ]
    }
}
