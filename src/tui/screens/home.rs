//! Home screen for the UpSkill TUI

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    routes::Route,
    traits::{Navigable, ScreenAction},
    ui::Styles,
};

/// A button on the home screen leading to one collection
#[derive(Debug, Clone)]
pub struct Affordance {
    pub label: String,
    pub description: String,
    pub route: Route,
}

impl Affordance {
    pub fn new(label: &str, description: &str, route: Route) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            route,
        }
    }
}

/// Home screen state
pub struct HomeScreen {
    pub affordances: Vec<Affordance>,
    pub selected: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        let affordances = vec![
            Affordance::new("Users", "Everyone on the platform", Route::Users),
            Affordance::new("Courses", "Courses being taken", Route::Courses),
            Affordance::new("Skills", "Skills and how far along they are", Route::Skills),
        ];

        Self {
            affordances,
            selected: 0,
        }
    }

    /// Handle key events for the home screen
    pub fn handle_key_event(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.navigate_up();
                ScreenAction::None
            }
            KeyCode::Right | KeyCode::Down => {
                self.navigate_down();
                ScreenAction::None
            }
            KeyCode::Enter => self
                .affordances
                .get(self.selected)
                .map_or(ScreenAction::None, |a| ScreenAction::NavigateTo(a.route.clone())),
            _ => ScreenAction::None,
        }
    }

    /// Draw the home screen
    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacer
                Constraint::Length(5), // Banner
                Constraint::Length(2), // Prompt
                Constraint::Length(5), // Buttons
                Constraint::Min(0),
            ])
            .split(inner);

        self.draw_banner(f, chunks[1]);

        let prompt = Paragraph::new("Get started by exploring our users, courses, and skills.")
            .alignment(Alignment::Center);
        f.render_widget(prompt, chunks[2]);

        self.draw_buttons(f, chunks[3]);
    }

    fn draw_banner(&self, f: &mut Frame, area: Rect) {
        let banner = vec![
            Line::from(Span::styled(
                "Welcome to UpSkill",
                Styles::title().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A scalable micro SaaS application for managing your skills and courses.",
                Styles::info(),
            )),
            Line::from(Span::styled("─".repeat(40), Styles::inactive())),
        ];

        f.render_widget(Paragraph::new(banner).alignment(Alignment::Center), area);
    }

    fn draw_buttons(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (i, (affordance, cell)) in self.affordances.iter().zip(columns.iter()).enumerate() {
            let is_selected = i == self.selected;
            let label_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let shortcut = affordance
                .route
                .shortcut()
                .map(|c| format!("[{}] ", c))
                .unwrap_or_default();

            let content = vec![
                Line::from(vec![
                    Span::styled(shortcut, Styles::info()),
                    Span::styled(affordance.label.clone(), label_style),
                ]),
                Line::from(Span::styled(affordance.description.clone(), Styles::inactive())),
            ];

            let button = Paragraph::new(content).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(if is_selected {
                        Styles::active_border()
                    } else {
                        Styles::inactive_border()
                    }),
            );
            f.render_widget(button, *cell);
        }
    }
}

impl Navigable for HomeScreen {
    fn navigate_up(&mut self) {
        self.selected = if self.selected == 0 {
            self.affordances.len() - 1
        } else {
            self.selected - 1
        };
    }

    fn navigate_down(&mut self) {
        self.selected = (self.selected + 1) % self.affordances.len();
    }

    fn get_selected_index(&self) -> Option<usize> {
        Some(self.selected)
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            if index < self.affordances.len() {
                self.selected = index;
            }
        }
    }

    fn get_item_count(&self) -> usize {
        self.affordances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_follows_selected_affordance() {
        let mut home = HomeScreen::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)),
            ScreenAction::NavigateTo(Route::Users)
        );

        home.handle_key_event(key(KeyCode::Right));
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)),
            ScreenAction::NavigateTo(Route::Courses)
        );

        home.handle_key_event(key(KeyCode::Left));
        home.handle_key_event(key(KeyCode::Left));
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)),
            ScreenAction::NavigateTo(Route::Skills)
        );
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut home = HomeScreen::new();
        assert_eq!(home.handle_key_event(key(KeyCode::Char('z'))), ScreenAction::None);
        assert_eq!(home.get_selected_index(), Some(0));
    }
}
