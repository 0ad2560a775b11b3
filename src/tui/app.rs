//! Main TUI application state and logic

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use super::components::{nav_bar, ListView};
use super::routes::Route;
use super::screens::{not_found, HomeScreen};
use super::traits::{Navigable, ScreenAction};
use super::ui::{centered_rect, InputField};
use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{Course, Skill, User};

/// Navigation shell: the current route, its screen, and the nav bar around it
pub struct App {
    /// Route currently on screen
    pub route: Route,
    /// Application configuration
    pub config: Config,

    // Screen states
    pub home: HomeScreen,
    pub users: ListView<User>,
    pub courses: ListView<Course>,
    pub skills: ListView<Skill>,

    // Global application state
    pub path_prompt: Option<InputField>,
    pub should_quit: bool,
    pub show_help_popup: bool,
}

impl App {
    /// Create the application showing `route`
    pub fn new(config: Config, client: Arc<dyn ApiClient>, route: Route) -> Self {
        let mut app = Self {
            route: Route::Home,
            config,

            home: HomeScreen::new(),
            users: ListView::new(Arc::clone(&client)),
            courses: ListView::new(Arc::clone(&client)),
            skills: ListView::new(client),

            path_prompt: None,
            should_quit: false,
            show_help_popup: false,
        };
        app.open(route);
        app
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = self.config.tick_rate();

        loop {
            // Draw the UI
            terminal.draw(|f| self.draw(f))?;

            // Handle events
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.on_tick().await;

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Advance the active screen: spinner frame and any finished fetch
    pub async fn on_tick(&mut self) {
        match self.route {
            Route::Users => {
                self.users.on_tick();
                self.users.poll().await;
            }
            Route::Courses => {
                self.courses.on_tick();
                self.courses.poll().await;
            }
            Route::Skills => {
                self.skills.on_tick();
                self.skills.poll().await;
            }
            Route::Home | Route::NotFound(_) => {}
        }
    }

    /// Show `route` unless it is already on screen
    pub fn navigate_to(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.open(route);
    }

    fn open(&mut self, route: Route) {
        match self.route {
            Route::Users => self.users.deactivate(),
            Route::Courses => self.courses.deactivate(),
            Route::Skills => self.skills.deactivate(),
            Route::Home | Route::NotFound(_) => {}
        }

        info!("Navigating to {}", route.path());
        self.route = route;

        match self.route {
            Route::Users => self.users.activate(),
            Route::Courses => self.courses.activate(),
            Route::Skills => self.skills.activate(),
            Route::Home | Route::NotFound(_) => {}
        }
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.path_prompt.is_some() {
            self.handle_prompt_event(key);
            return;
        }

        // Global shortcuts
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.show_help_popup = !self.show_help_popup;
                return;
            }
            KeyCode::Esc => {
                if self.show_help_popup {
                    self.show_help_popup = false;
                } else {
                    self.navigate_to(Route::Home);
                }
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.show_help_popup {
            return;
        }

        match key.code {
            KeyCode::Tab => self.navigate_to(self.route.next()),
            KeyCode::BackTab => self.navigate_to(self.route.previous()),
            KeyCode::Char('g') => {
                self.path_prompt = Some(
                    InputField::new("Go to path (Enter to open, Esc to cancel)")
                        .with_placeholder("/users"),
                );
            }
            KeyCode::Char(c) if Route::from_key(c).is_some() => {
                if let Some(route) = Route::from_key(c) {
                    self.navigate_to(route);
                }
            }
            _ => self.handle_screen_event(key),
        }
    }

    fn handle_prompt_event(&mut self, key: KeyEvent) {
        let Some(prompt) = self.path_prompt.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Enter => {
                if !prompt.is_empty() {
                    let route = Route::from_path(prompt.value.trim());
                    self.path_prompt = None;
                    self.navigate_to(route);
                }
            }
            KeyCode::Esc => self.path_prompt = None,
            KeyCode::Backspace => prompt.delete_char(),
            KeyCode::Left => prompt.move_cursor_left(),
            KeyCode::Right => prompt.move_cursor_right(),
            KeyCode::Char(c) => prompt.insert_char(c),
            _ => {}
        }
    }

    fn handle_screen_event(&mut self, key: KeyEvent) {
        let action = match self.route {
            Route::Home => self.home.handle_key_event(key),
            Route::Users => navigate_list(&mut self.users, key),
            Route::Courses => navigate_list(&mut self.courses, key),
            Route::Skills => navigate_list(&mut self.skills, key),
            Route::NotFound(_) => ScreenAction::None,
        };

        match action {
            ScreenAction::NavigateTo(route) => self.navigate_to(route),
            ScreenAction::None => {}
        }
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        // Nav bar on top, status bar at bottom, content between
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        nav_bar::draw(f, chunks[0], &self.route);

        match &self.route {
            Route::Home => self.home.draw(f, chunks[1]),
            Route::Users => self.users.render(f, chunks[1]),
            Route::Courses => self.courses.render(f, chunks[1]),
            Route::Skills => self.skills.render(f, chunks[1]),
            Route::NotFound(path) => not_found::draw(f, chunks[1], path),
        }

        self.draw_status_bar(f, chunks[2]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }

        if let Some(prompt) = &self.path_prompt {
            let area = centered_rect(60, 20, size);
            let prompt_area = Rect {
                height: area.height.min(3),
                ..area
            };
            f.render_widget(Clear, prompt_area);
            prompt.render(f, prompt_area);
        }
    }

    /// Draw status bar with the current path and shortcuts
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = format!(
            "{} | Tab: Next | g: Go to | Esc: Home | q: Quit | F1/?: Help",
            self.route.path()
        );

        let status_bar = Paragraph::new(status_text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    /// Draw help popup with context-sensitive shortcuts
    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.get_context_help())
            .block(
                Block::default()
                    .title("Help - Shortcuts")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help_popup, popup_area);
    }

    /// Get context-sensitive help content
    fn get_context_help(&self) -> String {
        let global_help = "Global Shortcuts:\n\
            1-4 or h/u/c/s - Home, Users, Courses, Skills\n\
            Tab / Shift+Tab - Next / previous page\n\
            g - Go to a path\n\
            Esc - Home\n\
            q - Quit\n\
            F1 / ? - Toggle this help\n\n";

        let screen_help = match self.route {
            Route::Home => {
                "Home:\n\
                ←/→ - Choose a section\n\
                Enter - Open it"
            }
            Route::Users | Route::Courses | Route::Skills => {
                "List:\n\
                ↑/↓ - Move selection\n\
                Home/End - First / last entry"
            }
            Route::NotFound(_) => "Not Found:\nPick a page from the nav bar",
        };

        format!("{}{}", global_help, screen_help)
    }
}

fn navigate_list<T: Navigable>(view: &mut T, key: KeyEvent) -> ScreenAction {
    match key.code {
        KeyCode::Up => view.navigate_up(),
        KeyCode::Down => view.navigate_down(),
        KeyCode::Home => view.navigate_to_first(),
        KeyCode::End => view.navigate_to_last(),
        _ => {}
    }
    ScreenAction::None
}
