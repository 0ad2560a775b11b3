//! Generic collection view: fetch on activation, then render

use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::{fetch_collection, ApiClient, ApiError};
use crate::models::ItemId;
use crate::tui::{
    traits::{ItemLayout, ItemView, Navigable},
    ui::{centered_line, truncate_to_width, Styles},
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const CARD_HEIGHT: u16 = 6;

/// Lifecycle of one activation
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(Vec<T>),
    Error(String),
}

/// A screen that fetches one collection each time it is shown
pub struct ListView<R: ItemView> {
    client: Arc<dyn ApiClient>,
    state: FetchState<R>,
    pending: Option<JoinHandle<Result<Vec<R>, ApiError>>>,
    selection: ListState,
    active: bool,
    spinner_frame: usize,
}

impl<R: ItemView> ListView<R> {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self {
            client,
            state: FetchState::Loading,
            pending: None,
            selection: ListState::default(),
            active: false,
            spinner_frame: 0,
        }
    }

    /// Start a fresh fetch, discarding anything from a previous activation
    pub fn activate(&mut self) {
        self.cancel_pending();
        self.state = FetchState::Loading;
        self.selection = ListState::default();
        self.spinner_frame = 0;
        self.active = true;

        info!("Fetching {} from {}", R::LABEL, R::ENDPOINT);
        let client = Arc::clone(&self.client);
        self.pending = Some(tokio::spawn(async move {
            fetch_collection::<R>(client.as_ref()).await
        }));
    }

    /// Stop showing this view; an unfinished fetch is aborted and its result dropped
    pub fn deactivate(&mut self) {
        self.cancel_pending();
        self.state = FetchState::Loading;
        self.selection = ListState::default();
        self.active = false;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                info!("Aborting in-flight fetch of {}", R::LABEL);
            }
            handle.abort();
        }
    }

    /// Apply the fetch result once its task has finished
    pub async fn poll(&mut self) {
        let finished = self.pending.as_ref().map_or(false, |h| h.is_finished());
        if !finished {
            return;
        }

        let Some(handle) = self.pending.take() else {
            return;
        };

        let outcome = match handle.await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(e) => Err(format!("fetch task failed: {}", e)),
        };
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Result<Vec<R>, String>) {
        if !self.active {
            return;
        }

        match outcome {
            Ok(items) => {
                info!("Loaded {} {}", items.len(), R::LABEL);
                if !items.is_empty() {
                    self.selection.select(Some(0));
                }
                self.state = FetchState::Ready(items);
            }
            Err(cause) => {
                warn!("Fetching {} failed: {}", R::LABEL, cause);
                self.state = FetchState::Error(R::fetch_error_message());
            }
        }
    }

    /// Advance the loading animation
    pub fn on_tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn state(&self) -> &FetchState<R> {
        &self.state
    }

    /// Records of the current activation, empty unless ready
    pub fn items(&self) -> &[R] {
        match &self.state {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Render keys of the current records, in display order
    pub fn keys(&self) -> Vec<ItemId> {
        self.items().iter().map(|item| item.id()).collect()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.pending.is_some()
    }

    pub fn selected(&self) -> Option<&R> {
        self.selection.selected().and_then(|i| self.items().get(i))
    }

    /// Render the view for its current state
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(R::heading(), Styles::title()))
            .borders(Borders::ALL)
            .border_style(Styles::active_border());
        let inner = block.inner(area);
        f.render_widget(block, area);

        match &self.state {
            FetchState::Loading => {
                let indicator = format!("{} Loading...", SPINNER_FRAMES[self.spinner_frame]);
                let paragraph = Paragraph::new(indicator)
                    .style(Styles::loading())
                    .alignment(Alignment::Center);
                f.render_widget(paragraph, centered_line(1, inner));
            }
            FetchState::Error(message) => {
                let paragraph = Paragraph::new(message.clone())
                    .style(Styles::error())
                    .alignment(Alignment::Center);
                f.render_widget(paragraph, centered_line(1, inner));
            }
            FetchState::Ready(items) => match R::LAYOUT {
                ItemLayout::List => render_list(f, inner, items, &mut self.selection),
                ItemLayout::Cards { per_row } => {
                    render_cards(f, inner, items, self.selection.selected(), per_row.max(1))
                }
            },
        }
    }
}

fn render_list<R: ItemView>(f: &mut Frame, area: Rect, items: &[R], selection: &mut ListState) {
    let entries: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(item.list_lines()))
        .collect();

    let list = List::new(entries).highlight_style(Styles::selected());
    f.render_stateful_widget(list, area, selection);
}

fn render_cards<R: ItemView>(
    f: &mut Frame,
    area: Rect,
    items: &[R],
    selected: Option<usize>,
    per_row: usize,
) {
    if items.is_empty() || area.height == 0 {
        return;
    }

    let total_rows = (items.len() + per_row - 1) / per_row;
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = selected.unwrap_or(0) / per_row;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let columns = vec![Constraint::Ratio(1, per_row as u32); per_row];

    for (offset, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + offset as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT.min(area.height),
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns.clone())
            .split(row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * per_row + column;
            let Some(item) = items.get(index) else {
                break;
            };

            let border_style = if selected == Some(index) {
                Styles::active_border()
            } else {
                Styles::inactive_border()
            };
            let title = truncate_to_width(
                &item.card_title(),
                usize::from(cell.width.saturating_sub(2)),
            );
            let card = Paragraph::new(item.card_body())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Line::from(Span::styled(title, Styles::title())))
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            f.render_widget(card, *cell);
        }
    }
}

impl<R: ItemView> Drop for ListView<R> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<R: ItemView> Navigable for ListView<R> {
    fn navigate_up(&mut self) {
        let count = self.get_item_count();
        if count == 0 {
            return;
        }
        let i = match self.selection.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.selection.select(Some(i));
    }

    fn navigate_down(&mut self) {
        let count = self.get_item_count();
        if count == 0 {
            return;
        }
        let i = match self.selection.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.selection.select(Some(i));
    }

    fn get_selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.selection.select(index);
    }

    fn get_item_count(&self) -> usize {
        self.items().len()
    }
}
