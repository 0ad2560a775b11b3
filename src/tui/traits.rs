//! Core traits for the UpSkill TUI
//!
//! Screens share list navigation through [`Navigable`]; collection screens
//! describe how each record looks through [`ItemView`], which is the only
//! resource-specific piece a [`ListView`](super::components::ListView) needs.

use ratatui::text::Line;

use crate::models::Resource;
use crate::tui::routes::Route;

/// Actions that can be returned from screen event handling
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Navigate to a different route
    NavigateTo(Route),
    /// No action taken
    None,
}

/// How a collection screen arranges its records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLayout {
    /// One entry per row
    List,
    /// Bordered cards, `per_row` to a row
    Cards { per_row: usize },
}

/// Per-resource presentation used by the generic list view
pub trait ItemView: Resource {
    const LAYOUT: ItemLayout;

    /// Screen heading
    fn heading() -> &'static str;

    /// Lines of a list entry
    fn list_lines(&self) -> Vec<Line<'static>>;

    /// Card title, only used with [`ItemLayout::Cards`]
    fn card_title(&self) -> String {
        String::new()
    }

    /// Card body, only used with [`ItemLayout::Cards`]
    fn card_body(&self) -> String {
        String::new()
    }
}

/// Trait for screens with navigable lists
pub trait Navigable {
    /// Move selection up
    fn navigate_up(&mut self);

    /// Move selection down
    fn navigate_down(&mut self);

    /// Get currently selected index
    fn get_selected_index(&self) -> Option<usize>;

    /// Set selected index
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Get total number of items
    fn get_item_count(&self) -> usize;

    /// Navigate to first item
    fn navigate_to_first(&mut self) {
        if self.get_item_count() > 0 {
            self.set_selected_index(Some(0));
        }
    }

    /// Navigate to last item
    fn navigate_to_last(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            self.set_selected_index(Some(count - 1));
        }
    }
}
