//! Reusable UI components for the UpSkill TUI

pub mod list_view;
pub mod nav_bar;

pub use list_view::{FetchState, ListView};
