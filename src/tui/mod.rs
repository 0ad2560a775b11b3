//! UpSkill Terminal User Interface (TUI)
//!
//! A navigation shell with four routes: a static home screen and three
//! collection screens, each fetching its records when it is shown.

pub mod app;
pub mod components;
pub mod routes;
pub mod screens;
pub mod traits;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use routes::Route;
