//! Terminal client for the UpSkill users, courses, and skills API

pub mod api;
pub mod config;
pub mod models;
pub mod tui;
