//! Screen modules for the UpSkill TUI

pub mod home;
pub mod not_found;
pub mod users;
pub mod courses;
pub mod skills;

pub use home::HomeScreen;
