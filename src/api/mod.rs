//! UpSkill API access
//!
//! This module wraps the three read-only collection endpoints of the UpSkill
//! backend behind the [`ApiClient`] trait, so screens can be driven by the
//! real HTTP client or by an in-process double.

pub mod client;
pub mod errors;

pub use client::{fetch_collection, ApiClient, HttpClient};
pub use errors::ApiError;
