//! Hackathon dashboard library.
//!
//! A service that aggregates recent social media mentions of the event's
//! sponsors and serves a live dashboard: a mention slideshow next to the
//! event schedule with the current session highlighted.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod mentions;
pub mod twitter;
pub mod web;
