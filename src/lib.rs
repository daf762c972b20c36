//! Headless blog front-end library.
//!
//! Fetches posts, categories and comments from a hosted GraphQL content API
//! and serves them as server-rendered HTML pages.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod content;
pub mod web;
pub mod widget;
