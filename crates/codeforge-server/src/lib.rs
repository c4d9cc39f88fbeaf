//! CodeForge HTTP Server Library
//!
//! REST front end over the generation pipeline: one endpoint per tab, a
//! language list for the dropdown and artifact downloads.

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
