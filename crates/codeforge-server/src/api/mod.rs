//! API layer

pub mod rest;

pub use rest::{create_router, AppState};
