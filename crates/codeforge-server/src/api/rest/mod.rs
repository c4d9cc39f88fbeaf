//! REST API implementation
//!
//! - types: request/response type definitions
//! - extractors: JSON extractor with uniform error bodies
//! - handlers: API endpoint handlers
//! - router: router creation and configuration
//! - tests: unit tests for all components

mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{
    AppState, GenerateCodePayload, GenerateFromCodePayload, GenerationResponse, HealthResponse,
    LanguagesResponse,
};
