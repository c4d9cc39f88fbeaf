//! Completion provider implementations

mod mock;
mod openai;

pub use mock::MockProvider;
pub use openai::{OpenAIProvider, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
