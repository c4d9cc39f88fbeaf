//! CodeForge completion clients
//!
//! The generation pipeline talks to the model through the
//! [`CompletionClient`] trait only. This crate provides:
//! - [`OpenAIProvider`]: OpenAI-compatible chat-completions over HTTP
//! - [`MockProvider`]: scripted responses for tests
//!
//! One call per invocation. Nothing here retries or caches.

pub use client::{CompletionClient, CompletionRequest, CompletionResponse};
pub use error::{LLMError, Result};
pub use provider::{MockProvider, OpenAIProvider};

pub mod client;
pub mod error;
pub mod provider;
