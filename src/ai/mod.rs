//! AI Integration Layer
//!
//! Provides LLM integration for narrative market summaries.

pub mod narrative;
pub mod provider;
pub mod timeout;

pub use narrative::{NarrativeInsightGenerator, build_prompt, fallback_narrative};
pub use provider::{
    LlmProvider, LlmResponse, OpenAiProvider, ResponseMetadata, ResponseTiming, SharedProvider,
    TokenUsage, create_provider,
};
pub use timeout::{TimeoutConfig, with_timeout};
