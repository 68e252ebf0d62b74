//! CookinCapital AI - deal narration over a hosted LLM.
//!
//! The LLM is consumed as a single capability: send conversation history
//! plus a system prompt, receive streamed text. No numeric computation
//! happens on this path; the narrator formats numbers the valuation engine
//! already produced.

pub mod client;
pub mod error;
pub mod narrator;
pub mod types;

pub use client::{LlmClientConfig, LlmClientTrait, OpenAiCompatibleClient, TextStream};
pub use error::AiError;
pub use narrator::{build_narration_prompt, DealNarrator, NARRATION_SYSTEM_PROMPT};
pub use types::{ChatMessage, ChatRole};
