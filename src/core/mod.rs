//! Core business logic - framework-agnostic request, prompt, generation and formatting.

/// Generation API client trait and Gemini implementation
pub mod client;
/// Recipe text to display-ready card
pub mod formatter;
/// Acknowledge-then-respond orchestration of one `/cook` invocation
pub mod handler;
/// Prompt construction
pub mod prompt;
/// `/cook` request model and choice vocabularies
pub mod request;

pub use client::{GeminiClient, RecipeClient};
pub use formatter::{MessageSegment, RecipeCard, ResponseFormatter, SplitPolicy};
pub use handler::{CommandHandler, CookReply, InvocationState, Responder};
pub use request::{CookRequest, CookingMethod, CookingStyle};
