//! `/cook` orchestration.
//!
//! [`CommandHandler`] runs one invocation through
//! Received → Acknowledged → Completed | Failed. It reaches the host platform only
//! through the [`Responder`] trait, so the whole flow can be driven with fakes.

use crate::config::AppConfig;
use crate::core::client::RecipeClient;
use crate::core::formatter::{RecipeCard, ResponseFormatter};
use crate::core::prompt::build_prompt;
use crate::core::request::CookRequest;
use crate::errors::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Prefix of the message sent when an invocation fails.
pub const ERROR_PREFIX: &str = "❌ The kitchen ran into trouble: ";

/// Builds the user-facing failure message.
#[must_use]
pub fn failure_message(reason: impl fmt::Display) -> String {
    format!("{ERROR_PREFIX}{reason}")
}

/// Lifecycle of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    /// The invocation just arrived
    Received,
    /// A placeholder acknowledgement has been sent
    Acknowledged,
    /// The recipe was delivered
    Completed,
    /// The error message was delivered
    Failed,
}

/// What the handler hands to the host platform after acknowledging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookReply {
    /// A formatted recipe
    Recipe(RecipeCard),
    /// Plain text starting with [`ERROR_PREFIX`]
    Failure(String),
}

/// The host platform's side of an invocation.
#[async_trait]
pub trait Responder: Send {
    /// Sends the immediate placeholder that buys time for the follow-up.
    async fn acknowledge(&mut self) -> Result<()>;

    /// Sends the follow-up content.
    async fn deliver(&mut self, reply: CookReply) -> Result<()>;
}

/// Runs `/cook` invocations against a shared client and configuration.
pub struct CommandHandler {
    client: Arc<dyn RecipeClient>,
    config: Arc<AppConfig>,
    formatter: ResponseFormatter,
}

impl fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHandler")
            .field("config", &self.config)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl CommandHandler {
    /// Creates a handler; the formatter is derived from `config`.
    #[must_use]
    pub fn new(client: Arc<dyn RecipeClient>, config: Arc<AppConfig>) -> Self {
        let formatter =
            ResponseFormatter::new(config.formatting.split_policy, &config.generation);
        Self {
            client,
            config,
            formatter,
        }
    }

    /// Handles one invocation and returns the state it ended in.
    ///
    /// Generation failures and a rejected recipe delivery both end in
    /// [`InvocationState::Failed`] with the error message delivered.
    ///
    /// # Errors
    /// Returns an error only when the responder itself fails to acknowledge or
    /// to deliver the error message, leaving nothing more the handler can do.
    #[instrument(skip_all, fields(ingredients = %request.ingredients()))]
    pub async fn handle<R>(&self, request: &CookRequest, responder: &mut R) -> Result<InvocationState>
    where
        R: Responder + ?Sized,
    {
        let mut state = InvocationState::Received;

        responder.acknowledge().await?;
        state = advance(state, InvocationState::Acknowledged);

        let prompt = build_prompt(request);
        let generated = self.client.generate(&prompt, &self.config.generation).await;

        let reason = match generated {
            Ok(text) => {
                let card = self.formatter.format(&text, request);
                info!(segments = card.segments.len(), "Delivering recipe");
                match responder.deliver(CookReply::Recipe(card)).await {
                    Ok(()) => return Ok(advance(state, InvocationState::Completed)),
                    Err(e) => {
                        error!("Failed to deliver recipe: {e}");
                        e.to_string()
                    }
                }
            }
            Err(e) => {
                warn!("Recipe generation failed: {e}");
                e.to_string()
            }
        };

        responder
            .deliver(CookReply::Failure(failure_message(reason)))
            .await?;
        Ok(advance(state, InvocationState::Failed))
    }
}

fn advance(from: InvocationState, to: InvocationState) -> InvocationState {
    tracing::debug!(?from, ?to, "Invocation state change");
    to
}
