//! Shared test utilities for Fridge Chef.
//!
//! Fakes for the two seams of the command handler: the generation client and
//! the host platform responder. Both can share a [`CallLog`] so tests can assert
//! the order in which the handler talks to them.

#![allow(clippy::unwrap_used)]

use crate::{
    config::GenerationConfig,
    core::{
        client::RecipeClient,
        handler::{CookReply, Responder},
        request::CookRequest,
    },
    errors::{Error, Result},
};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::{Arc, Mutex};

/// Ordered record of calls made across fakes.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    /// Appends an event.
    pub fn record(&self, event: &'static str) {
        self.0.lock().unwrap().push(event);
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

/// Creates a request with sensible defaults.
///
/// # Defaults
/// * `ingredients`: "beef, onion"
/// * `style`, `method`, `dietary`: unset
pub fn sample_request() -> CookRequest {
    CookRequest::new("beef, onion", None, None, None).unwrap()
}

/// A [`RecipeClient`] returning a fixed outcome and remembering every prompt.
#[derive(Debug, Clone)]
pub struct FakeRecipeClient {
    outcome: std::result::Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
    log: CallLog,
}

impl FakeRecipeClient {
    /// Always succeeds with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            prompts: Arc::default(),
            log: CallLog::default(),
        }
    }

    /// Always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            prompts: Arc::default(),
            log: CallLog::default(),
        }
    }

    /// Records `generate` calls into a shared log.
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    /// Handle on the prompts received so far.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl RecipeClient for FakeRecipeClient {
    async fn generate(&self, prompt: &str, _config: &GenerationConfig) -> Result<String> {
        self.log.record("generate");
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcome.clone().map_err(Error::generation)
    }
}

/// A [`Responder`] that keeps everything it is asked to send.
#[derive(Debug)]
pub struct RecordingResponder {
    log: CallLog,
    delivered: Vec<CookReply>,
    fail_acknowledge: bool,
    reject_recipes: bool,
}

impl RecordingResponder {
    /// Records into `log`.
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            delivered: Vec::new(),
            fail_acknowledge: false,
            reject_recipes: false,
        }
    }

    /// Makes `acknowledge` fail.
    pub fn failing_acknowledge(mut self) -> Self {
        self.fail_acknowledge = true;
        self
    }

    /// Makes delivering a recipe card fail while text still goes through.
    pub fn rejecting_recipes(mut self) -> Self {
        self.reject_recipes = true;
        self
    }

    /// Replies delivered so far.
    pub fn delivered(&self) -> &[CookReply] {
        &self.delivered
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn acknowledge(&mut self) -> Result<()> {
        self.log.record("acknowledge");
        if self.fail_acknowledge {
            return Err(serenity::Error::Other("Unknown interaction").into());
        }
        Ok(())
    }

    async fn deliver(&mut self, reply: CookReply) -> Result<()> {
        self.log.record("deliver");
        if self.reject_recipes && matches!(reply, CookReply::Recipe(_)) {
            return Err(serenity::Error::Other("Invalid Form Body").into());
        }
        self.delivered.push(reply);
        Ok(())
    }
}
