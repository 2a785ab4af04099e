//! Discord command implementations and the command table.

/// The `/cook` recipe command
pub mod cook;

/// General utility commands
pub mod general;

use crate::bot::BotData;
use crate::errors::Error;

// Export commands
pub use cook::*;
pub use general::*;

/// Every command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![cook(), ping(), help()]
}
