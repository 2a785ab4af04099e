//! General Discord commands - ping and help.
//! These commands don't touch the generation API and only provide basic bot
//! functionality and user assistance.

use crate::core::{CookingMethod, CookingStyle};

/// Builds the help message, listing the `/cook` choices from the core vocabularies.
#[must_use]
pub fn help_text() -> String {
    let styles: Vec<&str> = CookingStyle::ALL.iter().map(|s| s.label()).collect();
    let methods: Vec<&str> = CookingMethod::ALL.iter().map(|m| m.label()).collect();

    format!(
        "**Fridge Chef Help**\n\
         Tell me what's in your fridge and I'll design a dish around it.\n\n\
         **Recipe Command**\n\
         • `/cook <ingredients> [style] [method] [dietary]` - Designs a recipe.\n\
         \u{a0}\u{a0}◦ `style`: {}\n\
         \u{a0}\u{a0}◦ `method`: {}\n\
         \u{a0}\u{a0}◦ `dietary`: anything to avoid, e.g. `no spicy food`\n\n\
         **Utility Commands**\n\
         • `/ping` - Checks if the bot is responsive.\n\
         • `/help` - Shows this help message.",
        styles.join(", "),
        methods.join(", "),
    )
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about the recipe command.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(super::help_text()).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_choice() {
        let help = help_text();
        for style in CookingStyle::ALL {
            assert!(help.contains(style.label()));
        }
        for method in CookingMethod::ALL {
            assert!(help.contains(method.label()));
        }
        assert!(help.contains("`/cook <ingredients>"));
    }
}
