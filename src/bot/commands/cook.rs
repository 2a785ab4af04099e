//! The `/cook` command - turns whatever is in the fridge into a recipe.
//!
//! Arguments are collected into a `CookRequest` and handed to the core
//! `CommandHandler`; this module only maps Discord choices onto core types.

use crate::core::{CookingMethod, CookingStyle};

/// Cuisine style choices shown in the Discord picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StyleChoice {
    /// Chinese
    Chinese,
    /// Japanese
    Japanese,
    /// Korean
    Korean,
    /// Thai
    Thai,
    /// Western
    Western,
}

/// Cooking method choices shown in the Discord picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum MethodChoice {
    /// Steamed
    #[name = "steamed"]
    Steamed,
    /// Fried
    #[name = "fried"]
    Fried,
    /// Stir-fried
    #[name = "stir-fried"]
    StirFried,
    /// Grilled
    #[name = "grilled"]
    Grilled,
    /// Boiled or stewed
    #[name = "boiled/stewed"]
    BoiledStewed,
    /// Cold-dressed
    #[name = "cold-dressed"]
    ColdDressed,
    /// Air-fried
    #[name = "air-fried"]
    AirFried,
}

impl From<StyleChoice> for CookingStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Chinese => Self::Chinese,
            StyleChoice::Japanese => Self::Japanese,
            StyleChoice::Korean => Self::Korean,
            StyleChoice::Thai => Self::Thai,
            StyleChoice::Western => Self::Western,
        }
    }
}

impl From<MethodChoice> for CookingMethod {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Steamed => Self::Steamed,
            MethodChoice::Fried => Self::Fried,
            MethodChoice::StirFried => Self::StirFried,
            MethodChoice::Grilled => Self::Grilled,
            MethodChoice::BoiledStewed => Self::BoiledStewed,
            MethodChoice::ColdDressed => Self::ColdDressed,
            MethodChoice::AirFried => Self::AirFried,
        }
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{MethodChoice, StyleChoice};
    use crate::{
        bot::{BotData, reply::PoiseResponder},
        core::CookRequest,
        errors::{Error, Result},
    };
    use tracing::info;

    /// Fridge Chef designs a dish from your ingredients and preferred style.
    ///
    /// The interaction is deferred straight away because generation can take
    /// longer than Discord's initial response window.
    #[poise::command(slash_command)]
    pub async fn cook(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Ingredients you have on hand (e.g. beef, onion)"]
        #[min_length = 1]
        ingredients: String,
        #[description = "Preferred cuisine style"] style: Option<StyleChoice>,
        #[description = "Preferred cooking method"] method: Option<MethodChoice>,
        #[description = "Dietary restrictions or allergies (e.g. no spicy food)"]
        dietary: Option<String>,
    ) -> Result<()> {
        let request = CookRequest::new(
            ingredients,
            style.map(Into::into),
            method.map(Into::into),
            dietary,
        )?;

        let mut responder = PoiseResponder::new(ctx);
        let state = ctx.data().handler.handle(&request, &mut responder).await?;
        info!(user = %ctx.author().name, ?state, "/cook finished");
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
