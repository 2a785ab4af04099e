//! Delivery of `/cook` replies through a poise context.

use crate::bot::Context;
use crate::core::formatter::CardPage;
use crate::core::{CookReply, Responder};
use crate::errors::Result;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

/// Renders one card page as an embed.
#[must_use]
pub fn page_embed(page: &CardPage<'_>) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::default().color(page.color).fields(
        page.segments
            .iter()
            .map(|segment| (segment.heading.as_str(), segment.body.as_str(), false)),
    );
    if let Some(title) = page.title {
        embed = embed.title(title);
    }
    if let Some(description) = page.description {
        embed = embed.description(description);
    }
    if let Some(footer) = page.footer {
        embed = embed.footer(serenity::CreateEmbedFooter::new(footer));
    }
    embed
}

/// [`Responder`] backed by a slash-command invocation.
///
/// Acknowledging defers the interaction; every later send becomes a follow-up.
pub struct PoiseResponder<'a> {
    ctx: Context<'a>,
}

impl<'a> PoiseResponder<'a> {
    /// Wraps the invocation context.
    #[must_use]
    pub const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Responder for PoiseResponder<'_> {
    async fn acknowledge(&mut self) -> Result<()> {
        self.ctx.defer().await?;
        Ok(())
    }

    async fn deliver(&mut self, reply: CookReply) -> Result<()> {
        match reply {
            CookReply::Recipe(card) => {
                for page in card.pages() {
                    self.ctx
                        .send(poise::CreateReply::default().embed(page_embed(&page)))
                        .await?;
                }
            }
            CookReply::Failure(text) => {
                self.ctx.say(text).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::GenerationConfig;
    use crate::core::{CookRequest, ResponseFormatter, SplitPolicy};

    #[test]
    fn test_page_embed_builds_from_card() {
        let request = CookRequest::new("eggs", None, None, None).unwrap();
        let card = ResponseFormatter::new(SplitPolicy::Continue, &GenerationConfig::default())
            .format("# Omelette", &request);
        let pages = card.pages();
        let embed = serde_json::to_value(page_embed(&pages[0])).unwrap();

        assert_eq!(embed["title"], card.title.as_str());
        assert!(embed["description"].as_str().unwrap().contains("eggs"));
        assert_eq!(embed["fields"][0]["name"], "Cooking Guide");
        assert_eq!(embed["fields"][0]["value"], "# Omelette");
        assert_eq!(embed["fields"][0]["inline"], false);
        assert_eq!(embed["footer"]["text"], card.footer.as_str());
    }
}
