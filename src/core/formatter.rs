//! Recipe formatting business logic.
//!
//! Turns the model's opaque text into a [`RecipeCard`]: a header, an ordered list
//! of body segments no longer than Discord's embed field limit, and a footer.
//! Nothing here knows about Discord's API types; the bot layer renders cards.

use crate::config::GenerationConfig;
use crate::core::request::CookRequest;
use serde::Deserialize;

/// Maximum characters in one embed field value.
pub const FIELD_LIMIT: usize = 1024;

/// Maximum fields in one embed.
pub const MAX_FIELDS_PER_EMBED: usize = 25;

/// Maximum characters in one embed description.
pub const DESCRIPTION_LIMIT: usize = 4096;

/// Maximum characters across title, description, field names, field values and footer of one embed.
pub const EMBED_TOTAL_LIMIT: usize = 6000;

/// Title of the recipe card.
pub const CARD_TITLE: &str = "👨‍🍳 Fridge Chef: Today's Special";

/// Heading of the first body segment.
pub const FIRST_SEGMENT_HEADING: &str = "Cooking Guide";

/// Heading of every following body segment.
pub const CONTINUED_SEGMENT_HEADING: &str = "Cooking Guide (cont.)";

const DESCRIPTION_PREFIX: &str = "Designed for your ingredients: **";
const DESCRIPTION_SUFFIX: &str = "**";

/// Green accent color of the card.
pub const CARD_COLOR: u32 = 0x002E_CC71;

/// What happens to recipe text longer than two segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Keep splitting until all text is delivered.
    #[default]
    Continue,
    /// Stop after two segments and drop the remainder.
    Truncate,
}

impl SplitPolicy {
    const fn max_segments(self) -> Option<usize> {
        match self {
            Self::Continue => None,
            Self::Truncate => Some(2),
        }
    }
}

/// One labelled block of recipe text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSegment {
    /// Field name shown above the body
    pub heading: String,
    /// At most `FIELD_LIMIT` characters of recipe text
    pub body: String,
}

impl MessageSegment {
    fn len(&self) -> usize {
        self.heading.chars().count() + self.body.chars().count()
    }
}

/// Display-ready recipe reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    /// Card title
    pub title: String,
    /// One line referencing the user's ingredients
    pub description: String,
    /// Accent color as `0xRRGGBB`
    pub color: u32,
    /// Recipe text in order
    pub segments: Vec<MessageSegment>,
    /// Attribution line
    pub footer: String,
}

/// Part of a card that fits one embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPage<'a> {
    /// Title, only on the first page
    pub title: Option<&'a str>,
    /// Description, only on the first page
    pub description: Option<&'a str>,
    /// Accent color
    pub color: u32,
    /// Segments on this page
    pub segments: &'a [MessageSegment],
    /// Footer, only on the last page
    pub footer: Option<&'a str>,
}

impl RecipeCard {
    /// Groups segments into pages that each fit one embed.
    ///
    /// The first page carries the title and description, the last one the footer.
    /// A card without segments still yields one page. When the header leaves no
    /// room for the first segment, the first page holds the header alone.
    #[must_use]
    pub fn pages(&self) -> Vec<CardPage<'_>> {
        let header_len = self.title.chars().count() + self.description.chars().count();
        let footer_len = self.footer.chars().count();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        let mut start = 0;
        let mut used = header_len;
        for (idx, segment) in self.segments.iter().enumerate() {
            let full = idx - start >= MAX_FIELDS_PER_EMBED
                || used + segment.len() + footer_len > EMBED_TOTAL_LIMIT;
            if full && (idx > start || used > 0) {
                ranges.push((start, idx));
                start = idx;
                used = 0;
            }
            used += segment.len();
        }
        ranges.push((start, self.segments.len()));

        let last = ranges.len() - 1;
        ranges
            .into_iter()
            .enumerate()
            .map(|(page, (from, to))| CardPage {
                title: (page == 0).then_some(self.title.as_str()),
                description: (page == 0).then_some(self.description.as_str()),
                color: self.color,
                segments: &self.segments[from..to],
                footer: (page == last).then_some(self.footer.as_str()),
            })
            .collect()
    }

    /// All body text joined back together.
    #[cfg(test)]
    pub fn body_text(&self) -> String {
        self.segments.iter().map(|s| s.body.as_str()).collect()
    }
}

/// Splits `text` into chunks of at most `limit` characters.
///
/// Chunks never overlap and never break a character. `max_chunks` caps the
/// number of chunks; anything past the cap is dropped.
#[must_use]
pub fn split_text(text: &str, limit: usize, max_chunks: Option<usize>) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() && max_chunks.is_none_or(|max| chunks.len() < max) {
        let cut = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(byte_idx, _)| byte_idx);
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}

/// Card description naming the ingredients, shortened with an ellipsis to stay
/// within [`DESCRIPTION_LIMIT`].
fn describe_ingredients(ingredients: &str) -> String {
    let budget =
        DESCRIPTION_LIMIT - DESCRIPTION_PREFIX.chars().count() - DESCRIPTION_SUFFIX.chars().count();
    let shown = if ingredients.chars().count() > budget {
        let mut cut: String = ingredients.chars().take(budget - 1).collect();
        cut.push('…');
        cut
    } else {
        ingredients.to_string()
    };
    format!("{DESCRIPTION_PREFIX}{shown}{DESCRIPTION_SUFFIX}")
}

/// Builds recipe cards under a fixed split policy.
#[derive(Debug, Clone)]
pub struct ResponseFormatter {
    policy: SplitPolicy,
    field_limit: usize,
    footer: String,
}

impl ResponseFormatter {
    /// Creates a formatter using Discord's field limit and a footer naming the configured model.
    #[must_use]
    pub fn new(policy: SplitPolicy, generation: &GenerationConfig) -> Self {
        let footer = if generation.google_search {
            format!("Recipe generated by {} with Google Search", generation.model)
        } else {
            format!("Recipe generated by {}", generation.model)
        };
        Self {
            policy,
            field_limit: FIELD_LIMIT,
            footer,
        }
    }

    /// Formats recipe text for the given request.
    #[must_use]
    pub fn format(&self, text: &str, request: &CookRequest) -> RecipeCard {
        let segments = split_text(text, self.field_limit, self.policy.max_segments())
            .into_iter()
            .enumerate()
            .map(|(idx, body)| MessageSegment {
                heading: if idx == 0 {
                    FIRST_SEGMENT_HEADING
                } else {
                    CONTINUED_SEGMENT_HEADING
                }
                .to_string(),
                body: body.to_string(),
            })
            .collect();

        RecipeCard {
            title: CARD_TITLE.to_string(),
            description: describe_ingredients(request.ingredients()),
            color: CARD_COLOR,
            segments,
            footer: self.footer.clone(),
        }
    }
}
