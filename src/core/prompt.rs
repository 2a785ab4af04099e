//! Prompt construction for the generation API.
//!
//! The persona and output template are fixed; only the four request labels are
//! substituted, unescaped, into the text.

use crate::core::request::CookRequest;

/// Heading line for the dish title.
pub const TITLE_MARKER: &str = "# ";
/// Line carrying the estimated cooking time.
pub const TIME_MARKER: &str = "⏱ Cooking time:";
/// Line carrying the difficulty tier.
pub const DIFFICULTY_MARKER: &str = "📊 Difficulty:";
/// Line echoing the cooking method.
pub const METHOD_MARKER: &str = "📍 Cooking method:";
/// Section heading for the ingredient list.
pub const INGREDIENTS_MARKER: &str = "## 🛒 Ingredients";
/// Section heading for the numbered steps.
pub const STEPS_MARKER: &str = "## 👨‍🍳 Steps";
/// Line carrying the closing tip.
pub const TIP_MARKER: &str = "💡 Chef's secret:";

/// Every section the model is told to produce, in template order.
pub const SECTION_MARKERS: [&str; 7] = [
    TITLE_MARKER,
    TIME_MARKER,
    DIFFICULTY_MARKER,
    METHOD_MARKER,
    INGREDIENTS_MARKER,
    STEPS_MARKER,
    TIP_MARKER,
];

/// Difficulty tiers the model must pick from.
pub const DIFFICULTY_TIERS: [&str; 3] = ["Easy", "Medium", "Chef's Challenge"];

/// Builds the full prompt for one request.
#[must_use]
pub fn build_prompt(request: &CookRequest) -> String {
    let ingredients = request.ingredients();
    let style = request.style_label();
    let method = request.method_label();
    let dietary = request.dietary_label();
    let tiers = DIFFICULTY_TIERS.join("/");

    format!(
        "You are a professional five-star chef known as \"Fridge Rescuer\".\n\
         Design one recipe based on the following conditions:\n\
         - Ingredients: {ingredients}\n\
         - Cuisine style: {style}\n\
         - Cooking method: {method}\n\
         - Dietary restrictions: {dietary}\n\
         \n\
         Strictly follow this output format:\n\
         {TITLE_MARKER}[Dish name]\n\
         {TIME_MARKER} [Time]\n\
         {DIFFICULTY_MARKER} [{tiers}]\n\
         {METHOD_MARKER} {method}\n\
         \n\
         {INGREDIENTS_MARKER}\n\
         [List the ingredients]\n\
         \n\
         {STEPS_MARKER}\n\
         1. [Step 1]\n\
         2. [Step 2]...\n\
         \n\
         {TIP_MARKER} [One professional tip]\n"
    )
}
