//! The `/cook` request model.
//!
//! A [`CookRequest`] is built once per invocation from the command arguments and
//! dropped after the reply has been delivered.

use crate::errors::{Error, Result};

/// Label used for a style or method the user left open.
pub const UNRESTRICTED: &str = "unrestricted";

/// Label used when the user gave no dietary restrictions.
pub const NO_RESTRICTIONS: &str = "none";

/// Cuisine styles offered as fixed choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookingStyle {
    /// Chinese cuisine
    Chinese,
    /// Japanese cuisine
    Japanese,
    /// Korean cuisine
    Korean,
    /// Thai cuisine
    Thai,
    /// Western cuisine
    Western,
}

impl CookingStyle {
    /// Every style, in the order the choices are presented.
    pub const ALL: [Self; 5] = [
        Self::Chinese,
        Self::Japanese,
        Self::Korean,
        Self::Thai,
        Self::Western,
    ];

    /// Label substituted into the prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Thai => "Thai",
            Self::Western => "Western",
        }
    }
}

/// Cooking methods offered as fixed choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookingMethod {
    /// Steamed
    Steamed,
    /// Deep-fried
    Fried,
    /// Stir-fried
    StirFried,
    /// Grilled or roasted
    Grilled,
    /// Boiled or stewed
    BoiledStewed,
    /// Served cold with dressing
    ColdDressed,
    /// Air-fried
    AirFried,
}

impl CookingMethod {
    /// Every method, in the order the choices are presented.
    pub const ALL: [Self; 7] = [
        Self::Steamed,
        Self::Fried,
        Self::StirFried,
        Self::Grilled,
        Self::BoiledStewed,
        Self::ColdDressed,
        Self::AirFried,
    ];

    /// Label substituted into the prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steamed => "steamed",
            Self::Fried => "fried",
            Self::StirFried => "stir-fried",
            Self::Grilled => "grilled",
            Self::BoiledStewed => "boiled/stewed",
            Self::ColdDressed => "cold-dressed",
            Self::AirFried => "air-fried",
        }
    }
}

/// One `/cook` invocation's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookRequest {
    ingredients: String,
    style: Option<CookingStyle>,
    method: Option<CookingMethod>,
    dietary: Option<String>,
}

impl CookRequest {
    /// Builds a request, rejecting blank ingredients.
    ///
    /// Free-text fields are kept as typed apart from surrounding whitespace; a
    /// blank `dietary` counts as absent.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if `ingredients` is empty after trimming.
    pub fn new(
        ingredients: impl Into<String>,
        style: Option<CookingStyle>,
        method: Option<CookingMethod>,
        dietary: Option<String>,
    ) -> Result<Self> {
        let ingredients = ingredients.into().trim().to_string();
        if ingredients.is_empty() {
            return Err(Error::InvalidInput {
                message: "ingredients must not be empty".to_string(),
            });
        }

        let dietary = dietary
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            ingredients,
            style,
            method,
            dietary,
        })
    }

    /// The ingredients exactly as the user listed them.
    #[must_use]
    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    /// Style label, `"unrestricted"` when none was chosen.
    #[must_use]
    pub fn style_label(&self) -> &str {
        self.style.map_or(UNRESTRICTED, CookingStyle::label)
    }

    /// Method label, `"unrestricted"` when none was chosen.
    #[must_use]
    pub fn method_label(&self) -> &str {
        self.method.map_or(UNRESTRICTED, CookingMethod::label)
    }

    /// Dietary restrictions, `"none"` when none were given.
    #[must_use]
    pub fn dietary_label(&self) -> &str {
        self.dietary.as_deref().unwrap_or(NO_RESTRICTIONS)
    }
}
