use std::{convert::Infallible, fmt, str::FromStr};

use cupping_core::{Rating, SensoryAttribute, SensoryProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Attributes, RecordFields, RecordKind, Stored,
    attributes::coerce_field,
};

/// A persisted coffee review.
pub type ReviewRecord = Stored<Review>;

/// How the coffee was brewed.
///
/// Parsing is forgiving: it ignores case and recognises the labels older
/// entries were saved with. Anything unrecognised is kept verbatim as
/// [`BrewMethod::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BrewMethod {
    /// Paper-filter pour-over (V60, Melitta).
    #[default]
    PourOver,
    Espresso,
    FrenchPress,
    Aeropress,
    Moka,
    Other(String),
}

impl BrewMethod {
    /// Returns the stored identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::PourOver => "pour_over",
            Self::Espresso => "espresso",
            Self::FrenchPress => "french_press",
            Self::Aeropress => "aeropress",
            Self::Moka => "moka",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for BrewMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let method = match normalized.as_str() {
            "pour_over" | "pour over" | "pour-over" | "v60" | "coado" | "coado (v60/melitta)" => {
                Self::PourOver
            }
            "espresso" => Self::Espresso,
            "french_press" | "french press" | "prensa francesa" => Self::FrenchPress,
            "aeropress" => Self::Aeropress,
            "moka" => Self::Moka,
            _ => Self::Other(s.trim().to_owned()),
        };
        Ok(method)
    }
}

impl From<String> for BrewMethod {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(method) => method,
            Err(never) => match never {},
        }
    }
}

impl From<BrewMethod> for String {
    fn from(method: BrewMethod) -> Self {
        method.key().to_owned()
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PourOver => "Pour-over (V60/Melitta)",
            Self::Espresso => "Espresso",
            Self::FrenchPress => "French press",
            Self::Aeropress => "Aeropress",
            Self::Moka => "Moka",
            Self::Other(name) => name,
        })
    }
}

/// How dark the beans were roasted.
///
/// Parsing ignores case and accepts the labels older entries were saved
/// with (`Clara`, `Média`, `Escura`). Unrecognised labels read as
/// [`RoastLevel::Medium`], the form default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoastLevel {
    Light,
    #[default]
    Medium,
    Dark,
}

impl RoastLevel {
    /// Returns the stored identifier.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for RoastLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_lowercase().as_str() {
            "light" | "clara" => Self::Light,
            "medium" | "média" | "media" => Self::Medium,
            "dark" | "escura" => Self::Dark,
            other => {
                tracing::debug!(label = other, "unknown roast level, using medium");
                Self::Medium
            }
        };
        Ok(level)
    }
}

impl From<String> for RoastLevel {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

impl From<RoastLevel> for String {
    fn from(level: RoastLevel) -> Self {
        level.key().to_owned()
    }
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Dark => "Dark",
        })
    }
}

/// The fields of a coffee review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    pub coffee_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub brew_method: BrewMethod,
    #[serde(default)]
    pub roast_level: RoastLevel,
    #[serde(flatten)]
    pub sensory: SensoryProfile,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Review {
    /// Creates a review with default ratings for the named coffee.
    #[must_use]
    pub fn new(coffee_name: impl Into<String>) -> Self {
        Self {
            coffee_name: coffee_name.into(),
            ..Self::default()
        }
    }

    /// Returns `self` with the given brand, keeping other fields unchanged.
    #[must_use]
    pub fn with_brand(self, brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            ..self
        }
    }

    /// Returns `self` with the given origin, keeping other fields unchanged.
    #[must_use]
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..self
        }
    }

    /// Returns `self` with the given brew method, keeping other fields unchanged.
    #[must_use]
    pub fn with_brew_method(self, brew_method: BrewMethod) -> Self {
        Self {
            brew_method,
            ..self
        }
    }

    /// Returns `self` with the given roast level, keeping other fields unchanged.
    #[must_use]
    pub fn with_roast_level(self, roast_level: RoastLevel) -> Self {
        Self {
            roast_level,
            ..self
        }
    }

    /// Returns `self` with the given sensory profile, keeping other fields unchanged.
    #[must_use]
    pub fn with_sensory(self, sensory: SensoryProfile) -> Self {
        Self { sensory, ..self }
    }

    /// Returns `self` with the given rating, keeping other fields unchanged.
    #[must_use]
    pub fn with_rating(self, rating: Rating) -> Self {
        Self { rating, ..self }
    }

    /// Returns `self` with the given notes, keeping other fields unchanged.
    #[must_use]
    pub fn with_notes(self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self
        }
    }
}

impl RecordFields for Review {
    const KIND: RecordKind = RecordKind::Review;
    const SEARCH_FIELDS: &'static [&'static str] = &["coffee_name", "brand", "origin", "notes"];

    fn coerce_attributes(attributes: &mut Attributes) {
        for attr in SensoryAttribute::ALL {
            coerce_field(attributes, attr.key(), |n| Value::from(attr.coerce(Some(n))));
        }
        coerce_field(attributes, "rating", |n| Value::from(Rating::coerce(n).get()));
    }

    fn normalize(&mut self) {
        self.sensory = self.sensory.normalized();
    }
}
