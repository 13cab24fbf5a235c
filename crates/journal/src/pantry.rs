use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Attributes, RecordFields, RecordKind, Stored, attributes::coerce_field};

/// A coffee in the pantry.
pub type InventoryItem = Stored<PantryEntry>;

/// The fields of a pantry entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PantryEntry {
    pub coffee_name: String,
    #[serde(default)]
    pub brand: String,
    /// Beans left in the bag, in grams. Never negative.
    #[serde(default)]
    pub grams_remaining: f64,
    #[serde(default)]
    pub roasted_on: Option<Date>,
    #[serde(default)]
    pub notes: String,
}

impl PantryEntry {
    #[must_use]
    pub fn new(coffee_name: impl Into<String>, grams_remaining: f64) -> Self {
        Self {
            coffee_name: coffee_name.into(),
            grams_remaining,
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

    /// Returns `self` with the given roast date, keeping other fields unchanged.
    #[must_use]
    pub fn with_roasted_on(self, roasted_on: Date) -> Self {
        Self {
            roasted_on: Some(roasted_on),
            ..self
        }
    }

    /// Returns the number of whole days between roasting and `today`.
    ///
    /// Returns `None` if the roast date is unknown or lies after `today`.
    #[must_use]
    pub fn days_since_roast(&self, today: Date) -> Option<i32> {
        let roasted_on = self.roasted_on?;
        if roasted_on > today {
            return None;
        }
        let span = roasted_on.until(today).ok()?;
        Some(span.get_days())
    }
}

fn clamp_grams(grams: f64) -> f64 {
    grams.max(0.0)
}

impl RecordFields for PantryEntry {
    const KIND: RecordKind = RecordKind::Inventory;
    const SEARCH_FIELDS: &'static [&'static str] = &["coffee_name", "brand", "notes"];

    fn coerce_attributes(attributes: &mut Attributes) {
        coerce_field(attributes, "grams_remaining", |n| Value::from(clamp_grams(n)));
    }

    fn normalize(&mut self) {
        self.grams_remaining = if self.grams_remaining.is_finite() {
            clamp_grams(self.grams_remaining)
        } else {
            0.0
        };
    }
}
