use serde::{Deserialize, Serialize};

use crate::{RecordFields, RecordKind, Stored};

/// A coffee the user wants to try.
pub type WishlistItem = Stored<WishlistEntry>;

/// The fields of a wishlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub coffee_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub where_to_buy: String,
    #[serde(default)]
    pub notes: String,
}

impl WishlistEntry {
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

    /// Returns `self` with the given shop, keeping other fields unchanged.
    #[must_use]
    pub fn with_where_to_buy(self, where_to_buy: impl Into<String>) -> Self {
        Self {
            where_to_buy: where_to_buy.into(),
            ..self
        }
    }
}

impl RecordFields for WishlistEntry {
    const KIND: RecordKind = RecordKind::Wishlist;
    const SEARCH_FIELDS: &'static [&'static str] =
        &["coffee_name", "brand", "where_to_buy", "notes"];
}
