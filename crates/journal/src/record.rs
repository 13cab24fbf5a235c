use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::Attributes;

/// Identifier assigned by the store when a record is created.
pub type RecordId = u64;

/// The kinds of record the journal keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Review,
    Inventory,
    Wishlist,
}

impl RecordKind {
    /// Returns the backend table holding records of this kind.
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Review => "reviews",
            Self::Inventory => "inventory",
            Self::Wishlist => "wishlist",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Review => "review",
            Self::Inventory => "inventory item",
            Self::Wishlist => "wishlist entry",
        })
    }
}

/// The user-editable part of a record.
///
/// Stores assign the id and creation time; everything else lives in a type
/// implementing this trait.
pub trait RecordFields: Serialize + DeserializeOwned + Clone + fmt::Debug + 'static {
    const KIND: RecordKind;

    /// Text fields matched by [`Filter::search`](crate::Filter::search).
    const SEARCH_FIELDS: &'static [&'static str];

    /// Converts numeric fields of a raw attribute bag in place.
    ///
    /// Called before a bag is deserialized, so numbers typed into text inputs
    /// (`"4.5"`) are accepted. Unparsable numeric fields are removed, which
    /// leaves them at their default on create and unchanged on update.
    fn coerce_attributes(_attributes: &mut Attributes) {}

    /// Brings typed fields onto their conventional scales.
    fn normalize(&mut self) {}
}

/// A record as persisted: store-assigned metadata plus its fields.
///
/// Serializes flat, so a review's `coffee_name` sits next to its `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: RecordId,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub fields: T,
}

/// Field names owned by the store rather than the record's fields.
pub(crate) const METADATA_FIELDS: [&str; 2] = ["id", "created_at"];
