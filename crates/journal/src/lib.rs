//! Journal records and storage contracts for the Cupping coffee journal.
//!
//! Persistence and file storage belong to a hosted backend. This crate pins
//! down what the journal needs from it and provides in-memory stand-ins:
//!
//! - [`ReviewRecord`], [`InventoryItem`], [`WishlistItem`]: the three record
//!   kinds, each a [`Stored`] wrapper around its user-editable fields
//! - [`RecordStore`] and [`BlobStore`]: the persistence and blob-storage
//!   contracts
//! - [`Query`] and [`Filter`]: ordering, equality, and substring search
//! - [`MemoryStore`] and [`MemoryBlobStore`]: in-memory implementations
//! - [`BackendConfig`]: backend location and credentials from the
//!   environment or a TOML file
//! - [`Journal`]: the three stores and blob storage behind one facade, with
//!   radar charting for reviews

pub mod attributes;
mod config;
mod error;
mod journal;
mod memory;
mod pantry;
mod ports;
mod query;
mod record;
mod review;
mod wishlist;

pub use attributes::Attributes;
pub use config::{ANON_KEY_VAR, BUCKET_VAR, BackendConfig, DEFAULT_BUCKET, URL_VAR};
pub use error::{JournalError, Result};
pub use journal::{Journal, chart_attributes};
pub use memory::{MemoryBlobStore, MemoryStore};
pub use pantry::{InventoryItem, PantryEntry};
pub use ports::{BlobStore, RecordStore};
pub use query::{Filter, OrderBy, Query};
pub use record::{RecordFields, RecordId, RecordKind, Stored};
pub use review::{BrewMethod, Review, ReviewRecord, RoastLevel};
pub use wishlist::{WishlistEntry, WishlistItem};
