use std::collections::BTreeMap;

use jiff::Timestamp;
use serde_json::Value;

use crate::{
    Attributes, BackendConfig, BlobStore, JournalError, Query, RecordFields, RecordId,
    RecordStore, Result, Stored, record::METADATA_FIELDS,
};

/// A [`RecordStore`] that keeps records in memory.
///
/// Ids start at 1 and are never reused, even after a delete.
///
/// # Example
///
/// ```
/// use cupping_journal::{MemoryStore, Query, RecordStore, Review};
///
/// let mut reviews = MemoryStore::<Review>::new();
/// let created = reviews.create(Review::new("Catuaí Vermelho")).unwrap();
/// assert_eq!(created.id, 1);
/// assert_eq!(reviews.list(&Query::new()).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: BTreeMap<RecordId, Stored<T>>,
    next_id: RecordId,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: RecordFields> MemoryStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record with an explicit creation time.
    ///
    /// Used when importing records whose timestamps are already known.
    pub fn create_at(&mut self, mut fields: T, created_at: Timestamp) -> Stored<T> {
        fields.normalize();
        let id = self.next_id;
        self.next_id += 1;

        let record = Stored {
            id,
            created_at,
            fields,
        };
        self.records.insert(id, record.clone());
        tracing::debug!(kind = %T::KIND, id, "created record");
        record
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn not_found(id: RecordId) -> JournalError {
        JournalError::NotFound { kind: T::KIND, id }
    }
}

impl<T: RecordFields> RecordStore<T> for MemoryStore<T> {
    fn list(&self, query: &Query) -> Result<Vec<Stored<T>>> {
        query.apply(self.records.values())
    }

    fn get(&self, id: RecordId) -> Result<Stored<T>> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn create(&mut self, fields: T) -> Result<Stored<T>> {
        Ok(self.create_at(fields, Timestamp::now()))
    }

    fn update(&mut self, id: RecordId, mut changes: Attributes) -> Result<Stored<T>> {
        if let Some(field) = METADATA_FIELDS
            .iter()
            .find(|field| changes.contains_key(**field))
        {
            return Err(JournalError::ImmutableField {
                field: (*field).to_owned(),
            });
        }

        let record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| Self::not_found(id))?;

        T::coerce_attributes(&mut changes);

        let invalid = |source| JournalError::InvalidRecord {
            kind: T::KIND,
            source,
        };
        let mut merged = match serde_json::to_value(&record.fields).map_err(invalid)? {
            Value::Object(fields) => fields,
            _ => Attributes::new(),
        };
        merged.extend(changes);

        let mut fields: T = serde_json::from_value(Value::Object(merged)).map_err(invalid)?;
        fields.normalize();
        record.fields = fields;

        tracing::debug!(kind = %T::KIND, id, "updated record");
        Ok(record.clone())
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        if self.records.remove(&id).is_none() {
            return Err(Self::not_found(id));
        }
        tracing::debug!(kind = %T::KIND, id, "deleted record");
        Ok(())
    }
}

/// A [`BlobStore`] that keeps objects in memory.
///
/// Public URLs follow the layout of the configured backend, so links built
/// here match the ones the hosted bucket would return.
#[derive(Debug, Clone)]
pub struct MemoryBlobStore {
    config: BackendConfig,
    objects: BTreeMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            objects: BTreeMap::new(),
        }
    }

    /// Returns the bytes stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.objects.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn upload(&mut self, name: &str, bytes: &[u8]) -> Result<String> {
        if name.trim().is_empty() || name.contains('/') {
            return Err(JournalError::InvalidBlobName(name.to_owned()));
        }
        if self.objects.contains_key(name) {
            return Err(JournalError::Conflict(name.to_owned()));
        }

        self.objects.insert(name.to_owned(), bytes.to_vec());
        tracing::debug!(name, bytes = bytes.len(), "uploaded blob");
        Ok(self.config.public_object_url(name))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::{Filter, OrderBy, PantryEntry, Review, WishlistEntry};

    fn bag(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn at(seconds: i64) -> Timestamp {
        Timestamp::from_second(1_700_000_000 + seconds).unwrap()
    }

    fn seeded() -> MemoryStore<Review> {
        let mut store = MemoryStore::new();
        store.create_at(Review::new("Bourbon Amarelo").with_origin("Sul de Minas"), at(0));
        store.create_at(Review::new("Catuaí").with_origin("Cerrado Mineiro"), at(10));
        store.create_at(Review::new("Geisha").with_brand("Cerrado Coffees"), at(20));
        store
    }

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut store = seeded();
        store.delete(3).unwrap();
        let created = store.create(Review::new("Arara")).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn list_defaults_to_newest_first() {
        let names: Vec<_> = seeded()
            .list(&Query::new())
            .unwrap()
            .into_iter()
            .map(|r| r.fields.coffee_name)
            .collect();
        assert_eq!(names, ["Geisha", "Catuaí", "Bourbon Amarelo"]);
    }

    #[test]
    fn equal_timestamps_break_ties_by_id() {
        let mut store = MemoryStore::new();
        store.create_at(WishlistEntry::new("a"), at(0));
        store.create_at(WishlistEntry::new("b"), at(0));

        let newest = store.list(&Query::new()).unwrap();
        assert_eq!(newest[0].id, 2);

        let oldest = store
            .list(&Query::new().order_by(OrderBy::ascending("created_at")))
            .unwrap();
        assert_eq!(oldest[0].id, 1);
    }

    #[test]
    fn search_spans_text_fields() {
        let store = seeded();
        let hits = store
            .list(&Query::new().filter(Filter::search("CERRADO")))
            .unwrap();
        let ids: Vec<_> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 2]);
    }

    #[test]
    fn eq_filter_and_limit() {
        let mut store = seeded();
        store.update(1, bag(json!({ "rating": 3 }))).unwrap();

        let rated_three = store
            .list(&Query::new().filter(Filter::eq("rating", 3)))
            .unwrap();
        assert_eq!(rated_three.len(), 1);
        assert_eq!(rated_three[0].id, 1);

        let limited = store.list(&Query::new().limit(2)).unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn order_by_field() {
        let mut store = MemoryStore::new();
        store.create(PantryEntry::new("a", 100.0)).unwrap();
        store.create(PantryEntry::new("b", 500.0)).unwrap();
        store.create(PantryEntry::new("c", 250.0)).unwrap();

        let grams: Vec<_> = store
            .list(&Query::new().order_by(OrderBy::descending("grams_remaining")))
            .unwrap()
            .into_iter()
            .map(|r| r.fields.grams_remaining)
            .collect();
        assert_eq!(grams, [500.0, 250.0, 100.0]);
    }

    #[test]
    fn update_merges_and_coerces() {
        let mut store = seeded();
        let updated = store
            .update(2, bag(json!({ "acidity": "4.3", "body": "thick", "notes": "citrus" })))
            .unwrap();

        assert_eq!(updated.fields.sensory.acidity, 4.5);
        assert_eq!(updated.fields.sensory.body, 3.0);
        assert_eq!(updated.fields.notes, "citrus");
        assert_eq!(updated.fields.origin, "Cerrado Mineiro");
        assert_eq!(store.get(2).unwrap(), updated);
    }

    #[test]
    fn update_rejects_metadata_fields() {
        let mut store = seeded();
        let before = store.get(1).unwrap();
        let err = store.update(1, bag(json!({ "id": 9 }))).unwrap_err();
        assert!(matches!(err, JournalError::ImmutableField { ref field } if field == "id"));
        let err = store
            .update(1, bag(json!({ "created_at": "2020-01-01T00:00:00Z" })))
            .unwrap_err();
        assert!(matches!(err, JournalError::ImmutableField { .. }));
        assert_eq!(store.get(1).unwrap(), before);
    }

    #[test]
    fn update_rejects_invalid_shapes() {
        let mut store = seeded();
        let err = store.update(1, bag(json!({ "coffee_name": 42 }))).unwrap_err();
        assert!(matches!(err, JournalError::InvalidRecord { .. }));
        assert_eq!(store.get(1).unwrap().fields.coffee_name, "Bourbon Amarelo");
    }

    #[test]
    fn missing_records_are_not_found() {
        let mut store = seeded();
        assert!(matches!(store.get(42), Err(JournalError::NotFound { id: 42, .. })));
        assert!(matches!(
            store.update(42, Attributes::new()),
            Err(JournalError::NotFound { .. })
        ));
        assert!(matches!(store.delete(42), Err(JournalError::NotFound { .. })));
    }

    #[test]
    fn create_from_attributes_coerces_form_input() {
        let mut store = MemoryStore::<Review>::new();
        let created = store
            .create_from_attributes(bag(json!({
                "coffee_name": "Mundo Novo",
                "brew_method": "Coado (V60/Melitta)",
                "roast_level": "Clara",
                "sweetness": "4",
                "bitterness": "",
                "rating": "2",
            })))
            .unwrap();

        assert_eq!(created.fields.brew_method, crate::BrewMethod::PourOver);
        assert_eq!(created.fields.roast_level, crate::RoastLevel::Light);
        assert_eq!(created.fields.sensory.sweetness, 4.0);
        assert_eq!(created.fields.sensory.bitterness, 2.0);
        assert_eq!(created.fields.rating.get(), 2);
    }

    #[test]
    fn create_from_attributes_accepts_legacy_form_defaults() {
        let mut store = MemoryStore::<Review>::new();
        let created = store
            .create_from_attributes(bag(json!({
                "coffee_name": "Catuaí Amarelo",
                "brew_method": "Coado",
                "roast_level": "Média",
                "acidity": 3,
                "body": 3,
                "rating": 5,
                "notes": "",
            })))
            .unwrap();
        assert_eq!(created.fields.roast_level, crate::RoastLevel::Medium);

        let updated = store
            .update(created.id, bag(json!({ "roast_level": "Escura" })))
            .unwrap();
        assert_eq!(updated.fields.roast_level, crate::RoastLevel::Dark);
    }

    #[test]
    fn create_from_attributes_requires_a_name() {
        let mut store = MemoryStore::<WishlistEntry>::new();
        let err = store
            .create_from_attributes(bag(json!({ "brand": "Orfeu" })))
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidRecord { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn blob_upload_returns_public_url() {
        let config =
            BackendConfig::new("https://demo.example.com", "anon", "coffee-photos").unwrap();
        let mut blobs = MemoryBlobStore::new(config);

        let url = blobs.upload("1_cup.jpg", b"jpeg").unwrap();
        assert_eq!(
            url,
            "https://demo.example.com/storage/v1/object/public/coffee-photos/1_cup.jpg"
        );
        assert_eq!(blobs.get("1_cup.jpg"), Some(&b"jpeg"[..]));

        assert!(matches!(
            blobs.upload("1_cup.jpg", b"again"),
            Err(JournalError::Conflict(_))
        ));
        assert!(matches!(
            blobs.upload("a/b.jpg", b""),
            Err(JournalError::InvalidBlobName(_))
        ));
        assert!(matches!(
            blobs.upload("  ", b""),
            Err(JournalError::InvalidBlobName(_))
        ));
        assert_eq!(blobs.len(), 1);
    }
}
