use cupping_radar::{RadarGeometry, project_profile};
use jiff::Timestamp;
use serde_json::Value;

use crate::{
    Attributes, BackendConfig, BlobStore, Filter, JournalError, MemoryBlobStore, MemoryStore,
    PantryEntry, Query, RecordId, RecordStore, Result, Review, ReviewRecord, WishlistEntry,
    attributes::sensory_profile,
};

/// The journal's stores and photo storage behind one handle.
///
/// Each collaborator is a trait object, so a hosted backend and the
/// in-memory stand-ins are interchangeable.
pub struct Journal {
    reviews: Box<dyn RecordStore<Review>>,
    inventory: Box<dyn RecordStore<PantryEntry>>,
    wishlist: Box<dyn RecordStore<WishlistEntry>>,
    photos: Box<dyn BlobStore>,
}

impl Journal {
    pub fn new<R, I, W, B>(reviews: R, inventory: I, wishlist: W, photos: B) -> Self
    where
        R: RecordStore<Review> + 'static,
        I: RecordStore<PantryEntry> + 'static,
        W: RecordStore<WishlistEntry> + 'static,
        B: BlobStore + 'static,
    {
        Self {
            reviews: Box::new(reviews),
            inventory: Box::new(inventory),
            wishlist: Box::new(wishlist),
            photos: Box::new(photos),
        }
    }

    /// Creates an empty journal held in memory.
    ///
    /// Photo URLs are built from `config` as the hosted bucket would.
    #[must_use]
    pub fn in_memory(config: &BackendConfig) -> Self {
        Self::new(
            MemoryStore::<Review>::new(),
            MemoryStore::<PantryEntry>::new(),
            MemoryStore::<WishlistEntry>::new(),
            MemoryBlobStore::new(config.clone()),
        )
    }

    #[must_use]
    pub fn reviews(&self) -> &dyn RecordStore<Review> {
        self.reviews.as_ref()
    }

    pub fn reviews_mut(&mut self) -> &mut dyn RecordStore<Review> {
        self.reviews.as_mut()
    }

    #[must_use]
    pub fn inventory(&self) -> &dyn RecordStore<PantryEntry> {
        self.inventory.as_ref()
    }

    pub fn inventory_mut(&mut self) -> &mut dyn RecordStore<PantryEntry> {
        self.inventory.as_mut()
    }

    #[must_use]
    pub fn wishlist(&self) -> &dyn RecordStore<WishlistEntry> {
        self.wishlist.as_ref()
    }

    pub fn wishlist_mut(&mut self) -> &mut dyn RecordStore<WishlistEntry> {
        self.wishlist.as_mut()
    }

    /// Lists reviews newest first, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns any error from the review store.
    pub fn recent_reviews(&self, limit: usize) -> Result<Vec<ReviewRecord>> {
        self.reviews.list(&Query::new().limit(limit))
    }

    /// Lists reviews whose name, brand, origin or notes contain `needle`,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns any error from the review store.
    pub fn search_reviews(&self, needle: &str) -> Result<Vec<ReviewRecord>> {
        self.reviews.list(&Query::new().filter(Filter::search(needle.trim())))
    }

    /// Uploads a photo and links it from review `id`.
    ///
    /// Only the final path component of `filename` is kept, prefixed with the
    /// review id and upload time so repeated uploads do not collide.
    ///
    /// Blob storage has no delete, so if linking fails after the upload
    /// succeeded the object stays in the bucket unreferenced. The failure is
    /// logged with the object's URL and the review store's error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::NotFound`] if the review does not exist,
    /// [`JournalError::InvalidBlobName`] if `filename` has no usable name,
    /// and any error from the blob or review store.
    pub fn attach_photo(
        &mut self,
        id: RecordId,
        filename: &str,
        bytes: &[u8],
    ) -> Result<ReviewRecord> {
        self.reviews.get(id)?;

        let base = filename.rsplit(['/', '\\']).next().unwrap_or_default().trim();
        if base.is_empty() {
            return Err(JournalError::InvalidBlobName(filename.to_owned()));
        }
        let name = format!("{id}_{}_{base}", Timestamp::now().as_millisecond());

        let url = self.photos.upload(&name, bytes)?;

        let mut changes = Attributes::new();
        changes.insert("image_url".to_owned(), Value::String(url.clone()));
        match self.reviews.update(id, changes) {
            Ok(review) => {
                tracing::info!(id, %url, "attached photo to review");
                Ok(review)
            }
            Err(err) => {
                tracing::warn!(id, %url, %err, "uploaded photo left unlinked");
                Err(err)
            }
        }
    }

    /// Projects review `id`'s sensory profile onto a square canvas of side
    /// `size`.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::NotFound`] if the review does not exist.
    pub fn chart_review(&self, id: RecordId, size: f64) -> Result<RadarGeometry> {
        let review = self.reviews.get(id)?;
        Ok(project_profile(&review.fields.sensory, size))
    }
}

/// Projects the sensory fields of an untyped record onto a square canvas of
/// side `size`.
///
/// Missing or non-numeric fields chart at their defaults, so any record can
/// be drawn while a form is still being filled in.
///
/// # Example
///
/// ```
/// use cupping_journal::{Attributes, chart_attributes};
///
/// let geometry = chart_attributes(&Attributes::new(), 300.0);
/// assert_eq!(geometry.axis_count(), 5);
/// ```
#[must_use]
pub fn chart_attributes(attributes: &Attributes, size: f64) -> RadarGeometry {
    project_profile(&sensory_profile(attributes), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use cupping_core::SensoryProfile;
    use serde_json::json;

    fn journal() -> Journal {
        let config =
            BackendConfig::new("https://demo.example.com", "anon", "coffee-photos").unwrap();
        Journal::in_memory(&config)
    }

    #[test]
    fn stores_are_independent() {
        let mut journal = journal();
        journal.reviews_mut().create(Review::new("Catuaí")).unwrap();
        journal
            .inventory_mut()
            .create(PantryEntry::new("Catuaí", 250.0))
            .unwrap();

        assert_eq!(journal.reviews().list(&Query::new()).unwrap().len(), 1);
        assert_eq!(journal.inventory().list(&Query::new()).unwrap().len(), 1);
        assert!(journal.wishlist().list(&Query::new()).unwrap().is_empty());
    }

    #[test]
    fn recent_and_search() {
        let mut journal = journal();
        for name in ["Bourbon", "Catuaí", "Geisha"] {
            journal.reviews_mut().create(Review::new(name)).unwrap();
        }

        let recent = journal.recent_reviews(2).unwrap();
        assert_eq!(recent.len(), 2);

        let hits = journal.search_reviews("  geisha ").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].fields.coffee_name, "Geisha");

        assert_eq!(journal.search_reviews("").unwrap().len(), 3);
    }

    #[test]
    fn attach_photo_links_public_url() {
        let mut journal = journal();
        let review = journal.reviews_mut().create(Review::new("Geisha")).unwrap();

        let updated = journal
            .attach_photo(review.id, "C:\\photos\\cup.jpg", b"jpeg")
            .unwrap();
        let url = updated.fields.image_url.unwrap();
        assert!(
            url.starts_with("https://demo.example.com/storage/v1/object/public/coffee-photos/1_")
        );
        assert!(url.ends_with("_cup.jpg"));
    }

    #[test]
    fn attach_photo_checks_review_and_name() {
        let mut journal = journal();
        assert!(matches!(
            journal.attach_photo(7, "cup.jpg", b""),
            Err(JournalError::NotFound { id: 7, .. })
        ));

        journal.reviews_mut().create(Review::new("Geisha")).unwrap();
        assert!(matches!(
            journal.attach_photo(1, "photos/", b""),
            Err(JournalError::InvalidBlobName(_))
        ));
    }

    /// A review store whose updates always fail.
    struct ReadOnlyReviews(MemoryStore<Review>);

    impl RecordStore<Review> for ReadOnlyReviews {
        fn list(&self, query: &Query) -> Result<Vec<ReviewRecord>> {
            self.0.list(query)
        }

        fn get(&self, id: RecordId) -> Result<ReviewRecord> {
            self.0.get(id)
        }

        fn create(&mut self, fields: Review) -> Result<ReviewRecord> {
            self.0.create(fields)
        }

        fn update(&mut self, _id: RecordId, _changes: Attributes) -> Result<ReviewRecord> {
            Err(JournalError::config("review store is read-only"))
        }

        fn delete(&mut self, id: RecordId) -> Result<()> {
            self.0.delete(id)
        }
    }

    #[test]
    fn attach_photo_reports_link_failure() {
        let config =
            BackendConfig::new("https://demo.example.com", "anon", "coffee-photos").unwrap();
        let mut reviews = MemoryStore::new();
        reviews.create(Review::new("Geisha")).unwrap();

        let mut journal = Journal::new(
            ReadOnlyReviews(reviews),
            MemoryStore::<PantryEntry>::new(),
            MemoryStore::<WishlistEntry>::new(),
            MemoryBlobStore::new(config),
        );

        assert!(matches!(
            journal.attach_photo(1, "cup.jpg", b"jpeg"),
            Err(JournalError::Config { .. })
        ));
        assert_eq!(journal.reviews().get(1).unwrap().fields.image_url, None);
    }

    #[test]
    fn chart_review_uses_stored_profile() {
        let mut journal = journal();
        let profile = SensoryProfile {
            acidity: 5.0,
            ..SensoryProfile::default()
        };
        let review = journal
            .reviews_mut()
            .create(Review::new("Geisha").with_sensory(profile))
            .unwrap();

        let geometry = journal.chart_review(review.id, 200.0).unwrap();
        let top = geometry.polygon[0];
        assert_relative_eq!(top.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(top.y, 100.0 - geometry.radius, epsilon = 1e-9);

        assert!(journal.chart_review(99, 200.0).is_err());
    }

    #[test]
    fn chart_attributes_defaults_missing_fields() {
        let attributes = match json!({ "acidity": "5", "body": "n/a" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let from_bag = chart_attributes(&attributes, 200.0);
        let expected = project_profile(
            &SensoryProfile {
                acidity: 5.0,
                ..SensoryProfile::default()
            },
            200.0,
        );
        assert_eq!(from_bag, expected);
    }
}
