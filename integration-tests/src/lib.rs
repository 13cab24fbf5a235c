//! Shared fixtures for the cross-crate tests in `tests/`.

pub mod fixtures {
    use cupping_core::{Rating, SensoryProfile};
    use cupping_journal::{
        Attributes, BackendConfig, BrewMethod, Journal, RecordStore, Review, RoastLevel,
    };
    use serde_json::Value;

    /// Backend configuration as a deployment file would carry it.
    pub const BACKEND_TOML: &str = r#"
[backend]
url = "https://cupping.example.com"
anon_key = "public-anon-key"
"#;

    /// Returns the configuration parsed from [`BACKEND_TOML`].
    ///
    /// # Panics
    ///
    /// Panics if the fixture does not parse.
    #[must_use]
    pub fn backend() -> BackendConfig {
        BackendConfig::from_toml_str(BACKEND_TOML).expect("fixture config parses")
    }

    /// Converts a JSON object literal into an attribute bag.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not an object.
    #[must_use]
    pub fn bag(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    /// A journal seeded with three reviews, created oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory store rejects a fixture.
    #[must_use]
    pub fn seeded_journal() -> Journal {
        let mut journal = Journal::in_memory(&backend());
        let reviews = [
            Review::new("Bourbon Amarelo")
                .with_brand("Fazenda Ambiental")
                .with_origin("Sul de Minas")
                .with_roast_level(RoastLevel::Light)
                .with_sensory(SensoryProfile {
                    acidity: 4.5,
                    sweetness: 4.0,
                    ..SensoryProfile::default()
                })
                .with_rating(Rating::coerce(5.0)),
            Review::new("Catuaí Vermelho")
                .with_origin("Cerrado Mineiro")
                .with_brew_method(BrewMethod::FrenchPress)
                .with_roast_level(RoastLevel::Dark)
                .with_sensory(SensoryProfile {
                    body: 5.0,
                    bitterness: 4.0,
                    ..SensoryProfile::default()
                })
                .with_rating(Rating::coerce(3.0)),
            Review::new("Geisha")
                .with_brand("Cerrado Coffees")
                .with_brew_method(BrewMethod::Espresso)
                .with_notes("jasmine, bergamot"),
        ];
        for review in reviews {
            journal
                .reviews_mut()
                .create(review)
                .expect("fixture review is valid");
        }
        journal
    }
}
