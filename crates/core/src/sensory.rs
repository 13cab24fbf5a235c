use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Lowest score on the sensory scale.
pub const SCORE_MIN: f64 = 1.0;

/// Highest score on the sensory scale.
pub const SCORE_MAX: f64 = 5.0;

/// Granularity of sensory scores.
pub const SCORE_STEP: f64 = 0.5;

/// One of the five attributes of a [`SensoryProfile`].
///
/// Variants are declared in chart order: [`SensoryAttribute::Acidity`] is the
/// first axis and is drawn at the top of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SensoryAttribute {
    Acidity,
    Body,
    Sweetness,
    Bitterness,
    Aroma,
}

impl SensoryAttribute {
    /// All attributes in chart order.
    pub const ALL: [Self; 5] = [
        Self::Acidity,
        Self::Body,
        Self::Sweetness,
        Self::Bitterness,
        Self::Aroma,
    ];

    /// Returns the field name used in stored records.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Acidity => "acidity",
            Self::Body => "body",
            Self::Sweetness => "sweetness",
            Self::Bitterness => "bitterness",
            Self::Aroma => "aroma",
        }
    }

    /// Returns the human-readable axis label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Acidity => "Acidity",
            Self::Body => "Body",
            Self::Sweetness => "Sweetness",
            Self::Bitterness => "Bitterness",
            Self::Aroma => "Aroma",
        }
    }

    /// Returns the score used when a record has no value for this attribute.
    #[must_use]
    pub fn default_score(self) -> f64 {
        match self {
            Self::Acidity | Self::Body | Self::Sweetness => 3.0,
            Self::Bitterness => 2.0,
            Self::Aroma => 4.0,
        }
    }

    /// Coerces a raw score onto the sensory scale.
    ///
    /// Missing and non-finite values take the [default](Self::default_score).
    /// Anything else is clamped to `[SCORE_MIN, SCORE_MAX]` and snapped to the
    /// nearest half point.
    ///
    /// # Example
    ///
    /// ```
    /// use cupping_core::SensoryAttribute;
    ///
    /// assert_eq!(SensoryAttribute::Aroma.coerce(None), 4.0);
    /// assert_eq!(SensoryAttribute::Body.coerce(Some(7.0)), 5.0);
    /// assert_eq!(SensoryAttribute::Body.coerce(Some(3.3)), 3.5);
    /// ```
    #[must_use]
    pub fn coerce(self, raw: Option<f64>) -> f64 {
        match raw {
            Some(value) if value.is_finite() => {
                let clamped = value.clamp(SCORE_MIN, SCORE_MAX);
                (clamped / SCORE_STEP).round() * SCORE_STEP
            }
            _ => self.default_score(),
        }
    }
}

impl fmt::Display for SensoryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five-attribute taste description attached to a review.
///
/// Fields hold raw scores exactly as entered. Use [`SensoryProfile::normalized`]
/// or [`SensoryProfile::from_lookup`] to bring values onto the sensory scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct SensoryProfile {
    pub acidity: f64,
    pub body: f64,
    pub sweetness: f64,
    pub bitterness: f64,
    pub aroma: f64,
}

impl Default for SensoryProfile {
    fn default() -> Self {
        Self {
            acidity: SensoryAttribute::Acidity.default_score(),
            body: SensoryAttribute::Body.default_score(),
            sweetness: SensoryAttribute::Sweetness.default_score(),
            bitterness: SensoryAttribute::Bitterness.default_score(),
            aroma: SensoryAttribute::Aroma.default_score(),
        }
    }
}

impl SensoryProfile {
    /// Builds a profile by asking `lookup` for each attribute's raw score.
    ///
    /// Every value passes through [`SensoryAttribute::coerce`], so missing
    /// attributes default and out-of-range ones are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use cupping_core::{SensoryAttribute, SensoryProfile};
    ///
    /// let profile = SensoryProfile::from_lookup(|attr| match attr {
    ///     SensoryAttribute::Acidity => Some(4.5),
    ///     _ => None,
    /// });
    ///
    /// assert_eq!(profile.acidity, 4.5);
    /// assert_eq!(profile.bitterness, 2.0);
    /// ```
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(SensoryAttribute) -> Option<f64>,
    {
        let mut profile = Self::default();
        for attr in SensoryAttribute::ALL {
            profile.set(attr, attr.coerce(lookup(attr)));
        }
        profile
    }

    /// Returns the raw score for `attr`.
    #[must_use]
    pub fn get(&self, attr: SensoryAttribute) -> f64 {
        match attr {
            SensoryAttribute::Acidity => self.acidity,
            SensoryAttribute::Body => self.body,
            SensoryAttribute::Sweetness => self.sweetness,
            SensoryAttribute::Bitterness => self.bitterness,
            SensoryAttribute::Aroma => self.aroma,
        }
    }

    /// Sets the raw score for `attr`.
    pub fn set(&mut self, attr: SensoryAttribute, value: f64) {
        let slot = match attr {
            SensoryAttribute::Acidity => &mut self.acidity,
            SensoryAttribute::Body => &mut self.body,
            SensoryAttribute::Sweetness => &mut self.sweetness,
            SensoryAttribute::Bitterness => &mut self.bitterness,
            SensoryAttribute::Aroma => &mut self.aroma,
        };
        *slot = value;
    }

    /// Returns `self` with `attr` set to `value`, keeping other fields unchanged.
    #[must_use]
    pub fn with(mut self, attr: SensoryAttribute, value: f64) -> Self {
        self.set(attr, value);
        self
    }

    /// Returns a copy with every score coerced onto the sensory scale.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from_lookup(|attr| Some(self.get(attr)))
    }

    /// Returns `(attribute, score)` pairs in chart order.
    #[must_use]
    pub fn values(&self) -> [(SensoryAttribute, f64); 5] {
        SensoryAttribute::ALL.map(|attr| (attr, self.get(attr)))
    }
}
