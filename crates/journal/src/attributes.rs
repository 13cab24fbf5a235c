//! Untyped attribute bags and numeric coercion.
//!
//! Records cross the backend boundary as JSON objects. Form inputs often hold
//! numbers as text, so numeric fields are coerced here rather than rejected.

use cupping_core::SensoryProfile;
use serde_json::Value;

/// A record's fields as an untyped JSON object.
pub type Attributes = serde_json::Map<String, Value>;

/// Reads a finite number from a JSON number or a numeric string.
///
/// # Example
///
/// ```
/// use cupping_journal::attributes::number;
/// use serde_json::json;
///
/// assert_eq!(number(&json!(4.5)), Some(4.5));
/// assert_eq!(number(&json!(" 3 ")), Some(3.0));
/// assert_eq!(number(&json!("strong")), None);
/// assert_eq!(number(&json!(null)), None);
/// ```
#[must_use]
pub fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|n: &f64| n.is_finite())
}

/// Reads the five sensory fields of an attribute bag.
///
/// Missing or unparsable fields take their defaults; the rest are clamped
/// onto the sensory scale.
#[must_use]
pub fn sensory_profile(attributes: &Attributes) -> SensoryProfile {
    SensoryProfile::from_lookup(|attr| attributes.get(attr.key()).and_then(number))
}

/// Replaces `key` with `convert(n)` if it holds a number, or removes it if
/// it holds anything else. Absent keys stay absent.
pub(crate) fn coerce_field<F>(attributes: &mut Attributes, key: &str, convert: F)
where
    F: FnOnce(f64) -> Value,
{
    let Some(raw) = attributes.get(key) else {
        return;
    };
    match number(raw) {
        Some(n) => {
            attributes.insert(key.to_owned(), convert(n));
        }
        None => {
            tracing::debug!(key, value = %raw, "dropping non-numeric attribute");
            attributes.remove(key);
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use serde_json::json;

    fn bag(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn number_rejects_non_finite_and_non_numeric() {
        assert_eq!(number(&json!("NaN")), None);
        assert_eq!(number(&json!("inf")), None);
        assert_eq!(number(&json!(true)), None);
        assert_eq!(number(&json!([1])), None);
        assert_eq!(number(&json!("")), None);
    }

    #[test]
    fn sensory_profile_defaults_missing_fields() {
        let profile = sensory_profile(&Attributes::new());
        assert_eq!(profile, SensoryProfile::default());
    }

    #[test]
    fn sensory_profile_coerces_and_clamps() {
        let profile = sensory_profile(&bag(json!({
            "acidity": "4",
            "body": 7,
            "sweetness": 0,
            "bitterness": "bitter",
            "aroma": 3.3,
        })));
        assert_eq!(profile.acidity, 4.0);
        assert_eq!(profile.body, 5.0);
        assert_eq!(profile.sweetness, 1.0);
        assert_eq!(profile.bitterness, 2.0);
        assert_eq!(profile.aroma, 3.5);
    }

    #[test]
    fn coerce_field_converts_or_drops() {
        let mut attributes = bag(json!({ "a": "2.5", "b": "n/a" }));
        coerce_field(&mut attributes, "a", Value::from);
        coerce_field(&mut attributes, "b", Value::from);
        coerce_field(&mut attributes, "c", Value::from);

        assert_eq!(attributes.get("a"), Some(&json!(2.5)));
        assert!(!attributes.contains_key("b"));
        assert!(!attributes.contains_key("c"));
    }
}
