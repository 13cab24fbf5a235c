use std::cmp::Ordering;

use serde_json::Value;

use crate::{Attributes, JournalError, RecordFields, Result, Stored};

/// Sort order for [`Query`] results.
///
/// Ties are broken by record id in the same direction, so results are
/// deterministic even when creation times coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

impl OrderBy {
    /// Newest first, as the journal lists reviews.
    #[must_use]
    pub fn newest_first() -> Self {
        Self::descending("created_at")
    }

    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self::newest_first()
    }
}

/// A condition a record must satisfy to be listed.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// The field equals the value. Numbers compare by value, so `3` matches `3.0`.
    Eq { field: String, value: Value },
    /// The text field contains `needle`, ignoring case.
    Contains { field: String, needle: String },
    /// Any of the record kind's searchable text fields contains `needle`,
    /// ignoring case.
    Search(String),
}

impl Filter {
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::Contains {
            field: field.into(),
            needle: needle.into(),
        }
    }

    #[must_use]
    pub fn search(needle: impl Into<String>) -> Self {
        Self::Search(needle.into())
    }

    fn matches(&self, fields: &Attributes, search_fields: &[&str]) -> bool {
        match self {
            Self::Eq { field, value } => fields
                .get(field)
                .is_some_and(|actual| values_equal(actual, value)),
            Self::Contains { field, needle } => contains(fields.get(field), needle),
            Self::Search(needle) => {
                needle.is_empty()
                    || search_fields
                        .iter()
                        .any(|field| contains(fields.get(*field), needle))
            }
        }
    }
}

/// Ordering, filters and an optional limit for [`RecordStore::list`].
///
/// The default query lists every record, newest first.
///
/// # Example
///
/// ```
/// use cupping_journal::{Filter, OrderBy, Query};
///
/// let query = Query::new()
///     .filter(Filter::search("cerrado"))
///     .filter(Filter::eq("roast_level", "light"))
///     .order_by(OrderBy::descending("rating"))
///     .limit(10);
/// assert_eq!(query.filters().len(), 2);
/// ```
///
/// [`RecordStore::list`]: crate::RecordStore::list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    order: OrderBy,
    filters: Vec<Filter>,
    limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order = order;
        self
    }

    /// Adds a filter; records must satisfy every filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn order(&self) -> &OrderBy {
        &self.order
    }

    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Filters, sorts and truncates `records`.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::InvalidRecord`] if a record cannot be viewed as
    /// an attribute bag.
    pub fn apply<'a, T, I>(&self, records: I) -> Result<Vec<Stored<T>>>
    where
        T: RecordFields,
        I: IntoIterator<Item = &'a Stored<T>>,
    {
        let mut rows = Vec::new();
        for record in records {
            let fields = to_attributes(record)?;
            if self
                .filters
                .iter()
                .all(|filter| filter.matches(&fields, T::SEARCH_FIELDS))
            {
                rows.push((record, fields));
            }
        }

        let field = self.order.field.as_str();
        rows.sort_by(|(a, a_fields), (b, b_fields)| {
            let ordering = if field == "created_at" {
                a.created_at.cmp(&b.created_at)
            } else {
                compare_values(a_fields.get(field), b_fields.get(field))
            };
            let ordering = ordering.then(a.id.cmp(&b.id));
            if self.order.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        let limit = self.limit.unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|(record, _)| record.clone())
            .collect())
    }
}

fn to_attributes<T: RecordFields>(record: &Stored<T>) -> Result<Attributes> {
    let invalid = |source| JournalError::InvalidRecord {
        kind: T::KIND,
        source,
    };
    match serde_json::to_value(record).map_err(invalid)? {
        Value::Object(fields) => Ok(fields),
        other => Err(invalid(serde::ser::Error::custom(format!(
            "expected an object, got {other}"
        )))),
    }
}

fn contains(value: Option<&Value>, needle: &str) -> bool {
    match value {
        Some(Value::String(text)) => text.to_lowercase().contains(&needle.to_lowercase()),
        _ => needle.is_empty(),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Orders JSON values: missing and null first, then booleans, numbers and
/// strings (case-insensitive), then anything else as equal.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(Value::Array(_) | Value::Object(_)) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        _ => rank(a).cmp(&rank(b)),
    }
}
