//! Predicate filter: free-text query, facet equality, and range bounds.

use chrono::NaiveDate;

use super::{ListRecord, SortValue};

/// A comparable bound for a range filter.
///
/// Ranges compare against the record's [`SortValue`] for the same key, so
/// any sortable numeric or date field can also be range-filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeValue {
    Number(i64),
    Date(NaiveDate),
}

impl RangeValue {
    /// Whether `value` is at or above this bound.
    fn le_value(&self, value: &SortValue<'_>) -> bool {
        match (self, value) {
            (Self::Number(min), SortValue::Number(v)) => min <= v,
            (Self::Date(min), SortValue::Date(v)) => min <= v,
            _ => false,
        }
    }

    /// Whether `value` is at or below this bound.
    fn ge_value(&self, value: &SortValue<'_>) -> bool {
        match (self, value) {
            (Self::Number(max), SortValue::Number(v)) => max >= v,
            (Self::Date(max), SortValue::Date(v)) => max >= v,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RangeFilter {
    key: String,
    min: Option<RangeValue>,
    max: Option<RangeValue>,
}

/// The active filter values for one list view.
///
/// Matching is the logical AND of:
/// - a case-insensitive substring match of the query against the record's
///   search fields,
/// - equality against each active facet,
/// - inclusive range bounds against sortable values.
///
/// An empty query and the facet value `"All"` are no-ops. Filtering cannot
/// fail: an unmatched filter yields an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    /// Lowercased at construction; matching lowers the field side only.
    query: Option<String>,
    facets: Vec<(String, String)>,
    ranges: Vec<RangeFilter>,
}

impl FilterSet {
    /// An empty filter set that matches every record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: None,
            facets: Vec::new(),
            ranges: Vec::new(),
        }
    }

    /// Set the free-text query. Whitespace-only input is a no-op.
    #[must_use]
    pub fn query(mut self, query: &str) -> Self {
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            self.query = Some(trimmed.to_lowercase());
        }
        self
    }

    /// Add a facet equality constraint. `"All"` and empty values are no-ops.
    #[must_use]
    pub fn facet(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() && value != "All" {
            self.facets.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add an inclusive range constraint against a sortable key.
    ///
    /// A range with neither bound is a no-op.
    #[must_use]
    pub fn range(mut self, key: &str, min: Option<RangeValue>, max: Option<RangeValue>) -> Self {
        if min.is_some() || max.is_some() {
            self.ranges.push(RangeFilter {
                key: key.to_string(),
                min,
                max,
            });
        }
        self
    }

    /// Whether no constraints are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.facets.is_empty() && self.ranges.is_empty()
    }

    /// Whether a single record satisfies every active constraint.
    pub fn matches<R: ListRecord>(&self, record: &R) -> bool {
        if let Some(query) = &self.query {
            let hit = record
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(query));
            if !hit {
                return false;
            }
        }

        for (key, value) in &self.facets {
            if record.facet_value(key).as_deref() != Some(value.as_str()) {
                return false;
            }
        }

        for range in &self.ranges {
            let Some(value) = record.sort_value(&range.key) else {
                return false;
            };
            if let Some(min) = &range.min
                && !min.le_value(&value)
            {
                return false;
            }
            if let Some(max) = &range.max
                && !max.ge_value(&value)
            {
                return false;
            }
        }

        true
    }

    /// Reduce a record slice to the matching subsequence, in original order.
    pub fn apply<'a, R: ListRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
