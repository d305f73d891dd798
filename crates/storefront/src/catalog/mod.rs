//! Catalog query engine.
//!
//! Every list screen (products, orders, registration requests) narrows an
//! in-memory record collection with the same rules:
//!
//! - A free-text query matched case-insensitively as a substring against the
//!   record type's designated text fields (any field may match). An empty or
//!   whitespace-only query matches everything.
//! - Equality filters, each either [`Selection::All`] or an exact value.
//! - An optional sort key applied with a stable sort.
//!
//! A record is kept iff it passes every equality filter and the text query.
//! Querying never mutates or reorders the input and never fails: criteria
//! that cannot be understood fall back to "unfiltered" on that dimension.

mod orders;
mod products;
mod registrations;

use std::cmp::Ordering;

use thiserror::Error;

pub use orders::{OrderCriteria, OrderFilters, OrderSort};
pub use products::{ProductCriteria, ProductFilters, ProductSort};
pub use registrations::{RegistrationCriteria, RegistrationFilters, RegistrationSort};

/// Filter values that mean "do not filter on this field".
///
/// Compared after trimming; `all` is matched case-insensitively.
pub const MATCH_ALL_VALUES: [&str; 3] = ["", "all", "전체"];

/// Label shown for the match-all choice in selectors.
pub const MATCH_ALL_LABEL: &str = "전체";

/// An equality filter on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    /// Match-all sentinel; the field is ignored.
    #[default]
    All,
    /// The record field must equal this value.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether a record whose field holds `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> Selection<T> {
    /// Parse a UI filter value, mapping the match-all values to [`Selection::All`].
    ///
    /// # Errors
    ///
    /// Returns whatever `parse` returns for a value that is not match-all.
    pub fn parse_with<E>(value: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<Self, E> {
        if is_match_all(value) {
            Ok(Self::All)
        } else {
            parse(value.trim()).map(Self::Only)
        }
    }

    /// The selected value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

/// Whether a raw filter value is one of the [`MATCH_ALL_VALUES`].
#[must_use]
pub fn is_match_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all") || value == MATCH_ALL_LABEL
}

/// Reasons a single filter parameter was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// The current filter/sort selection for one record type.
///
/// Built fresh for every UI interaction and discarded after the query.
/// The default is the identity query: no text, every filter match-all, and
/// input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria<F, S> {
    /// Free-text query; trimmed and lowercased before matching.
    pub text: String,
    /// Typed equality filters.
    pub filters: F,
    /// Sort order; `None` keeps input order.
    pub sort: Option<S>,
}

impl<F: Default, S> Default for Criteria<F, S> {
    fn default() -> Self {
        Self {
            text: String::new(),
            filters: F::default(),
            sort: None,
        }
    }
}

impl<F: Default, S> Criteria<F, S> {
    /// Criteria that only apply a text query.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filters: F::default(),
            sort: None,
        }
    }

    /// Replace the filters.
    #[must_use]
    pub fn with_filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self
    }

    /// Replace the sort order.
    #[must_use]
    pub fn sorted_by(mut self, sort: S) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// A record type the query engine can filter and sort.
pub trait Record {
    /// Typed equality filters for this record type.
    type Filters: Default;
    /// Sort keys for this record type.
    type Sort: Copy;

    /// The fields a text query is matched against.
    fn text_fields(&self) -> impl Iterator<Item = &str>;

    /// Whether this record passes every equality filter.
    fn matches_filters(&self, filters: &Self::Filters) -> bool;

    /// Order two records by `sort`.
    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering;

    /// Apply one `field=value` pair from the UI to `filters`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError`] for unknown fields or unparseable values;
    /// `filters` is left unchanged in that case.
    fn apply_filter(
        filters: &mut Self::Filters,
        field: &str,
        value: &str,
    ) -> Result<(), CriteriaError>;

    /// Parse a sort key from its URL/CLI form.
    fn parse_sort(key: &str) -> Option<Self::Sort>;

    /// Build criteria from raw UI input.
    ///
    /// Unknown fields, invalid values, and unknown sort keys are logged and
    /// ignored so that a bad parameter never prevents the list from
    /// rendering.
    fn criteria_from_params(
        text: &str,
        params: &[(&str, &str)],
        sort: Option<&str>,
    ) -> Criteria<Self::Filters, Self::Sort>
    where
        Self: Sized,
    {
        let mut filters = Self::Filters::default();
        for (field, value) in params {
            if let Err(error) = Self::apply_filter(&mut filters, field, value) {
                tracing::debug!(%error, "Ignoring filter parameter");
            }
        }

        let sort = sort.and_then(|key| {
            let parsed = Self::parse_sort(key);
            if parsed.is_none() {
                tracing::debug!(key, "Unknown sort key, keeping input order");
            }
            parsed
        });

        Criteria {
            text: text.to_owned(),
            filters,
            sort,
        }
    }
}

/// Filter and sort `records` by `criteria`.
///
/// Returns a fresh sequence of references into `records`; the input is not
/// modified. Ties under the sort key keep their input order.
#[must_use]
pub fn query<'a, R: Record>(records: &'a [R], criteria: &Criteria<R::Filters, R::Sort>) -> Vec<&'a R> {
    let needle = criteria.text.trim().to_lowercase();

    let mut matched: Vec<&R> = records
        .iter()
        .filter(|record| record.matches_filters(&criteria.filters) && matches_text(*record, &needle))
        .collect();

    if let Some(sort) = criteria.sort {
        matched.sort_by(|a, b| a.compare(b, sort));
    }

    matched
}

/// Whether any designated field contains `needle`, which must already be
/// trimmed and lowercased.
fn matches_text<R: Record>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .text_fields()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Query output with the counts list screens display.
#[derive(Debug)]
pub struct QueryResult<'a, R> {
    /// Matching records in display order.
    pub items: Vec<&'a R>,
    /// Number of records before filtering.
    pub total: usize,
}

impl<'a, R: Record> QueryResult<'a, R> {
    /// Run `criteria` over `records`.
    #[must_use]
    pub fn collect(records: &'a [R], criteria: &Criteria<R::Filters, R::Sort>) -> Self {
        Self {
            items: query(records, criteria),
            total: records.len(),
        }
    }
}

impl<R> QueryResult<'_, R> {
    /// Number of matching records.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.items.len()
    }

    /// Whether the empty-state message should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal record for exercising the engine independently of the
    /// marketplace types.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        name: &'static str,
        tag: &'static str,
        rank: u32,
    }

    #[derive(Debug, Clone, Copy)]
    enum ItemSort {
        RankAsc,
        RankDesc,
    }

    impl Record for Item {
        type Filters = Selection<&'static str>;
        type Sort = ItemSort;

        fn text_fields(&self) -> impl Iterator<Item = &str> {
            let fields: [&str; 2] = [self.name, self.tag];
            fields.into_iter()
        }

        fn matches_filters(&self, filters: &Self::Filters) -> bool {
            filters.admits(&self.tag)
        }

        fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering {
            match sort {
                ItemSort::RankAsc => self.rank.cmp(&other.rank),
                ItemSort::RankDesc => other.rank.cmp(&self.rank),
            }
        }

        fn apply_filter(
            filters: &mut Self::Filters,
            field: &str,
            value: &str,
        ) -> Result<(), CriteriaError> {
            match field {
                "tag" => {
                    *filters = Selection::parse_with(value, |v| match v {
                        "red" => Ok("red"),
                        "blue" => Ok("blue"),
                        _ => Err(CriteriaError::InvalidValue {
                            field: "tag",
                            value: v.to_owned(),
                        }),
                    })?;
                    Ok(())
                }
                other => Err(CriteriaError::UnknownField(other.to_owned())),
            }
        }

        fn parse_sort(key: &str) -> Option<Self::Sort> {
            match key {
                "rank-asc" => Some(ItemSort::RankAsc),
                "rank-desc" => Some(ItemSort::RankDesc),
                _ => None,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Alpha", tag: "red", rank: 3 },
            Item { name: "beta", tag: "blue", rank: 1 },
            Item { name: "Gamma", tag: "red", rank: 1 },
            Item { name: "delta", tag: "blue", rank: 2 },
        ]
    }

    fn names(result: &[&Item]) -> Vec<&'static str> {
        result.iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_identity_criteria_returns_input_order() {
        let records = items();
        let result = query(&records, &Criteria::default());
        assert_eq!(names(&result), ["Alpha", "beta", "Gamma", "delta"]);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<Item> = Vec::new();
        assert!(query(&records, &Criteria::text("a")).is_empty());
    }

    #[test]
    fn test_text_is_trimmed_and_case_insensitive() {
        let records = items();
        let result = query(&records, &Criteria::text("  ALP  "));
        assert_eq!(names(&result), ["Alpha"]);
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let records = items();
        assert_eq!(query(&records, &Criteria::text("   ")).len(), 4);
    }

    #[test]
    fn test_any_text_field_may_match() {
        let records = items();
        // "blu" only appears in the tag field
        let result = query(&records, &Criteria::text("blu"));
        assert_eq!(names(&result), ["beta", "delta"]);
    }

    #[test]
    fn test_filters_and_text_combine_with_and() {
        let records = items();
        let criteria = Criteria::text("a").with_filters(Selection::Only("red"));
        let result = query(&records, &criteria);
        assert_eq!(names(&result), ["Alpha", "Gamma"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = items();
        let asc = query(&records, &Criteria::default().sorted_by(ItemSort::RankAsc));
        assert_eq!(names(&asc), ["beta", "Gamma", "delta", "Alpha"]);

        let desc = query(&records, &Criteria::default().sorted_by(ItemSort::RankDesc));
        assert_eq!(names(&desc), ["Alpha", "delta", "beta", "Gamma"]);
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let records = items();
        let before = records.clone();
        let _ = query(&records, &Criteria::default().sorted_by(ItemSort::RankAsc));
        assert_eq!(records, before);
    }

    #[test]
    fn test_params_ignore_unknown_field_and_sort() {
        let criteria = Item::criteria_from_params(
            "x",
            &[("colour", "red"), ("tag", "green")],
            Some("by-magic"),
        );
        assert_eq!(criteria.text, "x");
        assert_eq!(criteria.filters, Selection::All);
        assert!(criteria.sort.is_none());
    }

    #[test]
    fn test_params_match_all_values() {
        for value in ["", " ", "all", "ALL", "전체"] {
            let criteria = Item::criteria_from_params("", &[("tag", value)], None);
            assert_eq!(criteria.filters, Selection::All, "value {value:?}");
        }
    }

    #[test]
    fn test_params_apply_known_values() {
        let criteria = Item::criteria_from_params("", &[("tag", "blue")], Some("rank-desc"));
        assert_eq!(criteria.filters, Selection::Only("blue"));
        assert!(matches!(criteria.sort, Some(ItemSort::RankDesc)));
    }

    #[test]
    fn test_query_result_counts() {
        let records = items();
        let result = QueryResult::collect(&records, &Criteria::text("zzz"));
        assert!(result.is_empty());
        assert_eq!(result.matched(), 0);
        assert_eq!(result.total, 4);
    }
}
