//! The bounded list view: filter, sort, and paginate an in-memory record
//! collection.
//!
//! Every admin list page is the same pipeline over a different record
//! shape, so the pipeline is implemented once against the [`ListRecord`]
//! interface and each page supplies its search fields, facets, and sort
//! keys.
//!
//! The pipeline is synchronous and pure: handlers re-derive the view from
//! the record collection on every request, so there is no cached state to
//! fall out of sync with the records.

pub mod filter;
pub mod page;
pub mod sort;

use std::borrow::Cow;

use chrono::NaiveDate;

pub use filter::{FilterSet, RangeValue};
pub use page::Pager;
pub use sort::{SortDirection, SortSpec};

/// A typed value a record exposes for sorting and range filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortValue<'a> {
    /// Compared case-insensitively.
    Text(&'a str),
    /// Compared numerically.
    Number(i64),
    /// Compared chronologically.
    Date(NaiveDate),
}

/// A record that can back a list view.
///
/// Implementations declare which fields the free-text query searches,
/// which discrete facets the record exposes, and which keys it can be
/// sorted (and range-filtered) by.
pub trait ListRecord {
    /// Field values matched by the free-text query.
    fn search_text(&self) -> Vec<Cow<'_, str>>;

    /// The record's value for a named facet, if it has one.
    fn facet_value(&self, key: &str) -> Option<Cow<'_, str>>;

    /// The record's value for a named sort key, if it has one.
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>>;
}

/// One derived page of a list view.
#[derive(Debug)]
pub struct ListOutput<'a, R> {
    /// The rows on the current page, in order.
    pub rows: Vec<&'a R>,
    /// Number of records that survived the filter.
    pub total: usize,
    /// Current page (1-based).
    pub page: usize,
    /// Total pages for the filtered length (at least 1).
    pub total_pages: usize,
}

impl<R> ListOutput<'_, R> {
    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Run the full filter -> sort -> paginate pipeline.
///
/// `requested_page` is the page asked for by the caller (for a handler,
/// the `page` query parameter). An out-of-range request is rejected and
/// the pager keeps its current page; a page stranded by a narrower filter
/// resets to 1.
pub fn run<'a, R: ListRecord>(
    records: &'a [R],
    filter: &FilterSet,
    sort: Option<&SortSpec>,
    pager: &mut Pager,
    requested_page: usize,
) -> ListOutput<'a, R> {
    let mut rows = filter.apply(records);

    if let Some(spec) = sort {
        spec.apply(&mut rows);
    }

    let total = rows.len();
    let _ = pager.request(requested_page, total);
    pager.reset_if_stranded(total);

    let page_rows = pager.slice(&rows).to_vec();

    ListOutput {
        rows: page_rows,
        total,
        page: pager.page(),
        total_pages: pager.total_pages(total),
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::{ListRecord, SortValue};
    use chrono::NaiveDate;
    use std::borrow::Cow;

    /// Minimal record used by the engine's unit tests.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Row {
        pub name: &'static str,
        pub group: &'static str,
        pub amount: i64,
        pub day: NaiveDate,
    }

    pub fn row(name: &'static str, group: &'static str, amount: i64, day: (i32, u32, u32)) -> Row {
        Row {
            name,
            group,
            amount,
            day: NaiveDate::from_ymd_opt(day.0, day.1, day.2).expect("valid date"),
        }
    }

    impl ListRecord for Row {
        fn search_text(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.name)]
        }

        fn facet_value(&self, key: &str) -> Option<Cow<'_, str>> {
            (key == "group").then(|| Cow::Borrowed(self.group))
        }

        fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
            match key {
                "name" => Some(SortValue::Text(self.name)),
                "amount" => Some(SortValue::Number(self.amount)),
                "day" => Some(SortValue::Date(self.day)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::row;
    use super::*;

    fn rows() -> Vec<testutil::Row> {
        vec![
            row("alpha", "a", 3, (2024, 1, 1)),
            row("beta", "b", 1, (2024, 2, 1)),
            row("gamma", "a", 2, (2024, 3, 1)),
            row("delta", "b", 5, (2024, 1, 15)),
            row("epsilon", "a", 4, (2024, 2, 20)),
        ]
    }

    #[test]
    fn test_run_derives_counts() {
        let records = rows();
        let mut pager = Pager::new(2);
        let out = run(
            &records,
            &FilterSet::new().facet("group", "a"),
            Some(&SortSpec::ascending("amount")),
            &mut pager,
            1,
        );

        assert_eq!(out.total, 3);
        assert_eq!(out.total_pages, 2);
        assert_eq!(out.page, 1);
        assert_eq!(out.rows.len(), 2);
        assert_eq!(out.rows[0].name, "gamma");
        assert_eq!(out.rows[1].name, "alpha");
        assert!(out.has_next());
        assert!(!out.has_prev());
    }

    #[test]
    fn test_run_rejects_out_of_range_request() {
        let records = rows();
        let mut pager = Pager::new(2);

        // 5 records at page size 2 is 3 pages; page 9 is rejected.
        let out = run(&records, &FilterSet::new(), None, &mut pager, 9);
        assert_eq!(out.page, 1);
        assert_eq!(out.total_pages, 3);
        assert_eq!(out.rows.len(), 2);
    }

    #[test]
    fn test_run_resets_stranded_page() {
        let records = rows();
        let mut pager = Pager::new(2);
        assert!(pager.request(3, records.len()));

        // A narrower filter leaves only one page; the pager resets to 1.
        let out = run(
            &records,
            &FilterSet::new().query("alp"),
            None,
            &mut pager,
            pager.page(),
        );
        assert_eq!(out.page, 1);
        assert_eq!(out.total, 1);
        assert_eq!(out.rows[0].name, "alpha");
    }

    #[test]
    fn test_run_empty_result_is_one_empty_page() {
        let records = rows();
        let mut pager = Pager::new(2);
        let out = run(
            &records,
            &FilterSet::new().query("no such row"),
            None,
            &mut pager,
            1,
        );
        assert_eq!(out.total, 0);
        assert_eq!(out.total_pages, 1);
        assert_eq!(out.page, 1);
        assert!(out.rows.is_empty());
        assert!(!out.has_prev());
        assert!(!out.has_next());
    }
}
