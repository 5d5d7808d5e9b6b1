//! In-memory search and pagination shared by every list view.
//!
//! A collection is fetched once, then each request narrows it with a
//! case-insensitive substring search over a fixed set of fields and slices
//! the result into 1-indexed pages. Nothing here allocates more than the
//! filtered copy and the requested page, and the input collection is never
//! modified.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// A record whose fields can be looked up by name for text search.
pub trait Searchable {
    /// Returns the textual form of `key`, or `None` when the record has no
    /// such field.
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<V: Display> Searchable for HashMap<String, V> {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Owned(v.to_string()))
    }
}

impl<V: Display> Searchable for BTreeMap<String, V> {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Owned(v.to_string()))
    }
}

#[cfg(feature = "data")]
impl Searchable for serde_json::Map<String, serde_json::Value> {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        use serde_json::Value;

        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

#[cfg(feature = "data")]
impl Searchable for serde_json::Value {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_object()?.field_text(key)
    }
}

/// Checks whether `key` on `record` contains `needle`.
///
/// `needle` must already be lowercased. Missing fields behave as the empty
/// string, so they only match the empty needle.
pub fn field_matches<R>(record: &R, key: &str, needle: &str) -> bool
where
    R: Searchable + ?Sized,
{
    if needle.is_empty() {
        return true;
    }
    record
        .field_text(key)
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Keeps the records where at least one of `keys` contains `term`.
///
/// An empty `term` hands back the input as is. With a non-empty `term` and
/// no keys nothing can match.
pub fn filter_records<'a, R>(records: &'a [R], term: &str, keys: &[&str]) -> Cow<'a, [R]>
where
    R: Searchable + Clone,
{
    if term.is_empty() {
        return Cow::Borrowed(records);
    }

    let needle = term.to_lowercase();
    Cow::Owned(
        records
            .iter()
            .filter(|record| keys.iter().any(|key| field_matches(*record, key, &needle)))
            .cloned()
            .collect(),
    )
}

/// One page cut out of a collection together with its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_items: usize,
    /// Offset of the first requested item. May exceed `total_items`.
    pub start_index: usize,
    /// Exclusive offset one page past `start_index`. Not capped.
    pub end_index: usize,
}

/// Slices page `page` (1-indexed) of `per_page` items out of `records`.
///
/// The page is not clamped: asking past the last page yields no items while
/// the totals still describe the whole collection. Page `0` and a zero page
/// size also yield no items.
pub fn paginate<T: Clone>(records: &[T], page: usize, per_page: usize) -> PageSlice<T> {
    let total_items = records.len();

    if per_page == 0 {
        return PageSlice {
            items: Vec::new(),
            total_pages: 0,
            total_items,
            start_index: 0,
            end_index: 0,
        };
    }

    let total_pages = total_items.div_ceil(per_page);

    let Some(page_offset) = page.checked_sub(1) else {
        return PageSlice {
            items: Vec::new(),
            total_pages,
            total_items,
            start_index: 0,
            end_index: 0,
        };
    };

    let start_index = page_offset.saturating_mul(per_page);
    let end_index = start_index.saturating_add(per_page);

    let items = records
        .get(start_index.min(total_items)..end_index.min(total_items))
        .map(<[T]>::to_vec)
        .unwrap_or_default();

    PageSlice {
        items,
        total_pages,
        total_items,
        start_index,
        end_index,
    }
}

/// Filters `records` by `term` over `keys`, then cuts out page `page`.
pub fn filter_and_paginate<R>(
    records: &[R],
    term: &str,
    keys: &[&str],
    page: usize,
    per_page: usize,
) -> PageSlice<R>
where
    R: Searchable + Clone,
{
    let filtered = filter_records(records, term, keys);
    paginate(&filtered, page, per_page)
}

/// Builder over the search and paging parameters of a single list request.
#[derive(Debug, Clone)]
pub struct ListQuery<'k> {
    pub keys: &'k [&'k str],
    pub search: String,
    pub page: usize,
    pub per_page: usize,
}

impl<'k> ListQuery<'k> {
    pub fn new(keys: &'k [&'k str]) -> Self {
        Self {
            keys,
            search: String::new(),
            page: 1,
            per_page: crate::DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    /// Records matching the search, unpaged.
    pub fn filter<'a, R>(&self, records: &'a [R]) -> Cow<'a, [R]>
    where
        R: Searchable + Clone,
    {
        filter_records(records, &self.search, self.keys)
    }

    pub fn run<R>(&self, records: &[R]) -> PageSlice<R>
    where
        R: Searchable + Clone,
    {
        filter_and_paginate(records, &self.search, self.keys, self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Row = BTreeMap<String, String>;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn numbered(n: usize) -> Vec<Row> {
        (0..n).map(|i| row(&[("id", &format!("R{i:03}"))])).collect()
    }

    #[test]
    fn empty_search_returns_input_without_copying() {
        let records = vec![row(&[("id", "a")]), row(&[("id", "b")])];

        let filtered = filter_records(&records, "", &["id"]);

        assert!(matches!(filtered, Cow::Borrowed(_)));
        assert_eq!(filtered.as_ref(), records.as_slice());
    }

    #[test]
    fn empty_search_ignores_empty_keys() {
        let records = numbered(3);

        assert_eq!(filter_records(&records, "", &[]).len(), 3);
    }

    #[test]
    fn matches_when_any_key_contains_term() {
        let records = vec![
            row(&[("id", "M1"), ("name", "Coffee Shop"), ("state", "Johor")]),
            row(&[("id", "M2"), ("name", "Grocery"), ("state", "Selangor")]),
            row(&[("id", "M3"), ("name", "Bakery"), ("state", "Penang")]),
        ];

        let filtered = filter_records(&records, "SHOP", &["name", "state"]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["id"], "M1");

        let filtered = filter_records(&records, "an", &["name", "state"]);
        let ids: Vec<_> = filtered.iter().map(|r| r["id"].as_str()).collect();
        assert_eq!(ids, vec!["M2", "M3"]);
    }

    #[test]
    fn only_listed_keys_are_searched() {
        let records = vec![row(&[("id", "M1"), ("secret", "needle")])];

        assert!(filter_records(&records, "needle", &["id"]).is_empty());
    }

    #[test]
    fn empty_keys_match_nothing() {
        let records = numbered(5);

        assert!(filter_records(&records, "R", &[]).is_empty());
    }

    #[test]
    fn missing_field_never_matches_non_empty_term() {
        let records = vec![row(&[("id", "A1")])];

        assert!(filter_records(&records, "undefined", &["missing"]).is_empty());
        assert!(field_matches(&records[0], "missing", ""));
    }

    #[test]
    fn substring_search_is_not_exact_term_search() {
        let records: Vec<Row> = (0..12)
            .map(|i| {
                let status = if i % 2 == 0 { "Active" } else { "Inactive" };
                row(&[("id", &i.to_string()), ("status", status)])
            })
            .collect();

        let page = filter_and_paginate(&records, "active", &["status"], 1, 10);

        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 10);
    }

    #[cfg(feature = "data")]
    #[test]
    fn numeric_values_are_searched_as_text() {
        let records = vec![
            serde_json::json!({"id": "A1", "amount": 42000}),
            serde_json::json!({"id": "A2", "amount": 1500}),
            serde_json::json!({"id": "A3", "amount": null}),
        ];

        let filtered = filter_records(&records, "420", &["amount"]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["id"], "A1");
        assert!(filter_records(&records, "null", &["amount"]).is_empty());
    }

    #[test]
    fn pages_cover_filtered_collection_exactly_once() {
        let records = numbered(25);
        let query = ListQuery::new(&["id"]).search("r0");
        let filtered = query.filter(&records).into_owned();

        let first = query.clone().paginate(1, 10).run(&records);
        let mut rebuilt = Vec::new();
        for page in 1..=first.total_pages {
            rebuilt.extend(query.clone().paginate(page, 10).run(&records).items);
        }

        assert_eq!(rebuilt, filtered);
    }

    #[test]
    fn page_bounds_for_twenty_five_records() {
        let records = numbered(25);

        let first = paginate(&records, 1, 10);
        assert_eq!((first.start_index, first.end_index), (0, 10));
        assert_eq!(first.items, records[0..10]);

        let third = paginate(&records, 3, 10);
        assert_eq!((third.start_index, third.end_index), (20, 30));
        assert_eq!(third.items, records[20..25]);

        let fourth = paginate(&records, 4, 10);
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_pages, 3);
        assert_eq!(fourth.total_items, 25);
    }

    #[test]
    fn out_of_range_page_keeps_totals() {
        let records = numbered(7);

        let page = paginate(&records, 1 + 5, 3);

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn total_pages_is_zero_for_empty_collection() {
        let page = paginate::<Row>(&[], 1, 10);

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(paginate(&numbered(20), 1, 10).total_pages, 2);
        assert_eq!(paginate(&numbered(21), 1, 10).total_pages, 3);
    }

    #[test]
    fn page_zero_and_zero_page_size_yield_nothing() {
        let records = numbered(5);

        let zero_page = paginate(&records, 0, 2);
        assert!(zero_page.items.is_empty());
        assert_eq!(zero_page.total_pages, 3);

        let zero_size = paginate(&records, 1, 0);
        assert!(zero_size.items.is_empty());
        assert_eq!(zero_size.total_pages, 0);
        assert_eq!(zero_size.total_items, 5);
    }

    #[test]
    fn filtering_preserves_input_order_and_input() {
        let records = vec![
            row(&[("id", "3"), ("name", "match c")]),
            row(&[("id", "1"), ("name", "skip")]),
            row(&[("id", "2"), ("name", "match a")]),
        ];
        let before = records.clone();

        let page = filter_and_paginate(&records, "match", &["name"], 1, 10);

        let ids: Vec<_> = page.items.iter().map(|r| r["id"].as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert_eq!(records, before);
    }

    #[test]
    fn last_partial_page_keeps_uncapped_end() {
        let page = paginate(&numbered(4), 2, 3);

        assert_eq!(page.items, vec![row(&[("id", "R003")])]);
        assert_eq!(page.start_index, 3);
        assert_eq!(page.end_index, 6);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let page = paginate(&numbered(4), usize::MAX, 3);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.start_index, usize::MAX);
    }
}
