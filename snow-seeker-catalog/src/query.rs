//! Search and sort over the resort list.
//!
//! Everything here is a pure function of its inputs: the same catalog, query
//! and sort order always produce the same sequence.

use snow_seeker_core::{Resort, SortOrder};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Filter `catalog` by `query` and order the survivors by `sort`.
///
/// An empty query keeps every resort. Otherwise a resort is kept when its
/// name contains the query, ignoring case and diacritics. Whitespace in the
/// query is matched like any other character.
/// Sorting is stable, so resorts with equal keys keep their catalog order;
/// [`SortOrder::Default`] does not sort at all.
pub fn filter_and_sort<'a>(catalog: &'a [Resort], query: &str, sort: SortOrder) -> Vec<&'a Resort> {
    let mut results: Vec<&Resort> = if query.is_empty() {
        catalog.iter().collect()
    } else {
        let needle = fold(query);
        catalog
            .iter()
            .filter(|resort| contains_folded(&resort.name, &needle))
            .collect()
    };

    if sort.reorders() {
        // slice::sort_by is stable
        results.sort_by(|a, b| sort.compare(a, b));
    }

    results
}

/// Whether `name` contains `needle`, which must already be folded.
fn contains_folded(name: &str, needle: &str) -> bool {
    fold(name).contains(needle)
}

/// Fold a string for matching: lowercase, decompose, drop combining marks.
///
/// `"Kitzbühel"` and `"KITZBUHEL"` both fold to `"kitzbuhel"`.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
