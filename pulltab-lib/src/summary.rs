//! Informational counts printed after a build.

use pulltab_core::{LibraryDocument, PriceBucket};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildSummary {
    /// Data rows in the source, header excluded.
    pub rows_read: usize,
    pub total_games: usize,
    pub blank_names: usize,
    pub duplicates: Vec<String>,
    pub with_urls: usize,
    pub without_urls: usize,
    /// Games in the `$1`, `$2` and `$5` buckets, in that order.
    pub price_buckets: Vec<(PriceBucket, usize)>,
    /// Games priced outside the fixed buckets.
    pub unbucketed: usize,
}

impl BuildSummary {
    pub fn new(
        library: &LibraryDocument,
        rows_read: usize,
        blank_names: usize,
        duplicates: Vec<String>,
    ) -> Self {
        let cats = &library.categories;
        Self {
            rows_read,
            total_games: library.games.len(),
            blank_names,
            duplicates,
            with_urls: cats.with_urls.len(),
            without_urls: cats.without_urls.len(),
            price_buckets: PriceBucket::ALL
                .iter()
                .map(|b| (*b, cats.by_price.bucket(*b).len()))
                .collect(),
            unbucketed: library.unbucketed_games().count(),
        }
    }
}
