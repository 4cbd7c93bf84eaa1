//! Pull-tab game library data model.
//!
//! This crate holds everything that does not touch the filesystem: raw
//! source rows, field cleaning, the derived financial metrics, category
//! indices, and the library document that the writers serialize.

pub mod categorize;
pub mod columns;
pub mod library;
pub mod metrics;
pub mod normalize;
pub mod types;

pub use categorize::{Categories, PriceBucket, PriceIndex, ProfitIndex, ProfitTier, TierIndex};
pub use library::{AdminFeatures, DEFAULT_DESCRIPTION, LibraryDocument, Metadata};
pub use metrics::{DerivedMetrics, derive_metrics};
pub use normalize::{clean_currency, clean_integer, clean_text, normalize_row};
pub use types::{CellValue, GameRecord, RawRow};
