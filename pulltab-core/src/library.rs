//! The library document: metadata, category indices, games, and the
//! admin feature flags the web application reads on first load.

use serde::{Deserialize, Serialize};

use crate::categorize::Categories;
use crate::types::GameRecord;

pub const DEFAULT_DESCRIPTION: &str =
    "Complete curated pull-tab games library with informational URLs";

/// The `metadata` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// ISO-8601 timestamp of the build. The only field that changes between
    /// runs on the same input.
    pub last_updated: String,
    pub total_games: usize,
    /// Label of the source file, usually its file name.
    pub source: String,
    pub description: String,
}

/// Feature flags shipped with every library. Static configuration, not data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminFeatures {
    pub allow_custom_games: bool,
    pub allow_price_modification: bool,
    pub allow_profit_adjustment: bool,
    pub require_url_validation: bool,
    pub supports_bulk_import: bool,
    pub supports_export: bool,
    pub audit_trail: bool,
}

impl AdminFeatures {
    pub const STANDARD: AdminFeatures = AdminFeatures {
        allow_custom_games: true,
        allow_price_modification: true,
        allow_profit_adjustment: true,
        require_url_validation: false,
        supports_bulk_import: true,
        supports_export: true,
        audit_trail: true,
    };
}

impl Default for AdminFeatures {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The serialization root handed to a library writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDocument {
    pub metadata: Metadata,
    pub categories: Categories,
    pub games: Vec<GameRecord>,
    pub admin_features: AdminFeatures,
}

impl LibraryDocument {
    /// Assemble a document from finished game records.
    ///
    /// `totalGames` is always the length of `games`; categories are built
    /// in game order.
    pub fn assemble(
        games: Vec<GameRecord>,
        source: impl Into<String>,
        description: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        let categories = Categories::from_games(&games);
        let metadata = Metadata {
            last_updated: last_updated.into(),
            total_games: games.len(),
            source: source.into(),
            description: description.into(),
        };

        Self {
            metadata,
            categories,
            games,
            admin_features: AdminFeatures::STANDARD,
        }
    }

    /// Find a game by identifier.
    pub fn game(&self, identifier: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.identifier == identifier)
    }

    /// Games whose price falls outside the `$1`/`$2`/`$5` buckets.
    pub fn unbucketed_games(&self) -> impl Iterator<Item = &GameRecord> {
        self.games
            .iter()
            .filter(|g| crate::categorize::PriceBucket::for_price(g.price).is_none())
    }
}

#[cfg(test)]
#[path = "tests/library_tests.rs"]
mod tests;
