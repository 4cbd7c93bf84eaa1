//! Category indices: price buckets, profit tiers, and URL availability.
//!
//! Each index holds game identifiers in the order the games were added.
//! A game lands in at most one price bucket, exactly one profit tier, and
//! exactly one of the URL lists.

use serde::{Deserialize, Serialize};

use crate::types::GameRecord;

// ── Price buckets ───────────────────────────────────────────────────────────

/// The fixed ticket-price buckets. Prices outside these are not indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    One,
    Two,
    Five,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 3] = [PriceBucket::One, PriceBucket::Two, PriceBucket::Five];

    pub fn for_price(price: u64) -> Option<Self> {
        match price {
            1 => Some(PriceBucket::One),
            2 => Some(PriceBucket::Two),
            5 => Some(PriceBucket::Five),
            _ => None,
        }
    }

    /// Document key, e.g. `"$1"`.
    pub fn key(self) -> &'static str {
        match self {
            PriceBucket::One => "$1",
            PriceBucket::Two => "$2",
            PriceBucket::Five => "$5",
        }
    }
}

/// Identifiers grouped by ticket price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceIndex {
    #[serde(rename = "$1")]
    pub one: Vec<String>,
    #[serde(rename = "$2")]
    pub two: Vec<String>,
    #[serde(rename = "$5")]
    pub five: Vec<String>,
}

impl PriceIndex {
    pub fn bucket(&self, bucket: PriceBucket) -> &[String] {
        match bucket {
            PriceBucket::One => &self.one,
            PriceBucket::Two => &self.two,
            PriceBucket::Five => &self.five,
        }
    }

    fn bucket_mut(&mut self, bucket: PriceBucket) -> &mut Vec<String> {
        match bucket {
            PriceBucket::One => &mut self.one,
            PriceBucket::Two => &mut self.two,
            PriceBucket::Five => &mut self.five,
        }
    }
}

// ── Profit tiers ────────────────────────────────────────────────────────────

/// Ideal-profit tiers. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfitTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ProfitTier {
    pub const ALL: [ProfitTier; 4] = [
        ProfitTier::Low,
        ProfitTier::Medium,
        ProfitTier::High,
        ProfitTier::VeryHigh,
    ];

    pub fn for_profit(ideal_profit: i64) -> Self {
        if ideal_profit <= 100 {
            ProfitTier::Low
        } else if ideal_profit <= 300 {
            ProfitTier::Medium
        } else if ideal_profit <= 500 {
            ProfitTier::High
        } else {
            ProfitTier::VeryHigh
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ProfitTier::Low => "low",
            ProfitTier::Medium => "medium",
            ProfitTier::High => "high",
            ProfitTier::VeryHigh => "veryHigh",
        }
    }

    /// Human-readable range label stored alongside the tier's games.
    pub fn range(self) -> &'static str {
        match self {
            ProfitTier::Low => "0-100",
            ProfitTier::Medium => "101-300",
            ProfitTier::High => "301-500",
            ProfitTier::VeryHigh => "500+",
        }
    }
}

/// One profit tier: its range label and member identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierIndex {
    pub range: String,
    pub games: Vec<String>,
}

impl TierIndex {
    fn empty(tier: ProfitTier) -> Self {
        Self {
            range: tier.range().to_string(),
            games: Vec::new(),
        }
    }
}

/// Identifiers grouped by profit tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitIndex {
    pub low: TierIndex,
    pub medium: TierIndex,
    pub high: TierIndex,
    pub very_high: TierIndex,
}

impl Default for ProfitIndex {
    fn default() -> Self {
        Self {
            low: TierIndex::empty(ProfitTier::Low),
            medium: TierIndex::empty(ProfitTier::Medium),
            high: TierIndex::empty(ProfitTier::High),
            very_high: TierIndex::empty(ProfitTier::VeryHigh),
        }
    }
}

impl ProfitIndex {
    pub fn tier(&self, tier: ProfitTier) -> &TierIndex {
        match tier {
            ProfitTier::Low => &self.low,
            ProfitTier::Medium => &self.medium,
            ProfitTier::High => &self.high,
            ProfitTier::VeryHigh => &self.very_high,
        }
    }

    fn tier_mut(&mut self, tier: ProfitTier) -> &mut TierIndex {
        match tier {
            ProfitTier::Low => &mut self.low,
            ProfitTier::Medium => &mut self.medium,
            ProfitTier::High => &mut self.high,
            ProfitTier::VeryHigh => &mut self.very_high,
        }
    }
}

// ── Categories ──────────────────────────────────────────────────────────────

/// The `categories` section of the library document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub by_price: PriceIndex,
    pub by_profit: ProfitIndex,
    pub with_urls: Vec<String>,
    pub without_urls: Vec<String>,
}

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build indices for a list of games, preserving their order.
    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut categories = Self::new();
        for game in games {
            categories.add(game);
        }
        categories
    }

    /// Index one game in every dimension.
    pub fn add(&mut self, game: &GameRecord) {
        let id = &game.identifier;

        if let Some(bucket) = PriceBucket::for_price(game.price) {
            self.by_price.bucket_mut(bucket).push(id.clone());
        }

        let tier = ProfitTier::for_profit(game.ideal_profit);
        self.by_profit.tier_mut(tier).games.push(id.clone());

        if game.url.is_some() {
            self.with_urls.push(id.clone());
        } else {
            self.without_urls.push(id.clone());
        }
    }
}

#[cfg(test)]
#[path = "tests/categorize_tests.rs"]
mod tests;
