//! Source column names the normalizer looks up.
//!
//! Lookups compare trimmed header text, so `" Count "` in a hand-edited
//! spreadsheet still resolves to [`COUNT`].

pub const GAME: &str = "Game";
pub const FORM: &str = "Form";
pub const COUNT: &str = "Count";
pub const PRICE: &str = "Price";
pub const IDEAL_PROFIT: &str = "IdealProfit";
pub const URL: &str = "URL";
