//! Plain-text formatting shared by the CLI's summary and inspect output.

use pulltab_core::{GameRecord, RawRow};

/// Render a raw row as `{'Game': 'Lucky 7s', 'Count': 2500, 'URL': None}`.
pub fn format_row(row: &RawRow) -> String {
    let cells: Vec<String> = row
        .cells()
        .iter()
        .map(|(header, value)| format!("'{header}': {value}"))
        .collect();
    format!("{{{}}}", cells.join(", "))
}

/// One-line description of a game for the post-build preview:
/// `Crossword Cash (500) - 2500 @ $1 = $350 profit - URL: false`.
pub fn format_game_line(game: &GameRecord) -> String {
    format!(
        "{} ({}) - {} @ ${} = ${} profit - URL: {}",
        game.name,
        game.form.as_deref().unwrap_or("None"),
        game.count,
        game.price,
        game.ideal_profit,
        game.has_informational_flyer,
    )
}
