use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use pulltab_lib::*;
use serde_json::Value;
use tempfile::TempDir;

const LIBRARY_CSV: &str = "\
Game,Form, Count ,Price,IdealProfit,URL,Notes
Crossword Cash,500,\"2,500\",$1,350,,best seller
Bonanza,12,\"1,000\",$2,$600,https://example.com/bonanza.pdf,
,,,,,,spacer row
Big Top,77,400,$5,\"1,200\",https://example.com/bigtop.pdf,
No Price,3,100,,50,,
Blank Count,4,,$1,80,,
Three Dollar,9,300,$3,250,,
";

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("RLC Base Library.csv");
    fs::write(&path, LIBRARY_CSV).unwrap();
    path
}

fn config(dir: &Path) -> RunConfig {
    let mut config = RunConfig::for_input(write_source(dir));
    config.json_output = dir.join("complete-pulltabs-library.json");
    config.script_output = dir.join("gas_pulltabs_function.js");
    config
}

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 24, 18, 0, 0).unwrap()
}

#[test]
fn json_build_produces_expected_document() {
    let tmp = TempDir::new().unwrap();
    let config = config(tmp.path());

    let outcome = run(&config, OutputMode::Json, fixed_time(), false).unwrap();
    assert_eq!(outcome.written_to.as_deref(), Some(config.json_output.as_path()));

    let doc: Value =
        serde_json::from_str(&fs::read_to_string(&config.json_output).unwrap()).unwrap();

    assert_eq!(doc["metadata"]["lastUpdated"], "2024-09-24T18:00:00.000Z");
    assert_eq!(doc["metadata"]["totalGames"], 6);
    assert_eq!(doc["metadata"]["source"], "RLC Base Library.csv");

    let crossword = &doc["games"][0];
    assert_eq!(crossword["name"], "Crossword Cash");
    assert_eq!(crossword["form"], "500");
    assert_eq!(crossword["count"], 2500);
    assert_eq!(crossword["price"], 1);
    assert_eq!(crossword["idealProfit"], 350);
    assert!(crossword["url"].is_null());
    assert_eq!(crossword["identifier"], "Crossword Cash_500");
    assert_eq!(crossword["profitMargin"], 14.0);
    assert_eq!(crossword["costBasis"], 0.86);
    assert_eq!(crossword["hasInformationalFlyer"], false);

    let cats = &doc["categories"];
    assert_eq!(
        cats["byPrice"]["$1"],
        serde_json::json!(["Crossword Cash_500", "No Price_3", "Blank Count_4"])
    );
    assert_eq!(cats["byPrice"]["$2"], serde_json::json!(["Bonanza_12"]));
    assert_eq!(cats["byPrice"]["$5"], serde_json::json!(["Big Top_77"]));
    assert_eq!(
        cats["byProfit"]["veryHigh"]["games"],
        serde_json::json!(["Bonanza_12", "Big Top_77"])
    );
    assert_eq!(cats["byProfit"]["medium"]["games"], serde_json::json!(["Three Dollar_9"]));
    assert_eq!(
        cats["withUrls"],
        serde_json::json!(["Bonanza_12", "Big Top_77"])
    );
    assert_eq!(doc["adminFeatures"]["allowCustomGames"], true);
}

#[test]
fn summary_reports_counts() {
    let tmp = TempDir::new().unwrap();
    let outcome = run(&config(tmp.path()), OutputMode::Json, fixed_time(), true).unwrap();
    let summary = &outcome.build.summary;

    assert_eq!(summary.rows_read, 7);
    assert_eq!(summary.total_games, 6);
    assert_eq!(summary.blank_names, 1);
    assert!(summary.duplicates.is_empty());
    assert_eq!(summary.with_urls, 2);
    assert_eq!(summary.without_urls, 4);
    assert_eq!(summary.unbucketed, 1);
}

#[test]
fn defaults_and_guards_apply() {
    let tmp = TempDir::new().unwrap();
    let outcome = run(&config(tmp.path()), OutputMode::Json, fixed_time(), true).unwrap();
    let library = &outcome.build.library;

    let no_price = library.game("No Price_3").unwrap();
    assert_eq!(no_price.price, 1);

    let blank_count = library.game("Blank Count_4").unwrap();
    assert_eq!(blank_count.count, 0);
    assert_eq!(blank_count.cost_basis, 0.0);
    assert_eq!(blank_count.profit_margin, 0.0);

    for game in &library.games {
        assert!(game.price >= 1);
        assert!(!game.name.is_empty());
        if game.count == 0 {
            assert_eq!(game.cost_basis, 0.0);
        }
        if game.revenue() == 0.0 {
            assert_eq!(game.profit_margin, 0.0);
        }
    }
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = config(tmp.path());
    let outcome = run(&config, OutputMode::Script, fixed_time(), true).unwrap();
    assert!(outcome.written_to.is_none());
    assert!(!config.script_output.exists());
}

#[test]
fn missing_source_aborts_without_output() {
    let tmp = TempDir::new().unwrap();
    let mut config = config(tmp.path());
    config.input = tmp.path().join("missing.csv");

    let err = run(&config, OutputMode::Json, fixed_time(), false).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Source(SourceError::SourceNotFound(_))
    ));
    assert!(!config.json_output.exists());
}

#[test]
fn bad_function_name_aborts_without_output() {
    let tmp = TempDir::new().unwrap();
    let mut config = config(tmp.path());
    config.function_name = "not valid".into();

    let err = run(&config, OutputMode::Script, fixed_time(), false).unwrap_err();
    assert!(matches!(err, PipelineError::Export(_)));
    assert!(!config.script_output.exists());
}

#[test]
fn reruns_differ_only_in_timestamp() {
    let tmp = TempDir::new().unwrap();
    let config = config(tmp.path());

    run(&config, OutputMode::Json, fixed_time(), false).unwrap();
    let first = fs::read_to_string(&config.json_output).unwrap();
    run(&config, OutputMode::Json, fixed_time(), false).unwrap();
    let second = fs::read_to_string(&config.json_output).unwrap();
    assert_eq!(first, second);

    let later = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    run(&config, OutputMode::Json, later, false).unwrap();
    let third = fs::read_to_string(&config.json_output).unwrap();
    assert_ne!(first, third);
    assert_eq!(
        first.replace("2024-09-24T18:00:00.000Z", "T"),
        third.replace("2025-01-02T03:04:05.000Z", "T")
    );

    run(&config, OutputMode::Script, fixed_time(), false).unwrap();
    let script_a = fs::read_to_string(&config.script_output).unwrap();
    run(&config, OutputMode::Script, later, false).unwrap();
    let script_b = fs::read_to_string(&config.script_output).unwrap();
    assert_eq!(script_a, script_b);
}

#[test]
fn row_dump_builds_the_same_games_as_csv() {
    let tmp = TempDir::new().unwrap();
    let config = config(tmp.path());

    let table = open_source(&config.input, SourceFormat::Auto).unwrap();
    let dump = tmp.path().join("pulltabs_data.json");
    pulltab_export::write_row_dump(&table.rows, &dump).unwrap();

    let from_csv = run(&config, OutputMode::Json, fixed_time(), true).unwrap();

    let mut dump_config = config.clone();
    dump_config.input = dump;
    let from_dump = run(&dump_config, OutputMode::Json, fixed_time(), true).unwrap();

    assert_eq!(from_csv.build.library.games, from_dump.build.library.games);
    assert_eq!(
        from_csv.build.library.categories,
        from_dump.build.library.categories
    );
    assert_eq!(from_dump.build.library.metadata.source, "pulltabs_data.json");
}

#[test]
fn source_label_override() {
    let tmp = TempDir::new().unwrap();
    let mut config = config(tmp.path());
    config.source_label = Some("RLC Bingo Event Pull Tab Games Base Library.xlsx".into());
    config.description = "Seed library".into();

    let outcome = run(&config, OutputMode::Json, fixed_time(), true).unwrap();
    let metadata = &outcome.build.library.metadata;
    assert_eq!(metadata.source, "RLC Bingo Event Pull Tab Games Base Library.xlsx");
    assert_eq!(metadata.description, "Seed library");
}

#[test]
fn settings_file_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");

    let mut settings = LibrarySettings::with_defaults();
    settings.input = Some(PathBuf::from("Base Library.csv"));
    settings.save(&path, false).unwrap();

    assert!(matches!(
        settings.save(&path, false),
        Err(SettingsError::AlreadyExists(_))
    ));
    settings.save(&path, true).unwrap();

    let loaded = LibrarySettings::load(Some(&path)).unwrap();
    assert_eq!(loaded, settings);

    let missing = tmp.path().join("nope.toml");
    assert!(matches!(
        LibrarySettings::load(Some(&missing)),
        Err(SettingsError::NotFound(_))
    ));
}

#[test]
fn workbook_source_builds_library() {
    let tmp = TempDir::new().unwrap();
    let workbook = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../pulltab-source/tests/fixtures/base_library.xlsx");
    let mut config = RunConfig::for_input(workbook);
    config.json_output = tmp.path().join("complete-pulltabs-library.json");

    let outcome = run(&config, OutputMode::Json, fixed_time(), false).unwrap();
    let library = &outcome.build.library;
    assert_eq!(library.metadata.source, "base_library.xlsx");
    assert_eq!(library.metadata.total_games, 3);
    assert_eq!(
        library.categories.by_price.five,
        vec!["Café Cash_7".to_string()]
    );
    assert!(config.json_output.exists());
}

#[test]
fn fixed_timestamp_embeds_build_time_in_script() {
    let tmp = TempDir::new().unwrap();
    let mut config = config(tmp.path());

    run(&config, OutputMode::Script, fixed_time(), false).unwrap();
    let runtime = fs::read_to_string(&config.script_output).unwrap();
    assert!(runtime.contains("lastUpdated: new Date().toISOString(),"));

    config.fixed_timestamp = true;
    run(&config, OutputMode::Script, fixed_time(), false).unwrap();
    let fixed = fs::read_to_string(&config.script_output).unwrap();
    assert!(fixed.contains("lastUpdated: \"2024-09-24T18:00:00.000Z\","));
    assert!(!fixed.contains("new Date()"));
}
