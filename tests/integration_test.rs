//! End-to-end tests: catalog file on disk, progress saved in a data directory,
//! derived views and export read back from JSON.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{tempdir, NamedTempFile};

use remodel_planner::catalog::{load_catalog, parse_catalog, Catalog, CatalogSource, BUNDLED_CATALOG};
use remodel_planner::export::export_snapshot;
use remodel_planner::schema::{Language, SHIP_GROUPS};
use remodel_planner::state::{AppState, Event};
use remodel_planner::store::{FileStorage, Flag, OverrideStore, Storage, STORAGE_KEY};
use remodel_planner::view::{aggregate_materials, filter_for_group, MaterialTotals};

// =============================================================================
// Fixtures
// =============================================================================

const CATALOG_TEXT: &str = "\
S001,Fubuki,吹雪,후부키,DD,2,1,2,0,0,0,0,1,0,0,0,0
S002,Nagato,長門,나가토,BB,88,2,1,0
this,row,is,too,short
S003,Shoukaku,翔鶴,쇼카쿠,CV,80,1,1,1
S004,Mogami,最上,모가미,CAV,88,1,0,1

S005,Shimushu,占守,시무슈,DE,30
S006,Mystery,謎,미스터리,ZZ,1,9,9,9
";

/// Catalog shared by the read-only tests
static CATALOG: Lazy<Catalog> = Lazy::new(|| parse_catalog(CATALOG_TEXT));

fn write_catalog(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(text.as_bytes()).expect("Failed to write catalog");
    file
}

fn open_state(data_dir: &Path, catalog_path: &Path) -> AppState<FileStorage> {
    let storage = FileStorage::new(Some(data_dir.to_path_buf())).expect("Failed to open storage");
    let catalog = load_catalog(&CatalogSource::File(catalog_path.to_path_buf()));
    let mut state = AppState::new(storage, Language::En);
    state.apply(Event::CatalogLoaded(catalog));
    state
}

fn toggle(state: &mut AppState<FileStorage>, id: &str, flag: Flag) {
    state.apply(Event::Toggle {
        id: id.to_string(),
        flag,
    });
}

// =============================================================================
// Catalog Loading
// =============================================================================

#[test]
fn test_catalog_counts_rows_with_enough_columns() {
    let expected = CATALOG_TEXT
        .trim()
        .split('\n')
        .filter(|line| line.split(',').count() >= 6)
        .count();
    assert_eq!(CATALOG.len(), expected);
    assert_eq!(CATALOG.len(), 6);

    for (ship, line) in CATALOG.iter().zip(
        CATALOG_TEXT
            .trim()
            .split('\n')
            .filter(|line| line.split(',').count() >= 6),
    ) {
        assert_eq!(ship.id, line.split(',').next().unwrap().trim());
    }
}

#[test]
fn test_catalog_from_file_matches_text() {
    let file = write_catalog(CATALOG_TEXT);
    let catalog = load_catalog(&CatalogSource::File(file.path().to_path_buf()));
    assert_eq!(catalog, *CATALOG);
}

#[test]
fn test_unreachable_sources_give_empty_catalog() {
    let dir = tempdir().unwrap();
    let missing = CatalogSource::File(dir.path().join("missing.csv"));
    assert!(load_catalog(&missing).is_empty());

    // Nothing listens on port 9 of localhost
    let url = CatalogSource::Url("http://127.0.0.1:9/ships.csv".to_string());
    assert!(load_catalog(&url).is_empty());
}

#[test]
fn test_bundled_catalog_is_fully_grouped() {
    let catalog = parse_catalog(BUNDLED_CATALOG);
    assert_eq!(catalog.len(), BUNDLED_CATALOG.trim().lines().count());
    for ship in &catalog {
        assert!(
            SHIP_GROUPS.iter().any(|g| g.contains(&ship.ship_type)),
            "{} has ungrouped type {}",
            ship.id,
            ship.ship_type
        );
    }
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_progress_survives_restart() {
    let data_dir = tempdir().unwrap();
    let catalog_file = write_catalog(CATALOG_TEXT);

    {
        let mut state = open_state(data_dir.path(), catalog_file.path());
        toggle(&mut state, "S001", Flag::RemodelDone);
        toggle(&mut state, "S002", Flag::NotOwned);
        toggle(&mut state, "S002", Flag::LevelingDone);
        toggle(&mut state, "S002", Flag::LevelingDone);
    }

    let state = open_state(data_dir.path(), catalog_file.path());
    assert!(state.entry("S001").remodel_done);
    assert!(state.entry("S002").not_owned);
    assert!(!state.entry("S002").leveling_done);
    assert_eq!(state.entry("S003"), Default::default());
}

#[test]
fn test_persisted_format() {
    let data_dir = tempdir().unwrap();
    let catalog_file = write_catalog(CATALOG_TEXT);
    let mut state = open_state(data_dir.path(), catalog_file.path());
    toggle(&mut state, "S003", Flag::RemodelDone);

    let path = data_dir.path().join(format!("{}.json", STORAGE_KEY));
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "S003": { "remodelDone": true } }));
}

#[test]
fn test_corrupt_progress_file_starts_empty() {
    let data_dir = tempdir().unwrap();
    fs::write(data_dir.path().join(format!("{}.json", STORAGE_KEY)), "{{{").unwrap();

    let storage = FileStorage::new(Some(data_dir.path().to_path_buf())).unwrap();
    let mut store = OverrideStore::open(storage);
    assert!(store.overrides().is_empty());

    // The next toggle replaces the corrupt file
    store.toggle("S001", Flag::NotOwned);
    let storage = FileStorage::new(Some(data_dir.path().to_path_buf())).unwrap();
    assert!(storage.read(STORAGE_KEY).unwrap().contains("notOwned"));
}

// =============================================================================
// Derived Views
// =============================================================================

#[test]
fn test_totals_track_remodel_toggles() {
    let data_dir = tempdir().unwrap();
    let catalog_file = write_catalog(CATALOG_TEXT);
    let mut state = open_state(data_dir.path(), catalog_file.path());

    let full = state.totals();
    assert_eq!(
        full,
        MaterialTotals {
            blueprint: 14,
            report: 13,
            catapult: 11
        }
    );

    toggle(&mut state, "S002", Flag::RemodelDone);
    assert_eq!(state.totals().blueprint, full.blueprint - 2);
    assert_eq!(state.totals().report, full.report - 1);

    toggle(&mut state, "S002", Flag::RemodelDone);
    assert_eq!(state.totals(), full);
}

#[test]
fn test_totals_are_order_independent() {
    let mut overrides = remodel_planner::store::Overrides::default();
    overrides.toggle("S003", Flag::RemodelDone);
    let expected = aggregate_materials(&CATALOG, &overrides);

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut ships = CATALOG.ships().to_vec();
    for _ in 0..20 {
        ships.shuffle(&mut rng);
        let shuffled = Catalog::from(ships.clone());
        assert_eq!(aggregate_materials(&shuffled, &overrides), expected);
    }
}

#[test]
fn test_incomplete_filter_across_groups() {
    let mut overrides = remodel_planner::store::Overrides::default();
    overrides.toggle("S004", Flag::RemodelDone);
    overrides.toggle("S001", Flag::NotOwned);

    for group in SHIP_GROUPS {
        let all = filter_for_group(group, &CATALOG, &overrides, false);
        let incomplete = filter_for_group(group, &CATALOG, &overrides, true);

        assert!(all.iter().all(|s| group.contains(&s.ship_type)));
        assert_eq!(
            all.len(),
            CATALOG.iter().filter(|s| group.contains(&s.ship_type)).count()
        );
        assert!(incomplete.iter().all(|s| !overrides.get(&s.id).remodel_done));
    }
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_reflects_saved_progress() {
    let data_dir = tempdir().unwrap();
    let catalog_file = write_catalog(CATALOG_TEXT);
    let mut state = open_state(data_dir.path(), catalog_file.path());
    toggle(&mut state, "S001", Flag::RemodelDone);
    state.apply(Event::ToggleIncompleteFilter);

    let output = data_dir.path().join("plan.json");
    let count = export_snapshot(&state, &output).unwrap();
    // S001 hidden, S006 has no group
    assert_eq!(count, 4);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let titles: Vec<_> = value["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["BB/BC", "CV/CVL", "CA", "DE"]);
    assert_eq!(value["totals"]["blueprint"], 13);
}
