use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLIGHTS: &str = "\
Date,Airline,Flight,From,To
2024-03-01,UAL,UA 1410,ABQ,DEN
2024-03-01,UAL,UA 31,DEN,LHR
2024-03-12,UAL,UA 30,LHR,DEN
2024-03-13,UAL,UA 1411,DEN,ABQ
2024-06-20,SWA,WN 200,ABQ,PHX
not,a,row
";

const EXPENSES: &str = r#"[
  {"Expense": "Flights", "Category": "Round trip", "Cost": "$1,450.00", "Trip": "London"},
  {"Expense": "Hotel", "Category": "Five nights", "Cost": "$900", "Trip": "London"},
  {"Expense": "Food", "Category": "", "Cost": "$210.40", "Trip": "London"},
  {"Expense": "Flights", "Category": "", "Cost": "$320", "Trip": "Phoenix"},
  {"Expense": "Parking", "Category": "", "Cost": "$40", "Trip": ""}
]"#;

fn wayfarer(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wayfarer").unwrap();
    cmd.env("WAYFARER_DATA_DIR", data_dir).env_remove("RUST_LOG");
    cmd
}

fn with_sources() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("flights.csv"), FLIGHTS).unwrap();
    fs::write(data.join("expenses.json"), EXPENSES).unwrap();
    temp_dir
}

#[test]
fn flights_stats() {
    let temp_dir = with_sources();

    wayfarer(temp_dir.path())
        .args(["flights", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight Statistics"))
        .stdout(predicate::str::contains("Most frequent route"))
        .stdout(predicate::str::contains("United Airlines (4 flights)"))
        .stdout(predicate::str::contains("United Kingdom"));
}

#[test]
fn flights_overview_counts_connecting_legs() {
    let temp_dir = with_sources();

    wayfarer(temp_dir.path())
        .args(["flights", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("International Travel Overview"))
        .stdout(predicate::str::is_match(r"Connecting flights:\s+2").unwrap())
        .stdout(predicate::str::contains("United Kingdom, United States"));
}

#[test]
fn flights_list_international_only() {
    let temp_dir = with_sources();

    wayfarer(temp_dir.path())
        .args(["flights", "list", "--international"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEN → LHR"))
        .stdout(predicate::str::contains("ABQ → PHX").not())
        .stdout(predicate::str::contains("2 flight(s)"));
}

#[test]
fn flights_map_writes_json() {
    let temp_dir = with_sources();
    let output = temp_dir.path().join("map.json");

    wayfarer(temp_dir.path())
        .args(["flights", "map", "--output"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["routes"].as_array().unwrap().len(), 4);
    // Same-day flights keep international before connecting
    assert_eq!(json["routes"][0]["color"], "#a85c5c");
    assert_eq!(json["routes"][1]["color"], "#4a8585");
}

#[test]
fn flights_distance_needs_no_source() {
    let temp_dir = TempDir::new().unwrap();

    wayfarer(temp_dir.path())
        .args(["flights", "distance", "abq", "den"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABQ → DEN: 349 miles"));

    wayfarer(temp_dir.path())
        .args(["flights", "distance", "ABQ", "ZZZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZZZ is not in the airport directory"))
        .stdout(predicate::str::contains(": 0 miles"));
}

#[test]
fn missing_flight_history_fails_with_hint() {
    let temp_dir = TempDir::new().unwrap();

    wayfarer(temp_dir.path())
        .args(["flights", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Flight history unavailable"))
        .stderr(predicate::str::contains("--flights"));
}

#[test]
fn flights_override_path() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("elsewhere.csv");
    fs::write(&custom, "Date,Airline,Flight,From,To\n2024-01-01,FIN,AY 1,HEL,RVN\n").unwrap();

    wayfarer(temp_dir.path())
        .args(["flights", "stats", "--flights"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("Finnair (1 flights)"));
}

#[test]
fn expenses_summary() {
    let temp_dir = with_sources();

    // (2560.40 + 320 + 40) / 2 trips
    wayfarer(temp_dir.path())
        .args(["expenses", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average per trip: $1,460"))
        .stdout(predicate::str::contains("Total spent:      $2,920"))
        .stdout(predicate::str::contains("Trips:            2"));
}

#[test]
fn expenses_summary_csv() {
    let temp_dir = with_sources();
    let output = temp_dir.path().join("trips.csv");

    wayfarer(temp_dir.path())
        .args(["expenses", "summary", "-o"])
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Trip,Category,Total,Count\n"));
    assert!(csv.contains("London,Flights,1450.00,1\n"));
    assert!(csv.contains("Phoenix,Flights,320.00,1\n"));
}

#[test]
fn expenses_trip_detail() {
    let temp_dir = with_sources();

    wayfarer(temp_dir.path())
        .args(["expenses", "trip", "London"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip: London"))
        .stdout(predicate::str::contains("3 expenses across 3 categories, $2,560 total"))
        .stdout(predicate::str::contains("56.6%"));
}

#[test]
fn expenses_unknown_trip() {
    let temp_dir = with_sources();

    wayfarer(temp_dir.path())
        .args(["expenses", "trip", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip not found: Atlantis"));
}

#[test]
fn expenses_from_csv_ledger() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.csv");
    fs::write(
        &ledger,
        "Expense,Category,Cost,Points,Amount Paid,Notes,Trip\nHotel,,\"$1,000\",,,,Kyoto\n",
    )
    .unwrap();

    wayfarer(temp_dir.path())
        .args(["expenses", "trips", "--expenses"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyoto"))
        .stdout(predicate::str::contains("$1,000.00"));
}

#[test]
fn export_json_with_only_expenses() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("expenses.json"), EXPENSES).unwrap();
    let output = temp_dir.path().join("export.json");

    wayfarer(temp_dir.path())
        .arg("export")
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert!(json.get("flights").is_none());
    assert_eq!(json["expenses"]["trips"].as_array().unwrap().len(), 2);
}

#[test]
fn export_csv_flights() {
    let temp_dir = with_sources();
    let output = temp_dir.path().join("flights-out.csv");

    wayfarer(temp_dir.path())
        .arg("export")
        .arg(&output)
        .args(["--format", "csv"])
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with(
        "Date,Airline,Flight,From,To,Distance (mi),International,Connecting\n"
    ));
    assert!(csv.contains("2024-03-01,UAL,UA 1410,ABQ,DEN,349,No,Yes\n"));
}

#[test]
fn init_then_config() {
    let temp_dir = TempDir::new().unwrap();

    wayfarer(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("data").is_dir());

    wayfarer(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:     true"))
        .stdout(predicate::str::contains("Connecting window: 24 hours"));
}
