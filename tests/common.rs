#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ob() -> Command {
    cargo_bin_cmd!("opsboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_opsboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const FEED: &str = r#"[
  {
    "opId": 1,
    "publicId": "OP-0001",
    "opTitle": "Forklift Loading",
    "opDate": "2025-03-14",
    "filledQuantity": 2,
    "operatorsNeeded": 3,
    "startTime": "2025-03-14T08:00:00",
    "endTime": "2025-03-14T16:30:00",
    "estTotalHours": 8.5,
    "checkInCode": "AB12",
    "checkOutCode": "XY99",
    "checkInExpirationTime": "2025-03-14T09:00:00",
    "checkOutExpirationTime": "2025-03-14T17:30:00",
    "operators": [
      {"id": 7, "firstName": "Dana", "lastName": "Reyes", "opsCompleted": 12,
       "reliability": 0.876, "endorsements": ["Forklift", "Punctual"]},
      {"id": 8, "firstName": "alex", "lastName": "Brooks", "opsCompleted": 30,
       "reliability": 0.95, "endorsements": []}
    ]
  },
  {
    "opId": 2,
    "publicId": "OP-0002",
    "opTitle": "Warehouse Packing",
    "opDate": "2025-03-15",
    "filledQuantity": 1,
    "operatorsNeeded": 1,
    "startTime": "2025-03-15T09:00:00",
    "endTime": "2025-03-15T13:00:00",
    "estTotalHours": 4,
    "checkInCode": "PK01",
    "checkOutCode": "PK02",
    "checkInExpirationTime": "2025-03-15T10:00:00",
    "checkOutExpirationTime": "2025-03-15T14:00:00",
    "operators": [
      {"id": 9, "firstName": "Lee", "lastName": "Chan", "opsCompleted": 5,
       "reliability": 0.6, "endorsements": ["Packing"]}
    ]
  }
]"#;

/// Write the fixture feed to a temp JSON file and return its path
pub fn write_feed(name: &str) -> String {
    let path = temp_out(&format!("{}_feed", name), "json");
    fs::write(&path, FEED).expect("write feed fixture");
    path
}

/// Fresh DB (initialized in test mode) plus the fixture feed
pub fn setup(name: &str) -> (String, String) {
    let db = setup_test_db(name);
    let feed = write_feed(name);

    ob().args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    (db, feed)
}
