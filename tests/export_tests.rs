use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_db, temp_out, wt};

#[test]
fn test_export_csv_layout() {
    let db_path = setup_test_db("export_csv");
    common::init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    wt().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert!(lines[0].starts_with("Giorno,SmartWorking,Entrata 1"));
    assert!(lines[1].starts_with("Lunedì,No,07:25,12:22,13:10,16:32"));
    // Five day rows after the header.
    assert!(lines[5].starts_with("Venerdì,"));
    assert!(content.contains("TOTALE SCARTO"));
}

#[test]
fn test_export_csv_smartworking_row() {
    let db_path = setup_test_db("export_csv_sw");
    wt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    wt().args(["--db", &db_path, "set", "wed", "--smart"])
        .assert()
        .success();

    let out = temp_out("export_csv_sw", "csv");
    wt().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Mercoledì,Sì,,,,"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    common::init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "pre-existing").unwrap();

    wt().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    wt().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Giorno,"));
}

#[test]
fn test_export_json_document() {
    let db_path = setup_test_db("export_json");
    common::init_db_with_data(&db_path);

    wt().args(["--db", &db_path, "permit", "tue", "add"])
        .assert()
        .success();

    let out = temp_out("export_json", "json");
    wt().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let days = doc["days"].as_array().unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[0]["day"], "Lunedì");
    assert_eq!(days[0]["entry1"], "07:25");
    assert_eq!(days[0]["balance_minutes"], 0);
    // 07:25 on-grid, 12:22 loses 2, 13:10 on-grid, 16:32 loses 2.
    assert_eq!(days[0]["rubato_minutes"], 4);
    assert_eq!(days[1]["permit"], "00:30");
    // Tuesday has only the permit entered: 30' against a standard day.
    assert_eq!(days[1]["balance_minutes"], -450);
    assert_eq!(doc["total_balance_minutes"], -450);
}

#[test]
fn test_export_rejects_unknown_format() {
    let db_path = setup_test_db("export_bad_fmt");
    common::init_db_with_data(&db_path);

    wt().args(["--db", &db_path, "export", "--format", "xlsx"])
        .assert()
        .failure();
}
