use anyhow::Result;
use assert_cmd::prelude::*;
use duckdb::Connection;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing the crashlens test environment: an isolated
/// project directory seeded with the default DB layout.
struct AuditTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl AuditTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        Ok(Self { _tmp: tmp, root })
    }

    /// Seeds the default database with a 3-row collisions table:
    /// one row with no geo/borough data, clean timestamps everywhere.
    fn seed_db(&self) -> Result<()> {
        let db_path = self.root.join("data/clean/data.db");
        std::fs::create_dir_all(db_path.parent().expect("db path has a parent"))?;
        let conn = Connection::open(&db_path)?;
        conn.execute_batch(
            "CREATE TABLE collisions_clean (
                crash_datetime TIMESTAMP,
                number_of_persons_injured BIGINT,
                number_of_persons_killed BIGINT,
                latitude DOUBLE,
                longitude DOUBLE,
                borough VARCHAR
            );
            INSERT INTO collisions_clean VALUES
                ('2024-01-01 10:00:00', 1, 0, 40.7, -74.0, 'BROOKLYN'),
                ('2024-02-01 11:30:00', 0, 0, NULL, NULL, NULL),
                ('2024-03-01 12:00:00', 2, 1, 40.6, -73.9, 'QUEENS');",
        )?;
        Ok(())
    }

    fn crashlens(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crashlens"));
        cmd.current_dir(&self.root);
        cmd
    }

    fn report_content(&self) -> Result<String> {
        Ok(std::fs::read_to_string(
            self.root.join("data/clean/data_quality_report.txt"),
        )?)
    }
}

#[test]
fn test_report_renders_console_and_file() -> Result<()> {
    let env = AuditTestEnv::new()?;
    env.seed_db()?;

    env.crashlens()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("NYC COLLISIONS DATA QUALITY REPORT"))
        .stdout(predicate::str::contains("Total Records: 3"))
        .stdout(predicate::str::contains("Total Columns: 6"))
        .stdout(predicate::str::contains(
            "[OK] Crash DateTime NULL Check: 0 NULL values (Expected: 0)",
        ))
        .stdout(predicate::str::contains(
            "[OK] Negative Injury Counts: 0 (Expected: 0)",
        ))
        .stdout(predicate::str::contains(
            "[OK] Geographic Data: 66.67% complete (2 records with lat/long)",
        ))
        .stdout(predicate::str::contains("Total Injuries: 3"))
        .stdout(predicate::str::contains("Total Fatalities: 1"))
        .stdout(predicate::str::contains("Average Injuries per Crash: 1.00"))
        .stdout(predicate::str::contains("Unique Boroughs: 2"))
        .stdout(predicate::str::contains("OVERALL DATA QUALITY SCORE:"));

    // The file artifact carries the same document the console showed
    let content = env.report_content()?;
    assert!(content.starts_with(&"=".repeat(60)));
    assert!(content.contains("Total Records: 3"));
    assert!(content.ends_with(&"=".repeat(60)));

    // 3 of 6 columns are fully complete (crash_datetime, injured, killed)
    assert!(content.contains("OVERALL DATA QUALITY SCORE: 50.0%"));
    assert!(content.contains("(3/6 columns with >=95% completeness)"));

    // Borough column: 2 of 3 rows -> WARN
    assert!(content.contains("[WARN] borough"));
    assert!(content.contains("   Completeness: 66.67% (2 non-null, 1 null)"));
    Ok(())
}

#[test]
fn test_report_is_idempotent() -> Result<()> {
    let env = AuditTestEnv::new()?;
    env.seed_db()?;

    env.crashlens().arg("report").assert().success();
    let first = env.report_content()?;

    env.crashlens().arg("report").assert().success();
    let second = env.report_content()?;

    assert_eq!(first, second, "reruns must be byte-identical");
    Ok(())
}

#[test]
fn test_report_fails_without_database() -> Result<()> {
    let env = AuditTestEnv::new()?;

    env.crashlens()
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database not found"));
    Ok(())
}

#[test]
fn test_report_fails_on_missing_table() -> Result<()> {
    let env = AuditTestEnv::new()?;
    let db_path = env.root.join("data/clean/data.db");
    std::fs::create_dir_all(db_path.parent().expect("db path has a parent"))?;
    let conn = Connection::open(&db_path)?;
    conn.execute_batch("CREATE TABLE something_else (x INTEGER);")?;

    // No partial report may survive a failed run
    env.crashlens().arg("report").assert().failure();
    assert!(!env.root.join("data/clean/data_quality_report.txt").exists());
    Ok(())
}

#[test]
fn test_report_on_empty_table() -> Result<()> {
    let env = AuditTestEnv::new()?;
    let db_path = env.root.join("data/clean/data.db");
    std::fs::create_dir_all(db_path.parent().expect("db path has a parent"))?;
    let conn = Connection::open(&db_path)?;
    conn.execute_batch(
        "CREATE TABLE collisions_clean (crash_datetime TIMESTAMP, \
         number_of_persons_injured BIGINT, number_of_persons_killed BIGINT, \
         latitude DOUBLE, longitude DOUBLE, borough VARCHAR);",
    )?;

    env.crashlens()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Records: 0"))
        .stdout(predicate::str::contains("Date Range: no rows (table is empty)"))
        .stdout(predicate::str::contains("OVERALL DATA QUALITY SCORE: 0.0%"));
    Ok(())
}

#[test]
fn test_load_then_report_round_trip() -> Result<()> {
    let env = AuditTestEnv::new()?;
    let raw = env.root.join("data/raw/sample.csv");
    std::fs::create_dir_all(raw.parent().expect("raw path has a parent"))?;
    std::fs::write(
        &raw,
        "crash_datetime,number_of_persons_injured,number_of_persons_killed,latitude,longitude,borough\n\
         2024-01-01 10:00:00,1,0,40.7,-74.0,BROOKLYN\n\
         2024-02-01 11:30:00,0,0,,,\n",
    )?;

    env.crashlens()
        .arg("load")
        .arg("--file")
        .arg("data/raw/sample.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 rows into 'collisions_clean'"));

    env.crashlens()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Records: 2"));
    Ok(())
}

#[test]
fn test_load_fails_on_missing_file() -> Result<()> {
    let env = AuditTestEnv::new()?;

    env.crashlens()
        .arg("load")
        .arg("--file")
        .arg("data/raw/nope.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Raw file not found"));
    Ok(())
}

#[test]
fn test_inspect_prints_schema() -> Result<()> {
    let env = AuditTestEnv::new()?;
    env.seed_db()?;

    env.crashlens()
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspecting Table: 'collisions_clean'"))
        .stdout(predicate::str::contains("crash_datetime"));
    Ok(())
}
