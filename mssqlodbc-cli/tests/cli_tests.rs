//! Integration tests for the odbctest CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INSTALLED: &str = "SQL Server,ODBC Driver 17 for SQL Server,PostgreSQL Unicode";

/// Get the odbctest binary, isolated from any local config file
#[allow(deprecated)]
fn odbctest_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("odbctest").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ODBCTEST_CONFIG")
        .env_remove("ODBCTEST_ODBCINST")
        .env_remove("ODBCTEST_PASSWORD")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: odbctest"))
        .stdout(predicate::str::contains("drivers"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("test"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version"))
        .stdout(predicate::str::contains("ODBC Driver 18 for SQL Server"));
}

#[test]
fn test_drivers_lists_best_first() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["drivers", "--installed", INSTALLED])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best driver: ODBC Driver 17 for SQL Server"))
        .stdout(predicate::str::contains("PostgreSQL Unicode").not());
}

#[test]
fn test_drivers_none_installed() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["drivers", "--installed", "PostgreSQL Unicode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no odbc drivers found"));
}

#[test]
fn test_drivers_from_odbcinst_file() {
    let dir = TempDir::new().unwrap();
    let ini = dir.path().join("odbcinst.ini");
    fs::write(
        &ini,
        "[ODBC Driver 18 for SQL Server]\nDriver=/opt/lib/libmsodbcsql-18.so\n",
    )
    .unwrap();

    odbctest_cmd(&dir)
        .args(["drivers", "--odbcinst"])
        .arg(&ini)
        .assert()
        .success()
        .stdout(predicate::str::contains("Best driver: ODBC Driver 18 for SQL Server"));
}

#[test]
fn test_build_trusted() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["build", "--server", "localhost,1433", "--installed", INSTALLED])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Driver={ODBC Driver 17 for SQL Server}; Server=localhost,1433; Trusted_Connection=yes; App=odbctest; ",
        ));
}

#[test]
fn test_build_with_credentials_and_driver() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args([
            "build",
            "--server",
            "127.0.0.1,59625",
            "--driver",
            "SQL Server",
            "--user",
            "test",
            "--password",
            "test",
            "--database",
            "tempdb",
            "--app",
            "IsItSql",
            "--installed",
            INSTALLED,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Driver={SQL Server}; Server=127.0.0.1,59625; UID=test; PWD=test; Database=tempdb; App=IsItSql; ",
        ));
}

#[test]
fn test_build_invalid_driver() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["build", "--server", "localhost", "--driver", "test", "--installed", INSTALLED])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid driver: test"));
}

#[test]
fn test_build_missing_server() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["build", "--server", "", "--installed", INSTALLED])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server is required"));
}

#[test]
fn test_build_uses_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("odbctest.toml"),
        r#"
[connection]
app_name = "from-config"
multi_subnet_failover = true

[drivers]
installed = ["SQL Server Native Client 11.0"]
"#,
    )
    .unwrap();

    odbctest_cmd(&dir)
        .args(["build", "--server", "ag-listener"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Driver={SQL Server Native Client 11.0}; Server=ag-listener; Trusted_Connection=yes; App=from-config; MultiSubnetFailover=Yes; ",
        ));
}

#[test]
fn test_parse_command() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args([
            "parse",
            "Driver={SQL Server Native Client 11.0};Server=127.0.0.1,59625;Database=tempdb;uid=test;pwd=secret;App=IsItSql;",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL Server Native Client 11.0"))
        .stdout(predicate::str::contains("127.0.0.1,59625"))
        .stdout(predicate::str::contains("IsItSql"))
        .stdout(predicate::str::contains("****"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_parse_malformed() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["parse", "AYZ;Driver={SQL Server};Server=x;"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed attribute: AYZ"));
}

#[test]
fn test_test_command_without_connecting() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args(["test", "--fqdn", "db.example.com", "--no-connect", "--installed", INSTALLED])
        .assert()
        .success()
        .stdout(predicate::str::contains("found driver: ODBC Driver 17 for SQL Server"))
        .stdout(predicate::str::contains("found driver: SQL Server"))
        .stdout(predicate::str::contains(
            "Driver={ODBC Driver 17 for SQL Server}; Server=db.example.com; Trusted_Connection=yes; App=odbctest; ",
        ));
}

#[test]
fn test_test_command_with_credentials() {
    let dir = TempDir::new().unwrap();
    odbctest_cmd(&dir)
        .args([
            "test",
            "--fqdn",
            "db.example.com,1433",
            "--user",
            "sa",
            "--password",
            "pw",
            "--no-connect",
            "--installed",
            INSTALLED,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Driver={ODBC Driver 17 for SQL Server}; Server=db.example.com,1433; UID=sa; PWD=pw; App=odbctest; ",
        ))
        .stdout(predicate::str::contains("Trusted_Connection").not());
}
