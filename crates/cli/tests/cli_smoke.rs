//! CLI smoke tests for javapack.
//!
//! These tests verify that the lifecycle commands run without panicking,
//! print the expected output, and return appropriate exit codes. Nothing
//! here touches the network: install is exercised in javapack-core's tests.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the javapack binary.
fn javapack_cmd() -> Command {
    cargo_bin_cmd!("javapack")
}

/// Create a temp application directory with a system.properties file.
fn temp_app(properties: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("system.properties"), properties).unwrap();
    temp
}

#[test]
fn help_flag_works() {
    javapack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn detect_prints_identity_from_flags() {
    javapack_cmd()
        .args([
            "detect",
            "--vendor",
            "openjdk",
            "--version",
            "1.8.0_60",
            "--uri",
            "https://example.com/jre.tar.gz",
        ])
        .assert()
        .success()
        .stdout("jre-openjdk-1.8.0_60\n");
}

#[test]
fn detect_reads_system_properties() {
    let app = temp_app(
        "java.runtime.vendor=openjdk\n\
         java.runtime.version=7\n\
         java.runtime.uri=https://example.com/jre.tar.gz\n",
    );

    javapack_cmd()
        .args(["detect", "--app-dir"])
        .arg(app.path())
        .assert()
        .success()
        .stdout("jre-openjdk-7\n");
}

#[test]
fn detect_json_includes_identity() {
    javapack_cmd()
        .args([
            "detect",
            "--json",
            "--vendor",
            "openjdk",
            "--version",
            "7",
            "--uri",
            "https://example.com/jre.tar.gz",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":\"jre-openjdk-7\""));
}

#[test]
fn detect_without_metadata_fails() {
    let app = TempDir::new().unwrap();

    javapack_cmd()
        .args(["detect", "--app-dir"])
        .arg(app.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("java.runtime.vendor"));
}

#[test]
fn configure_prints_heap_flag() {
    let app = temp_app("java.heap.size=512m\n");

    javapack_cmd()
        .args(["configure", "--app-dir"])
        .arg(app.path())
        .assert()
        .success()
        .stdout("-Xmx512m\n");
}

#[test]
fn configure_prints_flags_in_order() {
    let app = temp_app(
        "java.stack.size=2m\n\
         java.heap.size=1g\n\
         java.permgen.size=128m\n",
    );

    javapack_cmd()
        .args(["configure", "--app-dir"])
        .arg(app.path())
        .assert()
        .success()
        .stdout("-Xmx1g\n-XX:MaxPermSize=128m\n-Xss2m\n");
}

#[test]
fn configure_without_properties_prints_nothing() {
    let app = TempDir::new().unwrap();

    javapack_cmd()
        .args(["configure", "--app-dir"])
        .arg(app.path())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn configure_whitespace_value_fails() {
    let app = temp_app("java.stack.size=1 m\n");

    javapack_cmd()
        .args(["configure", "--app-dir"])
        .arg(app.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'1 m'"));
}

#[test]
fn configure_json_output() {
    let app = temp_app("java.heap.size=512m\n");

    javapack_cmd()
        .args(["configure", "--json", "--app-dir"])
        .arg(app.path())
        .assert()
        .success()
        .stdout("[\"-Xmx512m\"]\n");
}
