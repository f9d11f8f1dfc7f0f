//! End-to-end tests for the anysource binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn anysource() -> Command {
    let mut cmd = Command::cargo_bin("anysource").unwrap();
    cmd.env_remove("ANYSOURCE_CONFIG")
        .env_remove("ANYSOURCE_BUFFER_SIZE")
        .env_remove("ANYSOURCE_RESOURCE_PATH");
    cmd
}

#[test]
fn test_cat_local_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test_data.txt");
    std::fs::write(&file_path, "fileXYZ").unwrap();

    anysource()
        .arg("cat")
        .arg(&file_path)
        .assert()
        .success()
        .stdout("fileXYZ");
}

#[test]
fn test_cat_explicit_file_relative_to_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("test_data.txt"), "fileXYZ").unwrap();

    anysource()
        .current_dir(temp_dir.path())
        .args(["cat", "file:test_data.txt"])
        .assert()
        .success()
        .stdout("fileXYZ");
}

#[test]
fn test_cat_resource() {
    let resources = TempDir::new().unwrap();
    std::fs::write(resources.path().join("test_data.txt"), "resourceXYZ").unwrap();

    anysource()
        .args(["cat", "classpath:test_data.txt", "--resource-dir"])
        .arg(resources.path())
        .assert()
        .success()
        .stdout("resourceXYZ");
}

#[test]
fn test_cat_resource_from_env() {
    let resources = TempDir::new().unwrap();
    std::fs::write(resources.path().join("test_data.txt"), "resourceXYZ").unwrap();

    anysource()
        .env("ANYSOURCE_RESOURCE_PATH", resources.path())
        .args(["cat", "classpath:test_data.txt"])
        .assert()
        .success()
        .stdout("resourceXYZ");
}

#[test]
fn test_cat_missing_resource() {
    let resources = TempDir::new().unwrap();

    anysource()
        .args(["cat", "classpath:test_data.txtBAD", "--resource-dir"])
        .arg(resources.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to find embedded resource 'test_data.txtBAD'",
        ));
}

#[test]
fn test_cat_missing_path() {
    let temp_dir = TempDir::new().unwrap();

    anysource()
        .current_dir(temp_dir.path())
        .args(["cat", "test_data.txtBAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to find file or resource 'test_data.txtBAD'",
        ));
}

#[test]
fn test_cat_empty_path() {
    anysource()
        .args(["cat", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load from an empty path"));
}

#[test]
fn test_locate_local_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test_data.txt");
    std::fs::write(&file_path, "fileXYZ").unwrap();

    anysource()
        .arg("locate")
        .arg(&file_path)
        .assert()
        .success()
        .stdout(format!("local file\t{}\n", file_path.display()));
}

#[test]
fn test_locate_network_locator() {
    anysource()
        .args(["locate", "https://example.invalid/data.csv"])
        .assert()
        .success()
        .stdout("network locator\thttps://example.invalid/data.csv\n");
}

#[test]
fn test_config_file_sets_resource_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let resources = temp_dir.path().join("bundled");
    std::fs::create_dir(&resources).unwrap();
    std::fs::write(resources.join("greeting.txt"), "hello").unwrap();

    let config_path = temp_dir.path().join("anysource.toml");
    std::fs::write(
        &config_path,
        format!("resource_dirs = [{:?}]\n", resources.display().to_string()),
    )
    .unwrap();

    anysource()
        .arg("--config")
        .arg(&config_path)
        .args(["cat", "classpath:greeting.txt"])
        .assert()
        .success()
        .stdout("hello");
}
