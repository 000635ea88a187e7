use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_catalog-viewer")
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("failed to write test file");
}

const DATASET: &str = r#"[
    { "id": 1, "name": "Aurora Desk Lamp", "category": "Home", "subcategory": "Lighting",
      "createdAt": "2024-01-04", "updatedAt": "2024-03-12", "price": 34.5, "sale_price": 29.99 },
    { "id": 2, "name": "Harbor Mug", "category": "Kitchen", "subcategory": "Drinkware",
      "createdAt": "2024-03-29", "updatedAt": "2024-04-15", "price": 11.0, "sale_price": 9.5 }
]"#;

#[test]
fn test_view_renders_dataset_file() {
    let dir = tempdir().expect("temp dir");
    let dataset = dir.path().join("catalog.json");
    write_file(&dataset, DATASET);

    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args(["--color", "never", "-f", dataset.to_str().expect("utf8 path"), "view"])
        .output()
        .expect("command should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Applied Filters (0)"));
    assert!(stdout.contains("Aurora Desk Lamp"));
    assert!(stdout.contains("Harbor Mug"));
    assert!(stdout.contains("04-Jan-24"));
    assert!(stdout.contains("Page 1 of 1 (2 records)"));
}

#[test]
fn test_view_with_filter_expression() {
    let dir = tempdir().expect("temp dir");
    let dataset = dir.path().join("catalog.json");
    write_file(&dataset, DATASET);

    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args([
            "--color",
            "never",
            "-f",
            dataset.to_str().expect("utf8 path"),
            "-x",
            "category:Kitchen",
            "view",
        ])
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Applied Filters (1)"));
    assert!(stdout.contains("Harbor Mug"));
    assert!(!stdout.contains("Aurora Desk Lamp"));
    assert!(stdout.contains("Showing 1 of 2 records after applying filter: category:Kitchen"));
}

#[test]
fn test_json_format_written_to_output_file_is_json() {
    let dir = tempdir().expect("temp dir");
    let dataset = dir.path().join("catalog.json");
    let out = dir.path().join("out.json");
    write_file(&dataset, DATASET);

    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args([
            "-F",
            "json",
            "-o",
            out.to_str().expect("utf8 path"),
            "-f",
            dataset.to_str().expect("utf8 path"),
            "-x",
            "name:Mug",
            "view",
        ])
        .output()
        .expect("command should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let file_content = fs::read_to_string(&out).expect("output file should exist");
    let parsed: serde_json::Value =
        serde_json::from_str(&file_content).expect("output file should contain JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
    assert_eq!(parsed[0]["name"], "Harbor Mug");
}

#[test]
fn test_invalid_filter_expression_fails() {
    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args(["-x", "brand:Acme", "view"])
        .output()
        .expect("command should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid filter expression"));
}

#[test]
fn test_unreadable_dataset_fails_with_path_in_message() {
    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args(["-f", "/nonexistent/catalog.json", "view"])
        .output()
        .expect("command should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/catalog.json"));
}

#[test]
fn test_info_summarizes_dataset() {
    let dir = tempdir().expect("temp dir");
    let dataset = dir.path().join("catalog.json");
    write_file(&dataset, DATASET);

    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args(["-f", dataset.to_str().expect("utf8 path"), "info"])
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Records: 2"));
    assert!(stdout.contains("Home"));
    assert!(stdout.contains("Kitchen"));
    assert!(stdout.contains("Price range: $11.00 - $34.50"));
}

#[test]
fn test_browse_script_applies_and_clears_filters() {
    let dir = tempdir().expect("temp dir");
    let dataset = dir.path().join("catalog.json");
    let script = dir.path().join("script.txt");
    write_file(&dataset, DATASET);
    write_file(&script, "open 2\nset category Kitchen\napply\nclear\nquit\n");

    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args(["--color", "never", "-f", dataset.to_str().expect("utf8 path"), "browse"])
        .stdin(fs::File::open(&script).expect("script should open"))
        .output()
        .expect("command should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Filter Options (row: Harbor Mug)"));
    assert!(stdout.contains("Filters applied."));
    assert!(stdout.contains("Filters cleared."));
}

#[test]
fn test_config_page_size_changes_pagination() {
    let dir = tempdir().expect("temp dir");
    let dataset = dir.path().join("catalog.json");
    let config = dir.path().join("viewer.toml");
    write_file(&dataset, DATASET);
    write_file(
        &config,
        "profile_name = \"tiny\"\n\n[display]\npage_size = 1\n",
    );

    let output = Command::new(bin())
        .env_remove("CATALOG_VIEWER_CONFIG")
        .args([
            "--color",
            "never",
            "-f",
            dataset.to_str().expect("utf8 path"),
            "-c",
            config.to_str().expect("utf8 path"),
            "view",
            "--page",
            "2",
        ])
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Page 2 of 2 (2 records)"));
    assert!(stdout.contains("Harbor Mug"));
    assert!(!stdout.contains("Aurora Desk Lamp"));
}
