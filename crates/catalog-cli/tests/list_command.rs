mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_list_first_page_of_embedded_catalog() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("Linen Table Lamp"))
        .stdout(predicate::str::contains("Cotton Bath Towel"))
        .stdout(predicate::str::contains("Ash Side Table").not())
        .stdout(predicate::str::contains("Page 1 of 3 (13 products)"));
}

#[test]
fn test_list_last_page_holds_remainder() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linen Napkin Set"))
        .stdout(predicate::str::contains("Glass Pendant Lamp").not())
        .stdout(predicate::str::contains("Page 3 of 3 (13 products)"));
}

#[test]
fn test_list_out_of_range_page_stays_on_first() {
    let fixture = TestFixture::new();

    for page in ["0", "4", "99"] {
        fixture
            .command()
            .args(["list", "--page", page])
            .assert()
            .success()
            .stdout(predicate::str::contains("Page 1 of 3 (13 products)"));
    }
}

#[test]
fn test_list_search_is_case_insensitive() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--search", "  LAMP "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: \"lamp\""))
        .stdout(predicate::str::contains("Brass Floor Lamp"))
        .stdout(predicate::str::contains("Stoneware Mug").not())
        .stdout(predicate::str::contains("Page 1 of 1 (3 products)"));
}

#[test]
fn test_list_search_without_matches() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products match this search."))
        .stdout(predicate::str::contains("Page 1 of 1 (0 products)"));
}

#[test]
fn test_list_grid_prints_cards() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--view", "grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Linen Table Lamp"))
        .stdout(predicate::str::contains("Stock"))
        .stdout(predicate::str::contains("NAME").not());
}

#[test]
fn test_list_json_is_page_view_model() -> anyhow::Result<()> {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["list", "--format", "json", "--page", "2"])
        .output()?;
    assert!(
        output.status.success(),
        "list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["page"], 2);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["total_matches"], 13);
    assert_eq!(json["view"], "list");
    assert_eq!(json["products"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["products"][0]["name"], "Ash Side Table");
    assert!(json.get("query").is_none());
    Ok(())
}

#[test]
fn test_list_custom_seed_and_page_size() {
    let fixture = TestFixture::new();
    let seed = fixture.write_seed(
        "seed.json",
        r#"[
            {"id": 1, "name": "Red Kettle", "price": 40, "category": "Kitchen", "stock": 3},
            {"id": 2, "name": "Blue Kettle", "price": 42.5, "category": "Kitchen"},
            {"id": 3, "name": "Teapot", "price": 18, "category": "Kitchen", "stock": 9}
        ]"#,
    );
    fixture.write_config("[catalog]\npage_size = 2\ncurrency = \"$\"\n");

    fixture
        .command()
        .arg("--seed")
        .arg(&seed)
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Teapot"))
        .stdout(predicate::str::contains("$18"))
        .stdout(predicate::str::contains("Page 2 of 2 (3 products)"));
}

#[test]
fn test_list_rejects_invalid_seed() {
    let fixture = TestFixture::new();
    let seed = fixture.write_seed(
        "bad.json",
        r#"[{"id": 1, "name": "", "price": 5, "category": "Misc"}]"#,
    );

    fixture
        .command()
        .arg("--seed")
        .arg(&seed)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_list_writes_log_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--log-level", "debug", "list", "--search", "mug"])
        .assert()
        .success();

    let log = std::fs::read_to_string(fixture.data_dir().join("catalog.log"))
        .expect("log file should exist");
    assert!(log.contains("seed loaded"));
}
