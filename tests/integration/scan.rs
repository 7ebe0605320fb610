use predicates::prelude::*;

use depcache::test_utils::CollectionFixture;

use crate::common::{depcache, stdout_lines};

#[test]
fn test_scan_lists_references_in_field_order() {
    let fixture = CollectionFixture::example_posts();

    let lines = stdout_lines(depcache(&fixture).args(["scan", "posts/introduction2.yaml"]));
    assert_eq!(lines, vec!["files/md-content.md", "files/2.jpeg"]);
}

#[test]
fn test_scan_record_without_references() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["scan", "posts/introduction.yaml"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_scan_json() {
    let fixture = CollectionFixture::example_posts();

    let output = depcache(&fixture)
        .args(["scan", "posts/introduction2.yaml", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let refs: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(refs.len(), 2);
}

#[test]
fn test_scan_skips_malformed_reference() {
    let fixture = CollectionFixture::example_posts();
    fixture.write(
        "posts/draft.yaml",
        "hero: \"@file(files/hero.png\"\nbody: \"@content(files/body.md)\"\n",
    );

    depcache(&fixture)
        .args(["scan", "posts/draft.yaml"])
        .assert()
        .success()
        .stdout("files/body.md\n")
        .stderr(predicate::str::contains("Missing ')'"));
}

#[test]
fn test_scan_missing_resource_fails() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["scan", "posts/nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("posts/nope.yaml"));
}
