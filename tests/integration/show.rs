use predicates::prelude::*;
use std::collections::BTreeMap;

use depcache::test_utils::CollectionFixture;

use crate::common::depcache;

#[test]
fn test_show_text_lists_every_resource() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["show", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built (no cache file)"))
        .stdout(predicate::str::contains("posts/introduction.yaml"))
        .stdout(predicate::str::contains("  - files/md-content.md"))
        .stdout(predicate::str::contains("  - files/2.jpeg"));

    // Second run reads the file written by the first
    depcache(&fixture)
        .args(["show", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded from cache"));
}

#[test]
fn test_show_json_matches_cache_file() {
    let fixture = CollectionFixture::example_posts();

    let output = depcache(&fixture)
        .args(["show", "post", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let shown: BTreeMap<String, Vec<String>> = serde_json::from_slice(&output).unwrap();
    let cached: BTreeMap<String, Vec<String>> =
        serde_yaml::from_str(&fixture.read("posts/post.dependencies")).unwrap();

    assert_eq!(shown, cached);
    assert_eq!(shown["posts/introduction2.yaml"], vec!["files/md-content.md", "files/2.jpeg"]);
}

#[test]
fn test_show_rejects_invalid_name() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["show", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid collection name"));
}
