use predicates::prelude::*;
use std::collections::BTreeMap;

use depcache::test_utils::CollectionFixture;

use crate::common::depcache;

#[test]
fn test_build_writes_cache_file() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["build", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("post: 2 resource(s), 2 reference(s)"));

    let cache: BTreeMap<String, Vec<String>> =
        serde_yaml::from_str(&fixture.read("posts/post.dependencies")).unwrap();
    assert_eq!(cache.len(), 2);
    assert_eq!(cache["posts/introduction.yaml"], Vec::<String>::new());
    assert_eq!(cache["posts/introduction2.yaml"], vec!["files/md-content.md", "files/2.jpeg"]);
}

#[test]
fn test_build_quiet_prints_nothing() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture).args(["build", "post", "--quiet"]).assert().success().stdout("");
    assert!(fixture.path("posts/post.dependencies").is_file());
}

#[test]
fn test_build_reports_unreadable_resource() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("posts/broken.yaml", "title: [unclosed\n");

    depcache(&fixture)
        .args(["build", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("posts/broken.yaml"))
        .stderr(predicate::str::contains("posts/broken.yaml"));

    let cache: BTreeMap<String, Vec<String>> =
        serde_yaml::from_str(&fixture.read("posts/post.dependencies")).unwrap();
    assert_eq!(cache["posts/broken.yaml"], Vec::<String>::new());
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_build_missing_collection_directory() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["build", "psot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("psot: 0 resource(s)"))
        .stderr(predicate::str::contains("does not exist"));

    assert!(!fixture.path("psots").exists());
}

#[test]
fn test_dependents_of_unknown_collection_leaves_no_directory() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["dependents", "-c", "psot", "psots/files/2.jpeg"])
        .assert()
        .success()
        .stdout("");

    assert!(!fixture.path("psots").exists());
}

#[test]
fn test_build_requires_a_collection() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No collection given"));
}

#[test]
fn test_build_rejects_invalid_collection_name() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture).args(["build", "posts/nested"]).assert().failure();
}
