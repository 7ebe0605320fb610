use predicates::prelude::*;

use depcache::test_utils::CollectionFixture;

use crate::common::{depcache, stdout_lines};

#[test]
fn test_dependents_of_embedded_markdown() {
    let fixture = CollectionFixture::example_posts();

    let lines = stdout_lines(depcache(&fixture).args([
        "dependents",
        "-c",
        "post",
        "posts/files/md-content.md",
    ]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);

    // First lookup built and persisted the cache
    assert!(fixture.path("posts/post.dependencies").is_file());
}

#[test]
fn test_dependents_of_unreferenced_file_is_empty() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["dependents", "-c", "post", "posts/files/unused.png"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_dependents_union_is_deduplicated() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("posts/gallery.yaml", "cover: \"@file(files/2.jpeg)\"\n");

    let lines = stdout_lines(depcache(&fixture).args([
        "dependents",
        "--collection",
        "post",
        "posts/files/2.jpeg",
        "posts/files/md-content.md",
    ]));
    assert_eq!(lines, vec!["posts/gallery.yaml", "posts/introduction2.yaml"]);
}

#[test]
fn test_dependents_json() {
    let fixture = CollectionFixture::example_posts();

    let output = depcache(&fixture)
        .args(["dependents", "-c", "post", "--format", "json", "posts/files/2.jpeg"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let found: Vec<String> = serde_json::from_slice(&output).unwrap();
    assert_eq!(found, vec!["posts/introduction2.yaml"]);
}

#[test]
fn test_dependents_accepts_windows_separators() {
    let fixture = CollectionFixture::example_posts();

    let lines = stdout_lines(depcache(&fixture).args([
        "dependents",
        "-c",
        "post",
        "posts\\files\\md-content.md",
    ]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);
}

#[test]
fn test_dependents_across_collections() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("pages/about.yaml", "body: \"@content(files/md-content.md)\"\n");
    fixture.write("pages/files/md-content.md", "About\n");

    let lines = stdout_lines(depcache(&fixture).args([
        "dependents",
        "-c",
        "post",
        "-c",
        "page",
        "pages/files/md-content.md",
    ]));
    assert_eq!(lines, vec!["pages/about.yaml"]);

    let lines = stdout_lines(depcache(&fixture).args([
        "dependents",
        "-c",
        "post",
        "-c",
        "page",
        "posts/files/md-content.md",
        "pages/files/md-content.md",
    ]));
    assert_eq!(lines, vec!["pages/about.yaml", "posts/introduction2.yaml"]);
}

#[test]
fn test_dependents_requires_files() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["dependents", "-c", "post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
