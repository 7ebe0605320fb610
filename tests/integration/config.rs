use predicates::prelude::*;

use depcache::test_utils::CollectionFixture;

use crate::common::{depcache, stdout_lines};

#[test]
fn test_configured_collections_are_the_default() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("depcache.toml", "collections = [\"post\"]\n");

    let lines = stdout_lines(depcache(&fixture).args(["dependents", "posts/files/md-content.md"]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);

    depcache(&fixture).args(["build", "-q"]).assert().success();
    assert!(fixture.path("posts/post.dependencies").is_file());
}

#[test]
fn test_configured_extensions() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("posts/extra.yml", "image: \"@file(files/extra.png)\"\n");
    fixture.write("depcache.toml", "resource_extensions = [\"yaml\", \"yml\"]\n");

    let lines = stdout_lines(depcache(&fixture).args(["dependents", "-c", "post", "posts/files/extra.png"]));
    assert_eq!(lines, vec!["posts/extra.yml"]);
}

#[test]
fn test_collection_dir_lookup_prefix() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("depcache.toml", "lookup_prefix = \"collection-dir\"\n");

    // With the collection-dir policy, content-root-relative paths also match
    let lines = stdout_lines(depcache(&fixture).args(["dependents", "-c", "post", "files/md-content.md"]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);

    let lines = stdout_lines(depcache(&fixture).args(["dependents", "-c", "post", "posts/files/md-content.md"]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);
}

#[test]
fn test_invalid_config_fails() {
    let fixture = CollectionFixture::example_posts();
    fixture.write("depcache.toml", "lookup_prefix = \"sideways\"\n");

    depcache(&fixture)
        .args(["show", "post"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_explicit_config_must_exist() {
    let fixture = CollectionFixture::example_posts();

    depcache(&fixture)
        .args(["show", "post", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_root_flag_and_env() {
    let fixture = CollectionFixture::example_posts();
    let elsewhere = tempfile::tempdir().unwrap();

    let mut cmd = depcache(&fixture);
    cmd.current_dir(elsewhere.path()).arg("--root").arg(fixture.root());
    let lines = stdout_lines(cmd.args(["dependents", "-c", "post", "posts/files/2.jpeg"]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);

    let mut cmd = depcache(&fixture);
    cmd.current_dir(elsewhere.path()).env("DEPCACHE_ROOT", fixture.root());
    let lines = stdout_lines(cmd.args(["dependents", "-c", "post", "posts/files/2.jpeg"]));
    assert_eq!(lines, vec!["posts/introduction2.yaml"]);
}
