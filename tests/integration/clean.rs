use predicates::prelude::*;

use depcache::test_utils::CollectionFixture;

use crate::common::depcache;

#[test]
fn test_clean_removes_cache() {
    let fixture = CollectionFixture::example_posts();
    depcache(&fixture).args(["build", "post", "-q"]).assert().success();
    assert!(fixture.path("posts/post.dependencies").is_file());

    depcache(&fixture)
        .args(["clean", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
    assert!(!fixture.path("posts/post.dependencies").exists());

    depcache(&fixture)
        .args(["clean", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cache for post"));
}

#[test]
fn test_clean_leaves_resources_alone() {
    let fixture = CollectionFixture::example_posts();
    depcache(&fixture).args(["build", "post", "-q"]).assert().success();
    depcache(&fixture).args(["clean", "post", "-q"]).assert().success().stdout("");

    assert!(fixture.path("posts/introduction.yaml").is_file());
    assert!(fixture.path("posts/files/md-content.md").is_file());
}
