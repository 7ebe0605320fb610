use depcache::cache::{CacheStore, IndexOrigin};
use depcache::config::DepsConfig;
use depcache::test_utils::{CollectionFixture, init_test_logging};
use depcache::tracker::{DependencyTracker, DependencyTrackers};

#[test]
fn test_tracker_loads_once_and_answers_lookups() {
    init_test_logging(None);
    let fixture = CollectionFixture::example_posts();
    let store = CacheStore::new(fixture.root(), DepsConfig::default());

    let tracker = DependencyTracker::load(&store, fixture.collection());
    assert_eq!(tracker.origin(), IndexOrigin::RebuiltMissing);
    assert_eq!(tracker.index().len(), 2);

    let mut refs = tracker.references_of("posts/introduction2.yaml").unwrap().to_vec();
    refs.sort();
    assert_eq!(refs, vec!["files/2.jpeg", "files/md-content.md"]);

    assert_eq!(tracker.find_dependents("posts/files/md-content.md"), vec!["posts/introduction2.yaml"]);
    assert!(tracker.find_dependents("posts/files/other.md").is_empty());
}

#[test]
fn test_trackers_over_fixture_collection() {
    init_test_logging(None);
    let fixture = CollectionFixture::example_posts();
    let store = CacheStore::new(fixture.root(), DepsConfig::default());

    let trackers = DependencyTrackers::load_all(&store, [fixture.collection()]);
    assert_eq!(trackers.len(), 1);
    assert_eq!(
        trackers.find_dependents_of_many(&["posts/files/2.jpeg", "posts/files/md-content.md"]),
        vec!["posts/introduction2.yaml"]
    );

    // Cache written by the first load is reused
    let again = DependencyTrackers::load_all(&store, [fixture.collection()]);
    assert!(again.iter().all(|t| t.origin() == IndexOrigin::Cache));
}
