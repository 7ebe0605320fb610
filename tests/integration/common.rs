//! Shared helpers for driving the binary.

use assert_cmd::Command;
use depcache::test_utils::CollectionFixture;

/// A `depcache` command rooted at the fixture, with logging quiet unless
/// `RUST_LOG` asks otherwise.
pub fn depcache(fixture: &CollectionFixture) -> Command {
    let mut cmd = Command::cargo_bin("depcache").unwrap();
    cmd.current_dir(fixture.root())
        .env_remove("DEPCACHE_ROOT")
        .env_remove("DEPCACHE_CONFIG");
    cmd
}

/// Stdout lines of a successful run.
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap().lines().map(str::to_string).collect()
}
