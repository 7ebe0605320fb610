//! On-disk collection fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::collection::Collection;

/// A post with no file references.
pub const INTRODUCTION_YAML: &str = r#"title: Introduction
author: Site Team
summary: Plain text only, nothing embedded here.
order: 1
"#;

/// A post embedding one markdown fragment and one image.
pub const INTRODUCTION2_YAML: &str = r#"title: Introduction, part two
body: "@content(files/md-content.md)"
hero: "  @file(files/2.jpeg)  "
tags:
  - intro
order: 2
"#;

/// A temporary project root holding one collection.
///
/// The directory is deleted when the fixture is dropped.
#[derive(Debug)]
pub struct CollectionFixture {
    temp: TempDir,
    collection: Collection,
}

impl CollectionFixture {
    /// An empty project for collection `name`; the collection directory is not created.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or `name` is invalid.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
            collection: Collection::new(name).expect("Invalid collection name"),
        }
    }

    /// The `post` collection with `introduction.yaml` and `introduction2.yaml`
    /// plus the files the latter references.
    #[must_use]
    pub fn example_posts() -> Self {
        let fixture = Self::new("post");
        fixture.write("posts/introduction.yaml", INTRODUCTION_YAML);
        fixture.write("posts/introduction2.yaml", INTRODUCTION2_YAML);
        fixture.write("posts/files/md-content.md", "# Part two\n\nEmbedded markdown.\n");
        fixture.write("posts/files/2.jpeg", "not really a jpeg");
        fixture
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// The fixture's collection.
    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection.clone()
    }

    /// Absolute path of a root-relative path.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Write a file below the root, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    /// Read a file below the root.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read fixture file")
    }
}
