// std imports
use std::collections::BTreeMap;

// ---

/// Name of the bucket holding pages shared by all platforms.
pub const COMMON: &str = "common";

/// Pages of a single platform keyed by command name.
pub type Bucket = BTreeMap<String, String>;

/// Platform buckets keyed by platform name.
pub type Platforms = BTreeMap<String, Bucket>;

/// Complete page hierarchy keyed by language.
pub type Tree = BTreeMap<String, Platforms>;

// ---

/// Read access to stored pages.
///
/// Pages are organized as language → platform → command → page text.
/// All listings are returned in ascending byte order of their keys.
pub trait PageStore {
    /// Returns `true` if the store holds no pages at all.
    fn is_empty(&self) -> bool;

    /// Returns the names of all available languages.
    fn languages(&self) -> Vec<&str>;

    /// Returns the names of all platform buckets for the language, including [`COMMON`].
    fn platforms(&self, language: &str) -> Vec<&str>;

    /// Returns the sorted page names of a platform bucket, or `None` if there is no such bucket.
    fn pages(&self, language: &str, platform: &str) -> Option<Vec<&str>>;

    /// Returns the text of a page.
    fn page(&self, language: &str, platform: &str, name: &str) -> Option<&str>;
}

// ---

/// An in-memory [`PageStore`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    tree: Tree,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a page.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        platform: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tree
            .entry(language.into())
            .or_default()
            .entry(platform.into())
            .or_default()
            .insert(name.into(), text.into());
    }

    /// Removes all pages.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    fn bucket(&self, language: &str, platform: &str) -> Option<&Bucket> {
        self.tree.get(language)?.get(platform)
    }
}

impl From<Tree> for MemoryStore {
    fn from(tree: Tree) -> Self {
        Self { tree }
    }
}

impl PageStore for MemoryStore {
    fn is_empty(&self) -> bool {
        self.tree.values().flat_map(|platforms| platforms.values()).all(|bucket| bucket.is_empty())
    }

    fn languages(&self) -> Vec<&str> {
        self.tree.keys().map(|k| k.as_str()).collect()
    }

    fn platforms(&self, language: &str) -> Vec<&str> {
        self.tree
            .get(language)
            .map(|platforms| platforms.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }

    fn pages(&self, language: &str, platform: &str) -> Option<Vec<&str>> {
        self.bucket(language, platform)
            .map(|bucket| bucket.keys().map(|k| k.as_str()).collect())
    }

    fn page(&self, language: &str, platform: &str, name: &str) -> Option<&str> {
        self.bucket(language, platform)?.get(name).map(|text| text.as_str())
    }
}
