// third-party imports
use wildcard::Pattern;

// local imports
use crate::error::{Error, Result};
use crate::store::{COMMON, PageStore};

// ---

/// A page name search compiled from a wildcard pattern.
///
/// The pattern is compiled once and then tested against every page name, so a single
/// `Search` can be run against any number of stores.
#[derive(Debug, Clone)]
pub struct Search {
    pattern: Pattern,
}

impl Search {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns matching page names of the common bucket followed by those of the platform bucket.
    pub fn run<'a, S: PageStore>(&self, store: &'a S, language: &str, platform: &str) -> Result<Vec<&'a str>> {
        if store.is_empty() {
            return Err(Error::EmptyDatabase);
        }

        let mut found = Vec::new();
        for bucket in [COMMON, platform] {
            match store.pages(language, bucket) {
                Some(pages) => {
                    let before = found.len();
                    found.extend(pages.into_iter().filter(|name| self.pattern.matches(name)));
                    log::trace!("{} of {}/{} match {}", found.len() - before, language, bucket, self.pattern);
                }
                None => log::debug!("no {}/{} pages to search", language, bucket),
            }
        }

        log::debug!("found {} pages matching {}", found.len(), self.pattern);
        Ok(found)
    }
}
