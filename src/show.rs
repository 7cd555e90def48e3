// local imports
use crate::error::{Error, Result};
use crate::store::{COMMON, PageStore};

// ---

/// Finds the text of a page, preferring the platform specific one over the common one.
pub fn find_page<'a, S: PageStore>(store: &'a S, language: &str, platform: &str, name: &str) -> Result<&'a str> {
    store
        .page(language, platform, name)
        .or_else(|| store.page(language, COMMON, name))
        .ok_or_else(|| {
            log::debug!("page {:?} not found for {}/{}", name, language, platform);
            Error::PageNotFound { name: name.into() }
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_find_page() {
        let mut store = MemoryStore::new();
        store.insert("en", COMMON, "tar", "# tar");
        store.insert("en", COMMON, "git", "# git");
        store.insert("en", "linux", "tar", "# tar (linux)");

        assert_eq!(find_page(&store, "en", "linux", "tar").unwrap(), "# tar (linux)");
        assert_eq!(find_page(&store, "en", "osx", "tar").unwrap(), "# tar");
        assert_eq!(find_page(&store, "en", "linux", "git").unwrap(), "# git");
        assert_matches!(
            find_page(&store, "en", "linux", "brew"),
            Err(Error::PageNotFound { name }) if name == "brew"
        );
    }
}
