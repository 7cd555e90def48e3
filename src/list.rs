// std imports
use std::collections::BTreeSet;

// local imports
use crate::error::{Error, Result};
use crate::store::{COMMON, PageStore};

// ---

/// Lists the common pages followed by the pages of the given platform.
pub fn list<'a, S: PageStore>(store: &'a S, language: &str, platform: &str) -> Result<Vec<&'a str>> {
    ensure_not_empty(store)?;

    let Some(local) = store.pages(language, platform) else {
        return Err(Error::UnsupportedPlatform {
            platform: platform.into(),
        });
    };

    let mut pages = store.pages(language, COMMON).unwrap_or_default();
    pages.extend(local);
    log::debug!("listed {} pages for {}/{}", pages.len(), language, platform);

    Ok(pages)
}

/// Lists the pages of all platforms, sorted and without duplicates.
pub fn list_all<'a, S: PageStore>(store: &'a S, language: &str) -> Result<Vec<&'a str>> {
    ensure_not_empty(store)?;

    let pages: BTreeSet<_> = store
        .platforms(language)
        .into_iter()
        .filter_map(|platform| store.pages(language, platform))
        .flatten()
        .collect();

    Ok(pages.into_iter().collect())
}

/// Lists the platforms pages are available for.
pub fn list_platforms<'a, S: PageStore>(store: &'a S, language: &str) -> Result<Vec<&'a str>> {
    ensure_not_empty(store)?;

    Ok(store
        .platforms(language)
        .into_iter()
        .filter(|&platform| platform != COMMON)
        .collect())
}

fn ensure_not_empty<S: PageStore>(store: &S) -> Result<()> {
    if store.is_empty() {
        return Err(Error::EmptyDatabase);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
