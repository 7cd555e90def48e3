use assert_matches::assert_matches;

use super::*;
use crate::store::MemoryStore;

fn store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert("en", COMMON, "tar", "# tar");
    store.insert("en", COMMON, "git", "# git");
    store.insert("en", "linux", "apt", "# apt");
    store.insert("en", "linux", "tar", "# tar (linux)");
    store.insert("en", "osx", "brew", "# brew");
    store
}

#[test]
fn test_list() {
    let store = store();
    assert_eq!(list(&store, "en", "linux").unwrap(), vec!["git", "tar", "apt", "tar"]);
    assert_eq!(list(&store, "en", "osx").unwrap(), vec!["git", "tar", "brew"]);
}

#[test]
fn test_list_unsupported_platform() {
    let store = store();
    assert_matches!(
        list(&store, "en", "windows"),
        Err(Error::UnsupportedPlatform { platform }) if platform == "windows"
    );
}

#[test]
fn test_list_all() {
    let store = store();
    assert_eq!(list_all(&store, "en").unwrap(), vec!["apt", "brew", "git", "tar"]);
    assert_eq!(list_all(&store, "fr").unwrap(), Vec::<&str>::new());
}

#[test]
fn test_list_platforms() {
    let store = store();
    assert_eq!(list_platforms(&store, "en").unwrap(), vec!["linux", "osx"]);
}

#[test]
fn test_empty_database() {
    let store = MemoryStore::new();
    assert_matches!(list(&store, "en", "linux"), Err(Error::EmptyDatabase));
    assert_matches!(list_all(&store, "en"), Err(Error::EmptyDatabase));
    assert_matches!(list_platforms(&store, "en"), Err(Error::EmptyDatabase));
}
