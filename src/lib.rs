//! Offline lookup of tldr pages.
//!
//! Page names are searched with wildcard patterns compiled by the [`wildcard`] crate into
//! deterministic automata, so each name is tested in a single pass no matter how many
//! wildcards the pattern contains.

// public modules
pub mod error;
pub mod list;
pub mod search;
pub mod settings;
pub mod show;
pub mod store;
pub mod target;

// private modules
mod appdirs;

// public uses
pub use error::{Error, Result};
pub use search::Search;
pub use settings::Settings;
pub use store::{COMMON, MemoryStore, PageStore};
pub use wildcard::{CompileError, Pattern};
