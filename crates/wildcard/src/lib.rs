//! A wildcard pattern compiler with linear-time matching.
//!
//! Patterns are compiled once into a deterministic finite automaton, which then decides
//! whether any candidate string matches in a single pass over its characters. There is no
//! backtracking, so the cost of a match does not depend on how many `*` wildcards the
//! pattern contains.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one UTF-8 character
//! - `\*`, `\?`, `\\` - Escaped literal characters
//! - `\` followed by any other character is a literal backslash followed by that character
//! - A trailing `\` without a following character is dropped
//! - Any other character matches itself
//!
//! A `?` directly following a `*` is not supported and is rejected at compile time.
//! A `?` later in a `*` span only matches where the next literal also starts a fresh
//! occurrence, so `*a?` does not match `aab`.
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("git-*").unwrap();
//! assert!(pattern.matches("git-commit"));
//! assert!(pattern.matches("git-"));
//! assert!(!pattern.matches("gitk"));
//!
//! let pattern = Pattern::new("t?r").unwrap();
//! assert!(pattern.matches("tar"));
//! assert!(!pattern.matches("tr"));
//!
//! // Escaped wildcards
//! let pattern = Pattern::new(r"a\*b").unwrap();
//! assert!(pattern.matches("a*b"));
//! assert!(!pattern.matches("aXb"));
//!
//! // Unsupported construct
//! assert!(Pattern::new("*?").is_err());
//! ```
//!
//! Patterns without wildcards skip automaton construction entirely and are matched by
//! plain string comparison:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("tar").unwrap();
//! assert!(pattern.is_literal());
//! assert!(pattern.matches("tar"));
//! assert!(!pattern.matches("tarx"));
//! ```

mod automaton;
mod error;
mod normalize;
mod pattern;

pub use error::CompileError;
pub use pattern::*;

/// Compiles a pattern, see [`Pattern::new`].
#[inline]
pub fn compile(raw: impl AsRef<str>) -> Result<Pattern, CompileError> {
    Pattern::new(raw)
}

/// Tests a candidate against a compiled pattern, see [`Pattern::matches`].
#[inline]
pub fn matches(pattern: &Pattern, candidate: &str) -> bool {
    pattern.matches(candidate)
}
