// std imports
use std::fmt;
use std::str::FromStr;

// local imports
use crate::{
    automaton::Automaton,
    error::CompileError,
    normalize::{Normalized, normalize},
};

/// A compiled wildcard pattern for matching text strings.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - `\` escapes `*`, `?` and `\`, before any other character it stands for itself
///
/// A `?` that comes after a `*` (with a literal in between) only matches where the next
/// literal also starts a fresh occurrence: `*a?` does not match `aab`, because the second
/// `a`, taken by `?`, is not retried as the literal after `*`.
///
/// A compiled pattern is immutable and can be shared between threads and matched against
/// any number of candidates.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt").unwrap();
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log").unwrap();
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
///
/// - Patterns can be displayed back to their source strings via the `Display` trait
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    source: String,
    matcher: Matcher,
}

impl Pattern {
    /// Compiles a pattern from a string.
    ///
    /// Fails only if a `?` directly follows a `*`. Malformed escapes are never an error:
    /// a backslash before an ordinary character is kept as a literal backslash,
    /// and a trailing backslash is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{CompileError, Pattern};
    ///
    /// let pattern = Pattern::new("hello*").unwrap();
    /// assert!(pattern.matches("hello world"));
    ///
    /// // Escaped wildcards
    /// let pattern = Pattern::new(r"file\*.txt").unwrap();
    /// assert!(pattern.matches("file*.txt"));
    /// assert!(!pattern.matches("file123.txt"));
    ///
    /// assert_eq!(Pattern::new("a*?"), Err(CompileError::UnsupportedConstruct { position: 2 }));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CompileError> {
        let source = raw.as_ref();
        let matcher = match normalize(source) {
            Normalized::Literal(text) => Matcher::Literal(text),
            Normalized::Symbols(symbols) => Matcher::Automaton(Automaton::build(&symbols)?),
        };

        Ok(Self {
            source: source.to_owned(),
            matcher,
        })
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    /// Runs in time linear in the length of the text regardless of the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs").unwrap();
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??").unwrap();
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Literal(literal) => literal == text,
            Matcher::Automaton(automaton) => automaton.matches(text),
        }
    }

    /// Returns `true` if the pattern has no wildcards and is matched by plain comparison.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }

    /// Returns the number of automaton states, or `None` for literal patterns.
    #[inline]
    pub fn state_count(&self) -> Option<usize> {
        match &self.matcher {
            Matcher::Literal(_) => None,
            Matcher::Automaton(automaton) => Some(automaton.len()),
        }
    }

    /// Returns the source string the pattern was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---

#[derive(Debug, PartialEq, Eq, Clone)]
enum Matcher {
    Literal(String),
    Automaton(Automaton),
}
