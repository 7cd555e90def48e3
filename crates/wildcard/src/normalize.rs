// third-party imports
use memchr::memchr3;

// ---

/// A single unit of a pattern after escape resolution.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// Matches any single character.
    AnyOne,
    /// Allows zero or more arbitrary characters before the next token.
    Star,
}

/// A token together with its character position in the raw pattern.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Symbol {
    pub token: Token,
    pub position: usize,
}

/// Result of pattern normalization.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Normalized {
    /// The pattern contains no unescaped wildcards.
    Literal(String),
    /// The pattern contains at least one unescaped wildcard.
    Symbols(Vec<Symbol>),
}

/// Resolves escapes and splits the raw pattern into symbols.
pub(crate) fn normalize(raw: &str) -> Normalized {
    if memchr3(b'*', b'?', b'\\', raw.as_bytes()).is_none() {
        return Normalized::Literal(raw.to_owned());
    }

    let mut symbols = Vec::with_capacity(raw.len());
    let mut wild = false;
    let mut escaped = false;

    for (position, ch) in raw.chars().enumerate() {
        let mut emit = |token, position| symbols.push(Symbol { token, position });

        if escaped {
            escaped = false;
            match ch {
                '*' | '?' | '\\' => {
                    emit(Token::Literal(ch), position);
                    continue;
                }
                // the backslash itself stands one character earlier
                _ => emit(Token::Literal('\\'), position - 1),
            }
        }

        match ch {
            '\\' => escaped = true,
            '*' => {
                wild = true;
                emit(Token::Star, position);
            }
            '?' => {
                wild = true;
                emit(Token::AnyOne, position);
            }
            _ => emit(Token::Literal(ch), position),
        }
    }

    // a dangling escape at the end contributes nothing

    if wild {
        Normalized::Symbols(symbols)
    } else {
        Normalized::Literal(
            symbols
                .iter()
                .filter_map(|s| match s.token {
                    Token::Literal(ch) => Some(ch),
                    _ => None,
                })
                .collect(),
        )
    }
}
