// local imports
use crate::{
    error::CompileError,
    normalize::{Symbol, Token},
};

// ---

/// Where a transition leads.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Target {
    State(usize),
    /// Absorbing non-accepting sink.
    Fail,
}

// ---

/// A single automaton state: explicit per-character transitions plus a default one.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct State {
    // sorted by character
    overrides: Vec<(char, usize)>,
    default: Target,
}

impl State {
    fn new(default: Target) -> Self {
        Self {
            overrides: Vec::new(),
            default,
        }
    }

    #[inline]
    pub fn next(&self, ch: char) -> Target {
        match self.overrides.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(i) => Target::State(self.overrides[i].1),
            Err(_) => self.default,
        }
    }

    fn set(&mut self, ch: char, to: usize) {
        match self.overrides.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(i) => self.overrides[i].1 = to,
            Err(i) => self.overrides.insert(i, (ch, to)),
        }
    }
}

// ---

/// A deterministic automaton compiled from a wildcard pattern.
///
/// State `0` is the initial state and the last state is the only accepting one.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Automaton {
    states: Vec<State>,
}

impl Automaton {
    pub fn build(symbols: &[Symbol]) -> Result<Self, CompileError> {
        Builder::new().build(symbols)
    }

    /// Runs the automaton over the characters of `text`.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        let mut state = 0;
        for ch in text.chars() {
            match self.states[state].next(ch) {
                Target::State(next) => state = next,
                Target::Fail => return false,
            }
        }
        state == self.accepting()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    fn accepting(&self) -> usize {
        self.states.len() - 1
    }
}

// ---

/// Builds an [`Automaton`] in a single pass over the symbols.
///
/// The anchor is the state matching resumes from on a mismatch when a preceding `*`
/// allows the mismatched character to be absorbed. After each literal it advances the
/// way a failure link of a string-search automaton does, so no input is ever rescanned.
struct Builder {
    // the last state is the one being built
    states: Vec<State>,
    anchor: Option<usize>,
    // set right after `*`, cleared by the next literal
    fresh: bool,
}

impl Builder {
    fn new() -> Self {
        Self {
            states: vec![State::new(Target::Fail)],
            anchor: None,
            fresh: false,
        }
    }

    fn build(mut self, symbols: &[Symbol]) -> Result<Automaton, CompileError> {
        for symbol in symbols {
            match symbol.token {
                Token::Star => self.star(),
                Token::AnyOne => self.any_one(symbol.position)?,
                Token::Literal(ch) => self.literal(ch),
            }
        }

        Ok(self.finish())
    }

    #[inline]
    fn current(&self) -> usize {
        self.states.len() - 1
    }

    fn star(&mut self) {
        let s = self.current();
        self.states[s] = State::new(Target::State(s));
        self.anchor = Some(s);
        self.fresh = true;
    }

    fn any_one(&mut self, position: usize) -> Result<(), CompileError> {
        if self.anchor.is_some() && self.fresh {
            return Err(CompileError::UnsupportedConstruct { position });
        }

        let s = self.current();
        self.states[s] = State::new(Target::State(s + 1));
        self.advance();

        Ok(())
    }

    fn literal(&mut self, ch: char) {
        let s = self.current();

        match self.anchor {
            Some(x) => {
                let next = self.states[x].next(ch);
                if x != s {
                    self.states[s] = self.states[x].clone();
                }
                if let Target::State(next) = next {
                    self.anchor = Some(next);
                }
            }
            None => self.states[s] = State::new(Target::Fail),
        }

        self.states[s].set(ch, s + 1);
        self.fresh = false;
        self.advance();
    }

    fn advance(&mut self) {
        self.states.push(State::new(Target::Fail));
    }

    fn finish(mut self) -> Automaton {
        let k = self.current();
        if let Some(x) = self.anchor {
            if x != k {
                self.states[k] = self.states[x].clone();
            }
        }

        Automaton { states: self.states }
    }
}
