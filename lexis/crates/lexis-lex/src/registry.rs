//! Classifier chain registry.
//!
//! A grammar teaches the engine its token types by registering classifiers.
//! Each of the four [`Category`] chains is an ordered list; resolution walks
//! it newest-first and the first classifier with an opinion wins. Nothing is
//! validated at registration time: two classifiers claiming the same lexeme
//! is not an error, the later one simply shadows the earlier one.
//!
//! # Example
//!
//! ```
//! use lexis_lex::registry::{ClassifierChain, LexemeTable};
//! use lexis_lex::{StateHandle, Verdict};
//!
//! let mut chain: ClassifierChain<&str> = ClassifierChain::new();
//! chain.push(Box::new(|_: &str, _: &mut StateHandle| Some(Verdict::Emit("name"))));
//! chain.push(Box::new(LexemeTable::new().entry("let", "let")));
//!
//! let mut state = StateHandle::new();
//! assert_eq!(chain.resolve("let", &mut state), Some(Verdict::Emit("let")));
//! assert_eq!(chain.resolve("x", &mut state), Some(Verdict::Emit("name")));
//! ```

use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::state::{LexerState, StateHandle};
use crate::token::{Category, Verdict};

/// A lexeme-to-type resolver for one category.
///
/// Returning `None` means "no opinion" and passes the lexeme on to the next
/// older classifier in the chain. Classifiers may read and write the lexer
/// state; writes are visible to every classifier that runs after them.
///
/// Plain functions and closures of the right shape implement this trait.
pub trait Classifier<T> {
    /// Classifies `lexeme`, or returns `None` to defer.
    fn classify(&self, lexeme: &str, state: &mut StateHandle) -> Option<Verdict<T>>;
}

impl<T, F> Classifier<T> for F
where
    F: Fn(&str, &mut StateHandle) -> Option<Verdict<T>>,
{
    #[inline]
    fn classify(&self, lexeme: &str, state: &mut StateHandle) -> Option<Verdict<T>> {
        self(lexeme, state)
    }
}

/// A bundle of classifiers covering every category at once.
///
/// This is the registration contract for grammar plugins: whatever loads a
/// plugin hands the resulting set to [`Lexer::install`](crate::Lexer::install).
/// Every method defaults to "no opinion", so a set only overrides the
/// categories it cares about.
pub trait TokenSet<T> {
    /// Classifies identifiers and keywords.
    fn ident(&self, _lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<T>> {
        None
    }

    /// Classifies number literals.
    fn number(&self, _lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<T>> {
        None
    }

    /// Classifies string literals (the lexeme includes both quotes).
    fn string(&self, _lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<T>> {
        None
    }

    /// Classifies operator runs and newlines.
    fn operator(&self, _lexeme: &str, _state: &mut StateHandle) -> Option<Verdict<T>> {
        None
    }
}

/// Adapter registering one category of a shared [`TokenSet`].
pub(crate) struct TokenSetClassifier<S> {
    set: Rc<S>,
    category: Category,
}

impl<S> TokenSetClassifier<S> {
    pub(crate) fn new(set: Rc<S>, category: Category) -> Self {
        Self { set, category }
    }
}

impl<T, S: TokenSet<T>> Classifier<T> for TokenSetClassifier<S> {
    fn classify(&self, lexeme: &str, state: &mut StateHandle) -> Option<Verdict<T>> {
        match self.category {
            Category::Identifier => self.set.ident(lexeme, state),
            Category::Number => self.set.number(lexeme, state),
            Category::String => self.set.string(lexeme, state),
            Category::Operator => self.set.operator(lexeme, state),
        }
    }
}

/// Ordered classifiers for one category.
pub struct ClassifierChain<T> {
    classifiers: Vec<Box<dyn Classifier<T>>>,
}

impl<T> ClassifierChain<T> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            classifiers: Vec::new(),
        }
    }

    /// Appends a classifier. It is consulted before every earlier one.
    pub fn push(&mut self, classifier: Box<dyn Classifier<T>>) {
        self.classifiers.push(classifier);
    }

    /// Number of registered classifiers.
    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Walks the chain newest-first and returns the first verdict.
    pub fn resolve(&self, lexeme: &str, state: &mut StateHandle) -> Option<Verdict<T>> {
        self.classifiers
            .iter()
            .rev()
            .find_map(|classifier| classifier.classify(lexeme, state))
    }
}

impl<T> Default for ClassifierChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The four chains a lexer consults.
pub struct Registry<T> {
    identifier: ClassifierChain<T>,
    number: ClassifierChain<T>,
    string: ClassifierChain<T>,
    operator: ClassifierChain<T>,
}

impl<T> Registry<T> {
    /// Creates a registry with four empty chains.
    pub fn new() -> Self {
        Self {
            identifier: ClassifierChain::new(),
            number: ClassifierChain::new(),
            string: ClassifierChain::new(),
            operator: ClassifierChain::new(),
        }
    }

    /// Returns the chain for `category`.
    pub fn chain(&self, category: Category) -> &ClassifierChain<T> {
        match category {
            Category::Identifier => &self.identifier,
            Category::Number => &self.number,
            Category::String => &self.string,
            Category::Operator => &self.operator,
        }
    }

    fn chain_mut(&mut self, category: Category) -> &mut ClassifierChain<T> {
        match category {
            Category::Identifier => &mut self.identifier,
            Category::Number => &mut self.number,
            Category::String => &mut self.string,
            Category::Operator => &mut self.operator,
        }
    }

    /// Appends `classifier` to the chain for `category`.
    pub fn register(&mut self, category: Category, classifier: Box<dyn Classifier<T>>) {
        let chain = self.chain_mut(category);
        chain.push(classifier);
        log::debug!("registered {} classifier (chain depth {})", category, chain.len());
    }

    /// Resolves `lexeme` against the chain for `category`.
    pub fn resolve(
        &self,
        category: Category,
        lexeme: &str,
        state: &mut StateHandle,
    ) -> Option<Verdict<T>> {
        self.chain(category).resolve(lexeme, state)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
struct TableEntry<T> {
    ty: T,
    then: Option<LexerState>,
}

/// A table-driven classifier mapping exact lexemes to token types.
///
/// Entries can be gated on a lexer state; a gated entry only matches while
/// the lexer is in that state and takes precedence over an ungated entry for
/// the same lexeme. An entry can also move the lexer to a new state when it
/// matches, which is how contextual keyword pairs are expressed.
///
/// # Example
///
/// ```
/// use lexis_lex::registry::{Classifier, LexemeTable};
/// use lexis_lex::{LexerState, StateHandle, Verdict};
///
/// let table = LexemeTable::new()
///     .entry_then("for", "for", LexerState::ContextualQualifier)
///     .entry_in(LexerState::ContextualQualifier, "all", "all");
///
/// let mut state = StateHandle::new();
/// assert_eq!(table.classify("all", &mut state), None);
/// assert_eq!(table.classify("for", &mut state), Some(Verdict::Emit("for")));
/// assert_eq!(table.classify("all", &mut state), Some(Verdict::Emit("all")));
/// ```
#[derive(Clone)]
pub struct LexemeTable<T> {
    generic: FxHashMap<Box<str>, TableEntry<T>>,
    gated: FxHashMap<LexerState, FxHashMap<Box<str>, TableEntry<T>>>,
    skipped: FxHashSet<Box<str>>,
}

impl<T: Clone> LexemeTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            generic: FxHashMap::default(),
            gated: FxHashMap::default(),
            skipped: FxHashSet::default(),
        }
    }

    /// Maps `lexeme` to `ty` in every state.
    pub fn entry(mut self, lexeme: &str, ty: T) -> Self {
        self.generic.insert(lexeme.into(), TableEntry { ty, then: None });
        self
    }

    /// Maps `lexeme` to `ty` and moves the lexer to `then` on a match.
    pub fn entry_then(mut self, lexeme: &str, ty: T, then: LexerState) -> Self {
        self.generic.insert(
            lexeme.into(),
            TableEntry {
                ty,
                then: Some(then),
            },
        );
        self
    }

    /// Maps `lexeme` to `ty` only while the lexer is in `state`.
    ///
    /// A match returns the lexer to [`LexerState::Default`].
    pub fn entry_in(mut self, state: LexerState, lexeme: &str, ty: T) -> Self {
        self.gated.entry(state).or_default().insert(
            lexeme.into(),
            TableEntry {
                ty,
                then: Some(LexerState::Default),
            },
        );
        self
    }

    /// Classifies `lexeme` as [`Verdict::Skip`].
    pub fn skip(mut self, lexeme: &str) -> Self {
        self.skipped.insert(lexeme.into());
        self
    }

    /// Number of entries across all states.
    pub fn len(&self) -> usize {
        self.generic.len()
            + self.skipped.len()
            + self.gated.values().map(FxHashMap::len).sum::<usize>()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for LexemeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Classifier<T> for LexemeTable<T> {
    fn classify(&self, lexeme: &str, state: &mut StateHandle) -> Option<Verdict<T>> {
        let entry = self
            .gated
            .get(&state.get())
            .and_then(|entries| entries.get(lexeme))
            .or_else(|| self.generic.get(lexeme));

        if let Some(entry) = entry {
            if let Some(next) = entry.then {
                state.set(next);
            }
            return Some(Verdict::Emit(entry.ty.clone()));
        }

        if self.skipped.contains(lexeme) {
            return Some(Verdict::Skip);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(_: &str, _: &mut StateHandle) -> Option<Verdict<&'static str>> {
        Some(Verdict::Emit("name"))
    }

    #[test]
    fn test_empty_chain_has_no_verdict() {
        let chain: ClassifierChain<u8> = ClassifierChain::new();
        let mut state = StateHandle::new();
        assert!(chain.is_empty());
        assert_eq!(chain.resolve("x", &mut state), None);
    }

    #[test]
    fn test_newest_classifier_wins() {
        let mut chain: ClassifierChain<i32> = ClassifierChain::new();
        chain.push(Box::new(|_: &str, _: &mut StateHandle| Some(Verdict::Emit(1))));
        chain.push(Box::new(|_: &str, _: &mut StateHandle| Some(Verdict::Emit(2))));
        let mut state = StateHandle::new();
        assert_eq!(chain.resolve("x", &mut state), Some(Verdict::Emit(2)));
    }

    #[test]
    fn test_deferral_falls_through_to_older() {
        let mut chain: ClassifierChain<&str> = ClassifierChain::new();
        chain.push(Box::new(name));
        chain.push(Box::new(|lexeme: &str, _: &mut StateHandle| {
            (lexeme == "if").then_some(Verdict::Emit("if"))
        }));
        let mut state = StateHandle::new();
        assert_eq!(chain.resolve("if", &mut state), Some(Verdict::Emit("if")));
        assert_eq!(chain.resolve("iff", &mut state), Some(Verdict::Emit("name")));
    }

    #[test]
    fn test_state_writes_are_visible_to_later_classifiers() {
        let mut chain: ClassifierChain<bool> = ClassifierChain::new();
        // Oldest: observes the state written by the newer one.
        chain.push(Box::new(|_: &str, state: &mut StateHandle| {
            Some(Verdict::Emit(state.is_qualifying()))
        }));
        chain.push(Box::new(|_: &str, state: &mut StateHandle| {
            state.arm_qualifier();
            None
        }));
        let mut state = StateHandle::new();
        assert_eq!(chain.resolve("x", &mut state), Some(Verdict::Emit(true)));
    }

    #[test]
    fn test_registry_keeps_chains_separate() {
        let mut registry: Registry<&str> = Registry::new();
        registry.register(Category::Number, Box::new(|_: &str, _: &mut StateHandle| {
            Some(Verdict::Emit("num"))
        }));
        let mut state = StateHandle::new();
        assert_eq!(
            registry.resolve(Category::Number, "1", &mut state),
            Some(Verdict::Emit("num"))
        );
        assert_eq!(registry.resolve(Category::Identifier, "1", &mut state), None);
        assert_eq!(registry.chain(Category::Number).len(), 1);
        assert!(registry.chain(Category::Operator).is_empty());
    }

    #[test]
    fn test_token_set_adapter_dispatches_by_category() {
        struct Digits;
        impl TokenSet<char> for Digits {
            fn number(&self, _: &str, _: &mut StateHandle) -> Option<Verdict<char>> {
                Some(Verdict::Emit('n'))
            }
        }

        let set = Rc::new(Digits);
        let number = TokenSetClassifier::new(Rc::clone(&set), Category::Number);
        let ident = TokenSetClassifier::new(set, Category::Identifier);
        let mut state = StateHandle::new();
        assert_eq!(
            Classifier::<char>::classify(&number, "7", &mut state),
            Some(Verdict::Emit('n'))
        );
        assert_eq!(Classifier::<char>::classify(&ident, "x", &mut state), None);
    }

    #[test]
    fn test_table_gated_entry_takes_precedence() {
        let table = LexemeTable::new()
            .entry("any", "name")
            .entry_in(LexerState::ContextualQualifier, "any", "any");
        let mut state = StateHandle::new();
        assert_eq!(table.classify("any", &mut state), Some(Verdict::Emit("name")));

        state.arm_qualifier();
        assert_eq!(table.classify("any", &mut state), Some(Verdict::Emit("any")));
        assert!(state.is(LexerState::Default));
    }

    #[test]
    fn test_table_skip_entry() {
        let table: LexemeTable<u8> = LexemeTable::new().skip("\n");
        let mut state = StateHandle::new();
        assert_eq!(table.classify("\n", &mut state), Some(Verdict::Skip));
        assert_eq!(table.classify("+", &mut state), None);
        assert_eq!(table.len(), 1);
    }
}
