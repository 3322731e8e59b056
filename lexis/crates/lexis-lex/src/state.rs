//! Lexer state machine.
//!
//! The state is the only thing that makes classification context-sensitive.
//! It lives on the [`Lexer`](crate::Lexer) and is handed to every classifier
//! as `&mut StateHandle`, so a classifier's dependency on context is visible
//! in its signature.
//!
//! ```text
//!            introducing keyword            next identifier (any outcome)
//!  Default ───────────────────────▶ ContextualQualifier ──────────────────▶ Default
//!     │  ▲
//!   \ │  │ one escape unit decoded
//!     ▼  │
//!  EscapeInProgress
//! ```
//!
//! (`\` is a backslash inside a string literal.) A decoded escape returns to
//! the state the string was entered in, so an armed qualifier survives it.

/// The states a scan can be in between characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexerState {
    /// Initial state; most transitions return here.
    #[default]
    Default,
    /// Armed by a qualifier-introducing keyword (e.g. `for`); resolved by
    /// the next identifier.
    ContextualQualifier,
    /// Inside a string literal, right after a backslash.
    EscapeInProgress,
}

/// Mutable view of the lexer state passed to classifiers.
///
/// Besides the state itself the handle records whether anyone wrote to it
/// since the engine last started a resolution. The engine uses that to
/// resolve an armed [`LexerState::ContextualQualifier`] after exactly one
/// identifier unless a classifier re-armed or cleared it itself.
///
/// # Example
///
/// ```
/// use lexis_lex::{LexerState, StateHandle};
///
/// let mut state = StateHandle::new();
/// assert!(state.is(LexerState::Default));
///
/// state.arm_qualifier();
/// assert!(state.is_qualifying());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateHandle {
    state: LexerState,
    written: bool,
    /// State to return to once an escape unit is decoded
    resume: LexerState,
}

impl StateHandle {
    /// Creates a handle in [`LexerState::Default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[inline]
    pub fn get(&self) -> LexerState {
        self.state
    }

    /// Returns true if the current state is `state`.
    #[inline]
    pub fn is(&self, state: LexerState) -> bool {
        self.state == state
    }

    /// Returns true while a contextual qualifier is expected.
    #[inline]
    pub fn is_qualifying(&self) -> bool {
        self.state == LexerState::ContextualQualifier
    }

    /// Moves to `state`.
    ///
    /// [`LexerState::EscapeInProgress`] belongs to the string scanner and
    /// cannot be entered from a classifier; such writes are ignored.
    #[inline]
    pub fn set(&mut self, state: LexerState) {
        if state == LexerState::EscapeInProgress {
            log::debug!("ignored classifier write of {state:?}");
            return;
        }
        self.state = state;
        self.written = true;
    }

    /// Arms [`LexerState::ContextualQualifier`].
    #[inline]
    pub fn arm_qualifier(&mut self) {
        self.set(LexerState::ContextualQualifier);
    }

    /// Returns to [`LexerState::Default`].
    #[inline]
    pub fn reset(&mut self) {
        self.set(LexerState::Default);
    }

    /// Starts a resolution: clears the write mark and reports the state the
    /// resolution began in.
    pub(crate) fn begin_resolution(&mut self) -> LexerState {
        self.written = false;
        self.state
    }

    /// Whether a classifier wrote to the handle since `begin_resolution`.
    pub(crate) fn was_written(&self) -> bool {
        self.written
    }

    /// Enters [`LexerState::EscapeInProgress`], remembering the current state.
    pub(crate) fn begin_escape(&mut self) {
        self.resume = self.state;
        self.state = LexerState::EscapeInProgress;
    }

    /// Leaves [`LexerState::EscapeInProgress`] for the state it was entered from.
    pub(crate) fn end_escape(&mut self) {
        self.state = self.resume;
    }

    /// Forces `state` without marking the handle as written.
    pub(crate) fn restore(&mut self, state: LexerState) {
        self.state = state;
    }
}
