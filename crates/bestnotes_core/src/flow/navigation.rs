//! Navigation stack and per-screen frame arena.
//!
//! # Responsibility
//! - Keep one frame of local state per pushed screen.
//! - Provide stack semantics: push makes a screen current, pop discards the
//!   top frame and exposes the previous frame's state verbatim.
//!
//! # Invariants
//! - The root frame is never popped; back at the root is a silent no-op.
//! - Frames are built fresh on push and dropped on pop, so every screen's
//!   state is per-appearance.

use crate::flow::composer::Composer;
use crate::flow::login::LoginForm;
use crate::flow::pager::Pager;
use crate::model::screen::Screen;

/// One stack entry bundling a screen with its local state.
///
/// The variant payloads are the arena: nothing outside the frame owns screen
/// state, so dropping the frame is exactly the state-destruction the flow
/// requires on pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenFrame {
    /// Title screen; fully static, no local state.
    Title,
    /// Onboarding carousel with its page index.
    Onboarding(Pager),
    /// Login form with typed fields and the error flag.
    Login(LoginForm),
    /// Home screen; its only local state is the composer modal.
    Home(Composer),
}

impl ScreenFrame {
    /// Screen identity of this frame.
    pub fn screen(&self) -> Screen {
        match self {
            Self::Title => Screen::Title,
            Self::Onboarding(_) => Screen::Onboarding,
            Self::Login(_) => Screen::Login,
            Self::Home(_) => Screen::Home,
        }
    }
}

/// Forward/back navigation stack with a pinned root.
///
/// The root is stored apart from the pushed frames, which makes "the stack is
/// never empty" structural rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    root: ScreenFrame,
    pushed: Vec<ScreenFrame>,
}

impl NavigationStack {
    /// Creates a stack whose only entry is the given root frame.
    pub fn new(root: ScreenFrame) -> Self {
        Self {
            root,
            pushed: Vec::new(),
        }
    }

    /// Pushes a fresh frame, making its screen current.
    pub fn push(&mut self, frame: ScreenFrame) {
        self.pushed.push(frame);
    }

    /// Pops the top frame, discarding its state.
    ///
    /// Returns `false` when only the root remains; the root is kept.
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    /// Borrows the current (top) frame.
    pub fn current(&self) -> &ScreenFrame {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Mutably borrows the current (top) frame.
    pub fn current_mut(&mut self) -> &mut ScreenFrame {
        self.pushed.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of frames on the stack, root included.
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }
}
