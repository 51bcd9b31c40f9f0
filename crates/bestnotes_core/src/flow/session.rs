//! Flow session: action dispatch over the navigation stack.
//!
//! # Responsibility
//! - Apply the legal transition set to whatever frame is current.
//! - Produce the serializable snapshot the UI shell renders from.
//!
//! # Invariants
//! - Dispatch never panics; illegal dispatches come back as [`FlowError`].
//! - Guard misses the rendered UI can produce (boundary pager taps, invalid
//!   submits, back at the root, get-started before the last card) are
//!   absorbed without error.
//! - Log events carry screen labels, depths and outcomes only; credential
//!   and draft text never appear.

use crate::flow::composer::Composer;
use crate::flow::login::{LoginAttempt, LoginForm};
use crate::flow::navigation::{NavigationStack, ScreenFrame};
use crate::flow::pager::Pager;
use crate::model::copy::LOGIN_INVALID_MESSAGE;
use crate::model::onboarding::OnboardingCard;
use crate::model::screen::Screen;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for flow dispatch.
pub type FlowResult<T> = Result<T, FlowError>;

/// Every action the UI shell can dispatch into the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    StartOnboarding,
    LogIn,
    PagerNext,
    PagerBack,
    GetStarted,
    SetEmail,
    SetPassword,
    Submit,
    ForgotPassword,
    OpenComposer,
    SetDraft,
    SaveComposer,
    CancelComposer,
    Pop,
}

impl FlowAction {
    /// Stable label used in log events and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::StartOnboarding => "start_onboarding",
            Self::LogIn => "log_in",
            Self::PagerNext => "pager_next",
            Self::PagerBack => "pager_back",
            Self::GetStarted => "get_started",
            Self::SetEmail => "set_email",
            Self::SetPassword => "set_password",
            Self::Submit => "submit",
            Self::ForgotPassword => "forgot_password",
            Self::OpenComposer => "open_composer",
            Self::SetDraft => "set_draft",
            Self::SaveComposer => "save_composer",
            Self::CancelComposer => "cancel_composer",
            Self::Pop => "pop",
        }
    }
}

impl Display for FlowAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Dispatch error for actions the rendered UI could not have produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The action belongs to a different screen than the current one.
    ActionUnavailable { action: FlowAction, screen: Screen },
    /// The composer action requires the opposite modal visibility.
    ComposerStateMismatch { action: FlowAction, visible: bool },
}

impl Display for FlowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActionUnavailable { action, screen } => {
                write!(f, "action `{action}` is unavailable on screen `{screen}`")
            }
            Self::ComposerStateMismatch { action, visible } => {
                let state = if *visible { "visible" } else { "hidden" };
                write!(f, "action `{action}` does not apply while the composer is {state}")
            }
        }
    }
}

impl Error for FlowError {}

/// Render model of the onboarding carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerView {
    pub index: usize,
    pub card_count: usize,
    /// Back button is hidden when true.
    pub is_first: bool,
    /// Next is replaced by the get-started action when true.
    pub is_last: bool,
    pub card: OnboardingCard,
}

/// Render model of the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginView {
    pub email: String,
    pub password: String,
    /// Gates the submit button; recomputed on every snapshot.
    pub is_valid: bool,
    pub show_error: bool,
    /// Populated with the static message while `show_error` is set.
    pub error_message: Option<String>,
}

/// Render model of the composer modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerView {
    pub visible: bool,
    pub draft: String,
}

/// Full render model for the current screen.
///
/// Exactly one of the optional sections is populated for screens that carry
/// local state; the title screen carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub screen: Screen,
    pub depth: usize,
    pub pager: Option<PagerView>,
    pub login: Option<LoginView>,
    pub composer: Option<ComposerView>,
}

/// Process-level flow session owning the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppFlow {
    stack: NavigationStack,
}

impl AppFlow {
    /// Creates a session positioned on the title screen.
    pub fn new() -> Self {
        Self {
            stack: NavigationStack::new(ScreenFrame::Title),
        }
    }

    /// Discards all frames and returns to a fresh title screen.
    pub fn reset(&mut self) {
        self.stack = NavigationStack::new(ScreenFrame::Title);
        info!("event=flow_reset module=flow status=ok");
    }

    /// Screen identity of the current frame.
    pub fn screen(&self) -> Screen {
        self.stack.current().screen()
    }

    /// Stack depth, root included.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Title → Onboarding.
    pub fn start_onboarding(&mut self) -> FlowResult<()> {
        self.require(FlowAction::StartOnboarding, Screen::Title)?;
        self.push(ScreenFrame::Onboarding(Pager::new()));
        Ok(())
    }

    /// Title → Login.
    pub fn log_in(&mut self) -> FlowResult<()> {
        self.require(FlowAction::LogIn, Screen::Title)?;
        self.push(ScreenFrame::Login(LoginForm::new()));
        Ok(())
    }

    /// Advances the carousel; clamped on the last card.
    pub fn pager_next(&mut self) -> FlowResult<()> {
        let pager = self.pager_mut(FlowAction::PagerNext)?;
        let before = pager.index();
        pager.next();
        log_pager_move("next", before, pager.index());
        Ok(())
    }

    /// Steps the carousel back; clamped on the first card.
    pub fn pager_back(&mut self) -> FlowResult<()> {
        let pager = self.pager_mut(FlowAction::PagerBack)?;
        let before = pager.index();
        pager.back();
        log_pager_move("back", before, pager.index());
        Ok(())
    }

    /// Onboarding → Login, legal only from the last card.
    ///
    /// Before the last card the action is absorbed without effect, matching
    /// the carousel's clamp behavior; the terminal button is not rendered
    /// there in the first place.
    pub fn get_started(&mut self) -> FlowResult<()> {
        let pager = self.pager_mut(FlowAction::GetStarted)?;
        if !pager.is_last() {
            info!(
                "event=get_started module=flow status=ignored index={}",
                pager.index()
            );
            return Ok(());
        }
        self.push(ScreenFrame::Login(LoginForm::new()));
        Ok(())
    }

    /// Replaces the email field on the login screen.
    pub fn set_email(&mut self, email: impl Into<String>) -> FlowResult<()> {
        self.login_mut(FlowAction::SetEmail)?.set_email(email);
        Ok(())
    }

    /// Replaces the password field on the login screen.
    pub fn set_password(&mut self, password: impl Into<String>) -> FlowResult<()> {
        self.login_mut(FlowAction::SetPassword)?.set_password(password);
        Ok(())
    }

    /// Attempts the gated Login → Home transition.
    ///
    /// # Contract
    /// - [`LoginAttempt::Permitted`]: the Home frame has been pushed.
    /// - [`LoginAttempt::Rejected`]: no transition; the error message is now
    ///   visible and the user may retry.
    pub fn submit(&mut self) -> FlowResult<LoginAttempt> {
        let form = self.login_mut(FlowAction::Submit)?;
        match form.submit() {
            LoginAttempt::Permitted => {
                info!("event=login_submit module=flow status=ok");
                self.push(ScreenFrame::Home(Composer::new()));
                Ok(LoginAttempt::Permitted)
            }
            LoginAttempt::Rejected => {
                info!("event=login_submit module=flow status=rejected");
                Ok(LoginAttempt::Rejected)
            }
        }
    }

    /// "Forgot password?" has no handler; dispatching it changes nothing.
    pub fn forgot_password(&self) -> FlowResult<()> {
        match self.stack.current() {
            ScreenFrame::Login(form) => {
                form.forgot_password();
                Ok(())
            }
            frame => Err(FlowError::ActionUnavailable {
                action: FlowAction::ForgotPassword,
                screen: frame.screen(),
            }),
        }
    }

    /// Presents the composer with an empty draft.
    pub fn open_composer(&mut self) -> FlowResult<()> {
        let composer = self.composer_mut(FlowAction::OpenComposer)?;
        if composer.is_visible() {
            // The New Note button is covered while the sheet is up; a repeat
            // open must not reset a live draft.
            return Err(FlowError::ComposerStateMismatch {
                action: FlowAction::OpenComposer,
                visible: true,
            });
        }
        composer.open();
        info!("event=composer_open module=flow status=ok");
        Ok(())
    }

    /// Replaces the open composer's draft with the latest typed contents.
    pub fn set_draft(&mut self, draft: impl Into<String>) -> FlowResult<()> {
        let composer = self.visible_composer_mut(FlowAction::SetDraft)?;
        composer.set_draft(draft);
        Ok(())
    }

    /// Dismisses the composer via Save; the draft is discarded.
    pub fn save_composer(&mut self) -> FlowResult<()> {
        let composer = self.visible_composer_mut(FlowAction::SaveComposer)?;
        composer.save();
        info!("event=composer_close module=flow status=ok reason=save");
        Ok(())
    }

    /// Dismisses the composer via Cancel; the draft is discarded.
    pub fn cancel_composer(&mut self) -> FlowResult<()> {
        let composer = self.visible_composer_mut(FlowAction::CancelComposer)?;
        composer.cancel();
        info!("event=composer_close module=flow status=ok reason=cancel");
        Ok(())
    }

    /// Implicit back gesture: pops the top frame unconditionally.
    ///
    /// Returns `false` at the title root, where back does nothing. In-flight
    /// local edits on the popped frame are discarded without confirmation.
    pub fn pop(&mut self) -> bool {
        let leaving = self.screen();
        let popped = self.stack.pop();
        if popped {
            info!(
                "event=nav_pop module=flow status=ok from={} screen={} depth={}",
                leaving,
                self.screen(),
                self.depth()
            );
        } else {
            debug!("event=nav_pop module=flow status=ignored screen={leaving}");
        }
        popped
    }

    /// Builds the render model for the current frame.
    pub fn snapshot(&self) -> FlowSnapshot {
        let mut snapshot = FlowSnapshot {
            screen: self.screen(),
            depth: self.depth(),
            pager: None,
            login: None,
            composer: None,
        };
        match self.stack.current() {
            ScreenFrame::Title => {}
            ScreenFrame::Onboarding(pager) => {
                snapshot.pager = Some(PagerView {
                    index: pager.index(),
                    card_count: pager.card_count(),
                    is_first: pager.is_first(),
                    is_last: pager.is_last(),
                    card: pager.card().clone(),
                });
            }
            ScreenFrame::Login(form) => {
                snapshot.login = Some(LoginView {
                    email: form.email().to_string(),
                    password: form.password().to_string(),
                    is_valid: form.is_valid(),
                    show_error: form.shows_error(),
                    error_message: form
                        .shows_error()
                        .then(|| LOGIN_INVALID_MESSAGE.to_string()),
                });
            }
            ScreenFrame::Home(composer) => {
                snapshot.composer = Some(ComposerView {
                    visible: composer.is_visible(),
                    draft: composer.draft().to_string(),
                });
            }
        }
        snapshot
    }

    fn push(&mut self, frame: ScreenFrame) {
        let screen = frame.screen();
        self.stack.push(frame);
        info!(
            "event=nav_push module=flow status=ok screen={} depth={}",
            screen,
            self.depth()
        );
    }

    fn require(&self, action: FlowAction, screen: Screen) -> FlowResult<()> {
        let current = self.screen();
        if current == screen {
            Ok(())
        } else {
            Err(FlowError::ActionUnavailable {
                action,
                screen: current,
            })
        }
    }

    fn pager_mut(&mut self, action: FlowAction) -> FlowResult<&mut Pager> {
        match self.stack.current_mut() {
            ScreenFrame::Onboarding(pager) => Ok(pager),
            frame => Err(FlowError::ActionUnavailable {
                action,
                screen: frame.screen(),
            }),
        }
    }

    fn login_mut(&mut self, action: FlowAction) -> FlowResult<&mut LoginForm> {
        match self.stack.current_mut() {
            ScreenFrame::Login(form) => Ok(form),
            frame => Err(FlowError::ActionUnavailable {
                action,
                screen: frame.screen(),
            }),
        }
    }

    fn composer_mut(&mut self, action: FlowAction) -> FlowResult<&mut Composer> {
        match self.stack.current_mut() {
            ScreenFrame::Home(composer) => Ok(composer),
            frame => Err(FlowError::ActionUnavailable {
                action,
                screen: frame.screen(),
            }),
        }
    }

    fn visible_composer_mut(&mut self, action: FlowAction) -> FlowResult<&mut Composer> {
        let composer = self.composer_mut(action)?;
        if composer.is_visible() {
            Ok(composer)
        } else {
            Err(FlowError::ComposerStateMismatch {
                action,
                visible: false,
            })
        }
    }
}

impl Default for AppFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn log_pager_move(direction: &str, before: usize, after: usize) {
    let status = if before == after { "clamped" } else { "ok" };
    debug!("event=pager_move module=flow status={status} direction={direction} index={after}");
}
