//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level flow functions to Dart via FRB.
//! - Keep one process-wide flow session behind the bridge.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every action returns an envelope describing the resulting screen, so
//!   the shell can render without a second round trip.
//! - Credential and draft text pass through; they are never logged here.

use bestnotes_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner, AppFlow, FlowResult, FlowSnapshot,
    LoginAttempt, APP_TAGLINE, APP_TITLE, COMPOSER_NAV_TITLE, HOME_WELCOME_MESSAGE,
    LOGIN_INVALID_MESSAGE, LOGIN_NAV_TITLE, ONBOARDING_NAV_TITLE,
};
use log::warn;
use std::sync::{Mutex, OnceLock};

static FLOW_SESSION: OnceLock<Mutex<AppFlow>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Default log level for the current build mode.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Canonical user-facing strings for shell rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCopyResponse {
    pub app_title: String,
    pub app_tagline: String,
    pub onboarding_nav_title: String,
    pub login_nav_title: String,
    pub login_invalid_message: String,
    pub home_welcome_message: String,
    pub composer_nav_title: String,
}

/// Returns the canonical copy so core and shell cannot drift.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn app_copy() -> AppCopyResponse {
    AppCopyResponse {
        app_title: APP_TITLE.to_string(),
        app_tagline: APP_TAGLINE.to_string(),
        onboarding_nav_title: ONBOARDING_NAV_TITLE.to_string(),
        login_nav_title: LOGIN_NAV_TITLE.to_string(),
        login_invalid_message: LOGIN_INVALID_MESSAGE.to_string(),
        home_welcome_message: HOME_WELCOME_MESSAGE.to_string(),
        composer_nav_title: COMPOSER_NAV_TITLE.to_string(),
    }
}

/// Onboarding card as rendered by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub emoji: String,
}

/// Carousel section of the snapshot; present on the onboarding screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerSnapshot {
    pub index: u32,
    pub card_count: u32,
    pub is_first: bool,
    pub is_last: bool,
    pub card: CardSnapshot,
}

/// Login section of the snapshot; present on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSnapshot {
    pub email: String,
    pub password: String,
    pub is_valid: bool,
    pub show_error: bool,
    pub error_message: Option<String>,
}

/// Composer section of the snapshot; present on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerSnapshot {
    pub visible: bool,
    pub draft: String,
}

/// Full render model for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSnapshotResponse {
    pub screen: String,
    pub depth: u32,
    pub pager: Option<PagerSnapshot>,
    pub login: Option<LoginSnapshot>,
    pub composer: Option<ComposerSnapshot>,
}

/// Generic action envelope for flow dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowActionResponse {
    /// Whether the dispatch was legal for the current screen.
    pub ok: bool,
    /// Screen after the dispatch, as a stable snake_case label.
    pub screen: String,
    /// Stack depth after the dispatch, root included.
    pub depth: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Submission envelope distinguishing rejection from illegal dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmitResponse {
    /// Whether the dispatch was legal (a rejected attempt is still `ok`).
    pub ok: bool,
    /// Whether the Login → Home transition was performed.
    pub logged_in: bool,
    pub screen: String,
    pub message: String,
}

/// Returns the render model for the current screen.
///
/// # FFI contract
/// - Sync call, in-memory only, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_snapshot() -> FlowSnapshotResponse {
    with_flow(|flow| to_snapshot_response(flow.snapshot()))
}

/// Discards all flow state and returns to a fresh title screen.
///
/// # FFI contract
/// - Sync call, never throws, always succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_reset() -> FlowActionResponse {
    with_flow(|flow| {
        flow.reset();
        success_envelope(flow, "Flow reset.")
    })
}

/// Title → Onboarding.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_start_onboarding() -> FlowActionResponse {
    dispatch(|flow| flow.start_onboarding(), "Onboarding started.")
}

/// Title → Login.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_log_in() -> FlowActionResponse {
    dispatch(|flow| flow.log_in(), "Login opened.")
}

/// Advances the onboarding carousel; clamped on the last card.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_pager_next() -> FlowActionResponse {
    dispatch(|flow| flow.pager_next(), "Carousel advanced.")
}

/// Steps the onboarding carousel back; clamped on the first card.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_pager_back() -> FlowActionResponse {
    dispatch(|flow| flow.pager_back(), "Carousel stepped back.")
}

/// Onboarding → Login from the last card; absorbed earlier in the deck.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_get_started() -> FlowActionResponse {
    dispatch(|flow| flow.get_started(), "Onboarding finished.")
}

/// Replaces the email field with the latest typed contents.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_set_email(email: String) -> FlowActionResponse {
    dispatch(|flow| flow.set_email(email), "Email updated.")
}

/// Replaces the password field with the latest typed contents.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_set_password(password: String) -> FlowActionResponse {
    dispatch(|flow| flow.set_password(password), "Password updated.")
}

/// Attempts the gated Login → Home transition.
///
/// # FFI contract
/// - Sync call, never throws.
/// - A rejected attempt is `ok = true, logged_in = false`; the snapshot then
///   carries the visible error message.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_submit() -> LoginSubmitResponse {
    with_flow(|flow| match flow.submit() {
        Ok(LoginAttempt::Permitted) => LoginSubmitResponse {
            ok: true,
            logged_in: true,
            screen: flow.screen().label().to_string(),
            message: "Logged in.".to_string(),
        },
        Ok(LoginAttempt::Rejected) => LoginSubmitResponse {
            ok: true,
            logged_in: false,
            screen: flow.screen().label().to_string(),
            message: "Submission rejected; no transition.".to_string(),
        },
        Err(err) => {
            warn!("event=flow_dispatch module=ffi status=error error={err}");
            LoginSubmitResponse {
                ok: false,
                logged_in: false,
                screen: flow.screen().label().to_string(),
                message: err.to_string(),
            }
        }
    })
}

/// "Forgot password?" has no handler; this dispatch changes nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_forgot_password() -> FlowActionResponse {
    dispatch(|flow| flow.forgot_password(), "Nothing happens.")
}

/// Presents the note composer with an empty draft.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_open_composer() -> FlowActionResponse {
    dispatch(|flow| flow.open_composer(), "Composer opened.")
}

/// Replaces the open composer's draft with the latest typed contents.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_set_draft(draft: String) -> FlowActionResponse {
    dispatch(|flow| flow.set_draft(draft), "Draft updated.")
}

/// Dismisses the composer via Save; the draft is discarded.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_save_composer() -> FlowActionResponse {
    dispatch(|flow| flow.save_composer(), "Composer dismissed.")
}

/// Dismisses the composer via Cancel; the draft is discarded.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_cancel_composer() -> FlowActionResponse {
    dispatch(|flow| flow.cancel_composer(), "Composer dismissed.")
}

/// Implicit back gesture; a silent no-op at the title root.
///
/// # FFI contract
/// - Sync call, never throws, always `ok`.
#[flutter_rust_bridge::frb(sync)]
pub fn flow_back() -> FlowActionResponse {
    with_flow(|flow| {
        let message = if flow.pop() {
            "Went back."
        } else {
            "Already at the title screen."
        };
        success_envelope(flow, message)
    })
}

fn with_flow<T>(f: impl FnOnce(&mut AppFlow) -> T) -> T {
    let session = FLOW_SESSION.get_or_init(|| Mutex::new(AppFlow::new()));
    // A poisoned lock still holds consistent flow state; recover instead of
    // propagating a panic across the bridge.
    let mut guard = match session.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

fn dispatch(
    action: impl FnOnce(&mut AppFlow) -> FlowResult<()>,
    done: &str,
) -> FlowActionResponse {
    with_flow(|flow| match action(flow) {
        Ok(()) => success_envelope(flow, done),
        Err(err) => {
            warn!("event=flow_dispatch module=ffi status=error error={err}");
            FlowActionResponse {
                ok: false,
                screen: flow.screen().label().to_string(),
                depth: flow.depth() as u32,
                message: err.to_string(),
            }
        }
    })
}

fn success_envelope(flow: &AppFlow, message: &str) -> FlowActionResponse {
    FlowActionResponse {
        ok: true,
        screen: flow.screen().label().to_string(),
        depth: flow.depth() as u32,
        message: message.to_string(),
    }
}

fn to_snapshot_response(snapshot: FlowSnapshot) -> FlowSnapshotResponse {
    FlowSnapshotResponse {
        screen: snapshot.screen.label().to_string(),
        depth: snapshot.depth as u32,
        pager: snapshot.pager.map(|pager| PagerSnapshot {
            index: pager.index as u32,
            card_count: pager.card_count as u32,
            is_first: pager.is_first,
            is_last: pager.is_last,
            card: CardSnapshot {
                id: pager.card.id.to_string(),
                title: pager.card.title,
                subtitle: pager.card.subtitle,
                emoji: pager.card.emoji,
            },
        }),
        login: snapshot.login.map(|login| LoginSnapshot {
            email: login.email,
            password: login.password,
            is_valid: login.is_valid,
            show_error: login.show_error,
            error_message: login.error_message,
        }),
        composer: snapshot.composer.map(|composer| ComposerSnapshot {
            visible: composer.visible,
            draft: composer.draft,
        }),
    }
}
