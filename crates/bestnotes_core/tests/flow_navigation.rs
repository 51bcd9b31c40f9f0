use bestnotes_core::{
    AppFlow, FlowAction, FlowError, LoginAttempt, Screen, LOGIN_INVALID_MESSAGE,
};

#[test]
fn flow_starts_on_title_with_depth_one() {
    let flow = AppFlow::new();
    assert_eq!(flow.screen(), Screen::Title);
    assert_eq!(flow.depth(), 1);

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.screen, Screen::Title);
    assert!(snapshot.pager.is_none());
    assert!(snapshot.login.is_none());
    assert!(snapshot.composer.is_none());
}

#[test]
fn title_offers_both_outgoing_edges() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");
    assert_eq!(flow.screen(), Screen::Onboarding);

    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    assert_eq!(flow.screen(), Screen::Login);
}

#[test]
fn happy_path_reaches_home_through_onboarding() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");

    for _ in 0..3 {
        flow.pager_next().expect("advance carousel");
    }
    let pager = flow.snapshot().pager.expect("onboarding snapshot");
    assert!(pager.is_last);

    flow.get_started().expect("onboarding -> login");
    assert_eq!(flow.screen(), Screen::Login);

    flow.set_email("a@b.com").expect("type email");
    flow.set_password("123456").expect("type password");
    let attempt = flow.submit().expect("submit valid credentials");
    assert_eq!(attempt, LoginAttempt::Permitted);
    assert_eq!(flow.screen(), Screen::Home);
    assert_eq!(flow.depth(), 4);
}

#[test]
fn rejected_submit_sets_error_flag_and_stays_on_login() {
    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    flow.set_email("abc").expect("type email");
    flow.set_password("123456").expect("type password");

    let attempt = flow.submit().expect("submit runs");
    assert_eq!(attempt, LoginAttempt::Rejected);
    assert_eq!(flow.screen(), Screen::Login);
    assert_eq!(flow.depth(), 2);

    let login = flow.snapshot().login.expect("login snapshot");
    assert!(!login.is_valid);
    assert!(login.show_error);
    assert_eq!(login.error_message.as_deref(), Some(LOGIN_INVALID_MESSAGE));
}

#[test]
fn user_may_retry_after_rejection() {
    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    flow.set_email("a@b.com").expect("type email");
    flow.set_password("12345").expect("five characters fail the gate");
    assert_eq!(flow.submit().expect("submit runs"), LoginAttempt::Rejected);

    flow.set_password("123456").expect("sixth character passes");
    assert_eq!(flow.submit().expect("submit runs"), LoginAttempt::Permitted);
    assert_eq!(flow.screen(), Screen::Home);
}

#[test]
fn get_started_before_last_card_is_absorbed() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");
    flow.pager_next().expect("advance carousel");

    flow.get_started().expect("absorbed, not an error");
    assert_eq!(flow.screen(), Screen::Onboarding);
    assert_eq!(flow.snapshot().pager.expect("pager snapshot").index, 1);
}

#[test]
fn get_started_from_last_card_works_regardless_of_history() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");

    // Wander back and forth before committing.
    flow.pager_next().expect("next");
    flow.pager_next().expect("next");
    flow.pager_back().expect("back");
    flow.pager_next().expect("next");
    flow.pager_next().expect("next");
    flow.pager_next().expect("clamped at last");
    assert!(flow.snapshot().pager.expect("pager snapshot").is_last);

    flow.get_started().expect("onboarding -> login");
    assert_eq!(flow.screen(), Screen::Login);
}

#[test]
fn pop_restores_previous_frame_state_verbatim() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");
    for _ in 0..3 {
        flow.pager_next().expect("advance to last card");
    }
    flow.get_started().expect("onboarding -> login");

    assert!(flow.pop());
    assert_eq!(flow.screen(), Screen::Onboarding);
    assert_eq!(flow.snapshot().pager.expect("pager snapshot").index, 3);
}

#[test]
fn pop_from_home_keeps_login_fields_verbatim() {
    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    flow.set_email("a@b.com").expect("type email");
    flow.set_password("123456").expect("type password");
    flow.submit().expect("submit valid credentials");
    assert_eq!(flow.screen(), Screen::Home);

    assert!(flow.pop());
    let login = flow.snapshot().login.expect("login snapshot");
    assert_eq!(login.email, "a@b.com");
    assert_eq!(login.password, "123456");
    assert!(!login.show_error);
}

#[test]
fn reentered_screens_start_fresh() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");
    flow.pager_next().expect("advance carousel");
    assert!(flow.pop());
    assert_eq!(flow.screen(), Screen::Title);

    flow.start_onboarding().expect("second visit");
    assert_eq!(flow.snapshot().pager.expect("pager snapshot").index, 0);
}

#[test]
fn back_at_title_root_is_a_silent_no_op() {
    let mut flow = AppFlow::new();
    assert!(!flow.pop());
    assert_eq!(flow.screen(), Screen::Title);
    assert_eq!(flow.depth(), 1);
}

#[test]
fn actions_off_their_screen_come_back_as_typed_errors() {
    let mut flow = AppFlow::new();

    let err = flow.pager_next().expect_err("no carousel on title");
    assert_eq!(
        err,
        FlowError::ActionUnavailable {
            action: FlowAction::PagerNext,
            screen: Screen::Title,
        }
    );

    let err = flow.submit().expect_err("no login form on title");
    assert_eq!(
        err,
        FlowError::ActionUnavailable {
            action: FlowAction::Submit,
            screen: Screen::Title,
        }
    );

    flow.start_onboarding().expect("title -> onboarding");
    let err = flow.open_composer().expect_err("no composer on onboarding");
    assert_eq!(
        err,
        FlowError::ActionUnavailable {
            action: FlowAction::OpenComposer,
            screen: Screen::Onboarding,
        }
    );
    assert!(err.to_string().contains("open_composer"));
    assert!(err.to_string().contains("onboarding"));
}

#[test]
fn forgot_password_changes_nothing() {
    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    flow.set_email("someone@example.com").expect("type email");

    let before = flow.snapshot();
    flow.forgot_password().expect("visible no-op");
    assert_eq!(flow.snapshot(), before);
}

#[test]
fn reset_returns_to_a_fresh_title_screen() {
    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    flow.set_email("a@b.com").expect("type email");
    flow.set_password("123456").expect("type password");
    flow.submit().expect("submit valid credentials");
    assert_eq!(flow.screen(), Screen::Home);

    flow.reset();
    assert_eq!(flow.screen(), Screen::Title);
    assert_eq!(flow.depth(), 1);
}
