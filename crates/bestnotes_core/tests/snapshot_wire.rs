use bestnotes_core::{AppFlow, FlowSnapshot, Screen, LOGIN_INVALID_MESSAGE};

#[test]
fn screen_labels_use_stable_snake_case() {
    for (screen, label) in [
        (Screen::Title, "title"),
        (Screen::Onboarding, "onboarding"),
        (Screen::Login, "login"),
        (Screen::Home, "home"),
    ] {
        let json = serde_json::to_value(screen).expect("serialize screen");
        assert_eq!(json, serde_json::json!(label));
        assert_eq!(screen.label(), label);
    }
}

#[test]
fn onboarding_snapshot_uses_expected_wire_fields() {
    let mut flow = AppFlow::new();
    flow.start_onboarding().expect("title -> onboarding");
    flow.pager_next().expect("advance carousel");

    let json = serde_json::to_value(flow.snapshot()).expect("serialize snapshot");
    assert_eq!(json["screen"], "onboarding");
    assert_eq!(json["depth"], 2);
    assert_eq!(json["pager"]["index"], 1);
    assert_eq!(json["pager"]["card_count"], 4);
    assert_eq!(json["pager"]["is_first"], false);
    assert_eq!(json["pager"]["is_last"], false);
    assert_eq!(json["pager"]["card"]["title"], "Stay Organized");
    assert_eq!(json["pager"]["card"]["emoji"], "🗂️");
    assert!(
        json["pager"]["card"]["id"].is_string(),
        "card id crosses the wire as a string"
    );
    assert!(json["login"].is_null());
    assert!(json["composer"].is_null());

    let decoded: FlowSnapshot = serde_json::from_value(json).expect("decode snapshot");
    assert_eq!(decoded, flow.snapshot());
}

#[test]
fn login_snapshot_carries_the_error_message_only_while_shown() {
    let mut flow = AppFlow::new();
    flow.log_in().expect("title -> login");
    flow.set_email("abc").expect("type email");
    flow.set_password("123456").expect("type password");

    let json = serde_json::to_value(flow.snapshot()).expect("serialize snapshot");
    assert_eq!(json["screen"], "login");
    assert_eq!(json["login"]["email"], "abc");
    assert_eq!(json["login"]["is_valid"], false);
    assert_eq!(json["login"]["show_error"], false);
    assert!(json["login"]["error_message"].is_null());

    flow.submit().expect("rejected submit");
    let json = serde_json::to_value(flow.snapshot()).expect("serialize snapshot");
    assert_eq!(json["login"]["show_error"], true);
    assert_eq!(json["login"]["error_message"], LOGIN_INVALID_MESSAGE);
}
