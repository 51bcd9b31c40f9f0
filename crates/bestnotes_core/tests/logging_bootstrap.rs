use bestnotes_core::{init_logging, logging_status};

// One test function on purpose: logging initializes once per process, so all
// init assertions must share a single ordered scenario.
#[test]
fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
    assert!(logging_status().is_none());

    let dir = tempfile::tempdir().expect("create log dir");
    let dir_str = dir
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();

    init_logging("info", &dir_str).expect("first init should succeed");
    init_logging("info", &dir_str).expect("same config should be idempotent");
    init_logging(" INFO ", &dir_str).expect("level comparison is normalized");

    let level_error = init_logging("debug", &dir_str).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let other = tempfile::tempdir().expect("create second dir");
    let other_str = other
        .path()
        .to_str()
        .expect("temp dir should be valid UTF-8")
        .to_string();
    let dir_error = init_logging("info", &other_str).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, dir.path());

    // The logger holds the directory for the rest of the process.
    std::mem::forget(dir);
}
