//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bestnotes_core` linkage.
//! - Walk the scripted happy path with deterministic output for quick local
//!   sanity checks.

use bestnotes_core::{AppFlow, FlowError, LoginAttempt};

fn main() {
    println!("bestnotes_core ping={}", bestnotes_core::ping());
    println!("bestnotes_core version={}", bestnotes_core::core_version());

    if let Err(err) = walk_happy_path() {
        eprintln!("flow walk failed: {err}");
        std::process::exit(1);
    }
}

fn walk_happy_path() -> Result<(), FlowError> {
    let mut flow = AppFlow::new();
    print_position(&flow);

    flow.start_onboarding()?;
    loop {
        let snapshot = flow.snapshot();
        let pager = match snapshot.pager {
            Some(pager) => pager,
            None => break,
        };
        println!(
            "screen={} index={} card={:?}",
            snapshot.screen, pager.index, pager.card.title
        );
        if pager.is_last {
            break;
        }
        flow.pager_next()?;
    }

    flow.get_started()?;
    print_position(&flow);

    flow.set_email("demo".to_string())?;
    flow.set_password("123456".to_string())?;
    let rejected = flow.submit()?;
    println!(
        "submit=rejected still={} error_shown={}",
        flow.screen(),
        rejected == LoginAttempt::Rejected
    );

    flow.set_email("demo@example.com".to_string())?;
    let accepted = flow.submit()?;
    println!(
        "submit=accepted now={} logged_in={}",
        flow.screen(),
        accepted == LoginAttempt::Permitted
    );

    flow.open_composer()?;
    flow.set_draft("smoke-test draft".to_string())?;
    flow.save_composer()?;
    if let Some(composer) = flow.snapshot().composer {
        println!(
            "composer visible={} draft_len={}",
            composer.visible,
            composer.draft.len()
        );
    }

    while flow.pop() {}
    print_position(&flow);
    Ok(())
}

fn print_position(flow: &AppFlow) {
    println!("screen={} depth={}", flow.screen(), flow.depth());
}
