use bestnotes_core::{onboarding_deck, Pager};

#[test]
fn new_pager_starts_on_first_card() {
    let pager = Pager::new();
    assert_eq!(pager.index(), 0);
    assert_eq!(pager.card_count(), onboarding_deck().len());
    assert!(pager.is_first());
    assert!(!pager.is_last());
}

#[test]
fn back_at_lower_boundary_is_idempotent() {
    let mut pager = Pager::new();
    pager.back();
    pager.back();
    assert_eq!(pager.index(), 0);
    assert!(pager.is_first());
}

#[test]
fn next_at_upper_boundary_is_idempotent() {
    let mut pager = Pager::new();
    for _ in 0..pager.card_count() {
        pager.next();
    }
    let last = pager.card_count() - 1;
    assert_eq!(pager.index(), last);
    assert!(pager.is_last());

    pager.next();
    assert_eq!(pager.index(), last);
}

#[test]
fn full_forward_then_backward_walk_returns_to_start() {
    let mut pager = Pager::new();
    let steps = pager.card_count() - 1;

    for _ in 0..steps {
        pager.next();
    }
    assert!(pager.is_last());

    for _ in 0..steps {
        pager.back();
    }
    assert_eq!(pager.index(), 0);
    assert!(pager.is_first());
}

#[test]
fn card_follows_index_through_deck_order() {
    let mut pager = Pager::new();
    let deck = onboarding_deck();

    for (position, expected) in deck.iter().enumerate() {
        assert_eq!(pager.index(), position);
        assert_eq!(pager.card(), expected);
        pager.next();
    }
}

#[test]
fn deck_holds_the_four_expected_cards() {
    let deck = onboarding_deck();
    assert_eq!(deck.len(), 4);
    assert_eq!(deck[0].title, "Welcome to The Best Notes App");
    assert_eq!(deck[0].subtitle, "A simple, friendly space to capture ideas.");
    assert_eq!(deck[0].emoji, "✨");
    assert_eq!(deck[1].title, "Stay Organized");
    assert_eq!(deck[2].title, "Sync Everywhere");
    assert_eq!(deck[3].title, "Build a Streak");
    assert_eq!(deck[3].emoji, "🔥");

    let mut ids = deck.iter().map(|card| card.id).collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), deck.len(), "card ids must be unique");
}
