use checker_core::{
    update, AppState, Effect, EntryStatus, Msg, Notice, Outcome, SessionState,
};

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::CheckSubmitted)
}

fn resolve(state: AppState, entry_id: u64, outcome: Outcome, title: Option<&str>) -> AppState {
    let (state, effects) = update(
        state,
        Msg::EntryResolved {
            entry_id,
            outcome,
            title: title.map(ToOwned::to_owned),
        },
    );
    assert!(effects.is_empty());
    state
}

fn assert_counts_sum(state: &AppState) {
    let stats = state.view().stats;
    assert_eq!(
        stats.indexed + stats.not_indexed + stats.errors + stats.pending,
        stats.total
    );
}

#[test]
fn resolution_sets_terminal_status_and_title() {
    let (state, _) = submit(AppState::new(), "a.com\nb.com\n");
    assert_counts_sum(&state);

    let mut state = resolve(state, 1, Outcome::Indexed, Some("Page 1"));
    let view = state.view();
    assert_eq!(view.entries[0].status, EntryStatus::Indexed);
    assert_eq!(view.entries[0].title.as_deref(), Some("Page 1"));
    assert_eq!(view.stats.indexed, 1);
    assert_counts_sum(&state);
    assert!(state.consume_dirty());

    let state = resolve(state, 2, Outcome::Error, None);
    let view = state.view();
    assert_eq!(view.entries[1].status, EntryStatus::Error);
    assert_eq!(view.entries[1].title, None);
    assert_counts_sum(&state);
}

#[test]
fn title_is_dropped_for_non_indexed_outcomes() {
    let (state, _) = submit(AppState::new(), "a.com\n");
    let state = resolve(state, 1, Outcome::NotIndexed, Some("spurious"));

    let view = state.view();
    assert_eq!(view.entries[0].status, EntryStatus::NotIndexed);
    assert_eq!(view.entries[0].title, None);
}

#[test]
fn progress_is_monotone_and_reaches_one_only_at_the_end() {
    let (state, _) = submit(AppState::new(), "a.com\nb.com\nc.com\n");
    assert_eq!(state.view().progress, 0.0);

    let state = resolve(state, 1, Outcome::Indexed, Some("Page 1"));
    let after_one = state.view().progress;
    assert!((after_one - 1.0 / 3.0).abs() < 1e-9);
    assert!(after_one < 1.0);

    let state = resolve(state, 2, Outcome::Error, None);
    let after_two = state.view().progress;
    assert!(after_two > after_one);
    assert!(after_two < 1.0);

    let state = resolve(state, 3, Outcome::NotIndexed, None);
    assert_eq!(state.view().progress, 1.0);
    assert_eq!(state.view().progress_percent(), 100);
}

#[test]
fn entries_transition_at_most_once() {
    let (state, _) = submit(AppState::new(), "a.com\n");
    let mut state = resolve(state, 1, Outcome::Indexed, Some("Page 1"));
    assert!(state.consume_dirty());

    // A late duplicate resolution must not revert or overwrite.
    let mut state = resolve(state, 1, Outcome::Error, None);
    let view = state.view();
    assert_eq!(view.entries[0].status, EntryStatus::Indexed);
    assert_eq!(view.entries[0].title.as_deref(), Some("Page 1"));
    assert!(!state.consume_dirty());
}

#[test]
fn resolution_for_unknown_entry_is_ignored() {
    let (mut state, _) = submit(AppState::new(), "a.com\n");
    assert!(state.consume_dirty());
    let mut state = resolve(state, 42, Outcome::Indexed, Some("Page 42"));

    let view = state.view();
    assert_eq!(view.stats.pending, 1);
    assert!(!state.consume_dirty());
}

#[test]
fn batch_completion_is_one_shot() {
    let (state, _) = submit(AppState::new(), "a.com\nb.com\n");
    let state = resolve(state, 1, Outcome::Indexed, Some("Page 1"));
    let state = resolve(state, 2, Outcome::NotIndexed, None);

    let (state, effects) = update(state, Msg::BatchCompleted);
    assert_eq!(state.view().session, SessionState::Completed);
    match &effects[..] {
        [Effect::Notify(Notice::CheckCompleted { stats })] => {
            assert_eq!(stats.total, 2);
            assert_eq!(stats.indexed, 1);
            assert_eq!(stats.not_indexed, 1);
            assert_eq!(stats.pending, 0);
        }
        other => panic!("unexpected effects: {other:?}"),
    }

    let (state, effects) = update(state, Msg::BatchCompleted);
    assert!(effects.is_empty());
    assert_eq!(state.view().session, SessionState::Completed);
}

#[test]
fn full_hundred_entry_batch_processes_to_completion() {
    let input: String = (1..=100)
        .map(|i| format!("https://example.com/page-{i}\n"))
        .collect();
    let (mut state, _) = submit(AppState::new(), &input);
    assert_eq!(state.view().stats.total, 100);

    let mut last_progress = 0.0;
    for id in 1..=100 {
        let outcome = match id % 3 {
            0 => Outcome::Indexed,
            1 => Outcome::NotIndexed,
            _ => Outcome::Error,
        };
        let title = (outcome == Outcome::Indexed).then(|| format!("Page {id}"));
        let (next, _) = update(
            state,
            Msg::EntryResolved {
                entry_id: id,
                outcome,
                title,
            },
        );
        state = next;

        let progress = state.view().progress;
        assert!(progress >= last_progress);
        assert_eq!(progress == 1.0, id == 100);
        last_progress = progress;
        assert_counts_sum(&state);
    }

    let (state, _) = update(state, Msg::BatchCompleted);
    let view = state.view();
    assert_eq!(view.session, SessionState::Completed);
    assert_eq!(view.stats.pending, 0);
    assert_eq!(view.progress_percent(), 100);
}

#[test]
fn entries_iterate_in_input_order() {
    let (state, _) = submit(AppState::new(), "b.com\na.com\nc.com\n");

    let ids: Vec<u64> = state.view().entries.iter().map(|e| e.id).collect();
    let urls: Vec<String> = state.view().entries.iter().map(|e| e.url.clone()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(urls, vec!["b.com", "a.com", "c.com"]);
}
