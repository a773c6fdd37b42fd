use checker_core::{update, AppState, Msg};

#[test]
fn noop_and_tick_leave_state_untouched() {
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::Tick);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
