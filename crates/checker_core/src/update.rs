use crate::{AppState, Effect, Msg, Notice, SessionState, SubmitError, MAX_BATCH_SIZE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::CheckSubmitted => {
            // Busy flag: while a batch is in flight, submission is a no-op.
            // The batch is never aborted mid-run.
            if state.session() == SessionState::Checking {
                return (state, Vec::new());
            }

            let urls = parse_lines(state.input());
            if urls.is_empty() {
                state.set_last_error(SubmitError::EmptyInput);
                return (state, vec![Effect::Notify(Notice::EmptyInput)]);
            }
            if urls.len() > MAX_BATCH_SIZE {
                let submitted = urls.len();
                state.set_last_error(SubmitError::TooManyEntries { submitted });
                return (
                    state,
                    vec![Effect::Notify(Notice::TooManyEntries { submitted })],
                );
            }

            let entries = state.begin_batch(urls);
            vec![Effect::RunBatch { entries }]
        }
        Msg::EntryResolved {
            entry_id,
            outcome,
            title,
        } => {
            state.apply_resolution(entry_id, outcome, title);
            Vec::new()
        }
        Msg::BatchCompleted => {
            if state.complete_batch() {
                let stats = state.view().stats;
                vec![Effect::Notify(Notice::CheckCompleted { stats })]
            } else {
                Vec::new()
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Number of non-blank trimmed lines in the raw input. Drives the live
/// "N / 100" counter next to the input box.
pub fn count_candidates(raw: &str) -> usize {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .count()
}
