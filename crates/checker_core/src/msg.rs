#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box (debounced text).
    InputChanged(String),
    /// User submitted the current input for verification.
    CheckSubmitted,
    /// Engine resolved one entry to a terminal status.
    EntryResolved {
        entry_id: crate::EntryId,
        outcome: crate::Outcome,
        title: Option<String>,
    },
    /// Engine finished the in-flight batch.
    BatchCompleted,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
