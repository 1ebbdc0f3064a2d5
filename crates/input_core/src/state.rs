//! Per-field state held by the [`InputValueStore`](crate::InputValueStore).

#[derive(Clone, Debug, Default)]
pub(crate) struct FieldState {
    /// The current text value.
    pub value: String,

    /// Monotonic revision counter, bumped on every value change.
    pub value_rev: u64,

    /// Revision the value had at the last commit or programmatic write.
    ///
    /// `value_rev != committed_rev` means the user edited since then.
    pub committed_rev: u64,

    /// Caret as a byte index into `value` (always on a UTF-8 char boundary).
    pub caret: usize,

    /// Value at the last commit, compared on the next commit so that editing
    /// back to the same text does not fire a change.
    pub committed_value: String,
}

impl FieldState {
    pub fn with_value(value: String) -> Self {
        let caret = value.len();
        Self {
            committed_value: value.clone(),
            value,
            value_rev: 0,
            committed_rev: 0,
            caret,
        }
    }
}
