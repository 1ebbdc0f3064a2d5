//! Central store for text field values, carets and commit tracking.
//!
//! The store is UI-agnostic: hosts translate key presses and pointer input
//! into the editing calls below, and controllers write resolved values back
//! through [`InputStore`](crate::InputStore).

use crate::id::InputId;
use crate::state::FieldState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
use std::collections::HashMap;

/// Central store for text field state.
///
/// It distinguishes two kinds of writes:
/// - user edits ([`insert_text`](Self::insert_text), [`backspace`](Self::backspace),
///   [`delete`](Self::delete), [`replace`](Self::replace)) which leave the field dirty
///   until the next [`commit`](Self::commit);
/// - programmatic writes ([`set`](Self::set)) which never cause a change to
///   be reported, matching how a browser treats `input.value = ...`.
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, FieldState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the stored value for this field, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Returns the caret byte index for this field, if any.
    pub fn caret(&self, id: InputId) -> Option<usize> {
        self.values.get(&id).map(|s| s.caret)
    }

    /// Monotonic revision counter for the field's value.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Returns `true` if the user edited the field since its last commit.
    pub fn is_dirty(&self, id: InputId) -> bool {
        self.values
            .get(&id)
            .is_some_and(|s| s.value_rev != s.committed_rev)
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        let initial = filter_single_line(&initial).into_owned();
        self.values
            .entry(id)
            .or_insert_with(|| FieldState::with_value(initial));
    }

    /// Overwrite the value programmatically.
    ///
    /// The caret moves to the end and the new value counts as committed.
    pub fn set(&mut self, id: InputId, value: String) {
        let value = filter_single_line(&value).into_owned();
        let st = self.values.entry(id).or_default();
        if st.value != value {
            st.value_rev = st.value_rev.wrapping_add(1);
        }
        st.caret = value.len();
        st.committed_rev = st.value_rev;
        st.committed_value.clone_from(&value);
        st.value = value;
    }

    /// Insert typed text at the caret. Newlines are stripped.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        let caret = clamp_to_char_boundary(&st.value, st.caret);
        st.value.insert_str(caret, &s);
        st.caret = caret + s.len();
        mark_edited(st);
    }

    /// Replace the whole value as a user edit (select-all + type, paste).
    pub fn replace(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        let s = filter_single_line(s);
        if st.value == s {
            return;
        }
        st.value = s.into_owned();
        st.caret = st.value.len();
        mark_edited(st);
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        let caret = clamp_to_char_boundary(&st.value, st.caret);
        if caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.value, caret);
        st.value.drain(prev..caret);
        st.caret = prev;
        mark_edited(st);
    }

    /// Delete the character after the caret.
    pub fn delete(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        let caret = clamp_to_char_boundary(&st.value, st.caret);
        if caret >= st.value.len() {
            return;
        }

        let next = next_cursor_boundary(&st.value, caret);
        st.value.drain(caret..next);
        st.caret = caret;
        mark_edited(st);
    }

    /// Move the caret to a byte position, clamped to a char boundary.
    pub fn set_caret(&mut self, id: InputId, caret: usize) {
        if let Some(st) = self.values.get_mut(&id) {
            st.caret = clamp_to_char_boundary(&st.value, caret);
        }
    }

    /// Commit the field (blur or enter).
    ///
    /// Returns `true` if the value differs from the previous commit, i.e. a
    /// change event should be dispatched.
    pub fn commit(&mut self, id: InputId) -> bool {
        let Some(st) = self.values.get_mut(&id) else {
            return false;
        };
        st.committed_rev = st.value_rev;
        if st.committed_value == st.value {
            return false;
        }
        st.committed_value.clone_from(&st.value);
        log::trace!(target: "input", "commit {id}: {:?}", st.value);
        true
    }

    /// Clear all stored field state.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

fn mark_edited(st: &mut FieldState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
