//! The narrow store interface controllers write through.
//!
//! Controllers never edit text the way a user does; they only read the
//! current value and overwrite it with a resolved one. Keeping that surface
//! small lets tests and alternative frontends supply their own store.

use crate::id::InputId;

pub trait InputStore {
    /// Ensure a field entry exists; if missing, inserts `initial`.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    /// Returns the current value of the field, if any.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Overwrite the field's value without reporting a user change.
    fn set(&mut self, id: InputId, value: String);
}

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn set(&mut self, id: InputId, value: String) {
        crate::store::InputValueStore::set(self, id, value)
    }
}
