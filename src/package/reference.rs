//! Raw object reference decoding.
//!
//! Packages store object references as a single signed index:
//!
//! ```text
//!   0   -> None
//!   n>0 -> export table slot n-1
//!   n<0 -> import table slot -n-1
//! ```

use crate::model::EntryId;

/// Table slot denoted by a raw reference index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectReference {
    Null,
    Export(usize),
    Import(usize),
}

impl ObjectReference {
    /// Decode a raw reference index.
    pub fn decode(index: i32) -> Self {
        match index {
            0 => Self::Null,
            n if n > 0 => Self::Export((n - 1) as usize),
            // !n == -n - 1 without overflowing on i32::MIN
            n => Self::Import(!n as usize),
        }
    }

    /// Raw index referring to export `id`, `None` when `id` is past the
    /// largest encodable slot.
    pub fn export_index(id: EntryId) -> Option<i32> {
        i32::try_from(id.0).ok()?.checked_add(1)
    }

    /// Raw index referring to import slot `slot`.
    pub fn import_index(slot: usize) -> i32 {
        !(slot as i32)
    }
}
