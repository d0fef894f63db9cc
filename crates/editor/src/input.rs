// Chunk: docs/chunks/key_dispatch - Re-export from shared crate
//!
//! Key event types, defined in the `gap-edit-input` crate and re-exported
//! here so hosts only need to depend on the editor.

pub use gap_edit_input::*;
