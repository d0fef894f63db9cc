// Chunk: docs/chunks/editing_session - Editing session over the text buffer
// Chunk: docs/chunks/key_dispatch - Logical key events and key notation
//!
//! gap-edit: a single-file text editing session.
//!
//! This crate wires the storage engine in `gap-edit-buffer` to the outside
//! world: key events are delivered to the active focus target, which turns
//! them into buffer commands, and the session loads and saves the document.
//!
//! It does no drawing. A host (the `gap-edit` binary, a test, or a terminal
//! front end) feeds [`input::KeyEvent`]s to [`EditorSession::handle_key`] and
//! renders whatever it likes from the session's accessors.

pub mod buffer_target;
pub mod config;
pub mod focus;
pub mod input;
pub mod persistence;
pub mod save_prompt;
pub mod session;

pub use config::{ConfigError, EditorConfig};
pub use focus::{FocusTarget, Handled};
pub use persistence::PersistenceError;
pub use session::EditorSession;
