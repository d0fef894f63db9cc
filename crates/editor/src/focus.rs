// Chunk: docs/chunks/key_dispatch - Logical key events and key notation
//!
//! Focus target trait definition.
//!
//! Focus targets interpret their own input. The buffer's focus target owns
//! chord resolution and produces editor commands, while the save prompt
//! interprets the same keys as single-line text entry. The session just
//! delivers each event to whichever target is active.

use crate::input::KeyEvent;
use crate::session::EditorSession;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was handled by this focus target
    Yes,
    /// The event was not handled (should propagate or be ignored)
    No,
}

/// A focus target that interprets key events.
pub trait FocusTarget {
    /// Handle a keyboard event.
    ///
    /// The focus target should:
    /// 1. Interpret the key event (resolve any chords if applicable)
    /// 2. Execute the resulting command by mutating the session
    /// 3. Return `Handled::Yes` if the event was consumed
    fn handle_key(&mut self, event: KeyEvent, session: &mut EditorSession) -> Handled;
}
