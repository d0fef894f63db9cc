// Chunk: docs/chunks/key_dispatch - Logical key events and key notation
//!
//! Buffer focus target implementation.
//!
//! This is the focus target for the document. It handles the editing
//! keystrokes: printable characters, Enter, Tab, Backspace, the arrow keys,
//! Home/End, and the Ctrl chords for undo, redo, save and quit. Chord
//! resolution is a stateless pure function because every chord is a single
//! modifier+key combination.
//!
//! Content changes go through [`EditorSession::execute`] so each keystroke is
//! one undoable command. Cursor movement is applied directly and never
//! touches the undo log.

use tracing::debug;

use crate::focus::{FocusTarget, Handled};
use crate::input::{Key, KeyEvent};
use crate::session::EditorSession;

/// Commands that can be executed on the document.
///
/// These are resolved from key events by the stateless `resolve_command` function.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a tab, or spaces when soft tabs are configured
    InsertTab,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Move cursor left by one character
    MoveLeft,
    /// Move cursor right by one character
    MoveRight,
    /// Move cursor up by one line
    MoveUp,
    /// Move cursor down by one line
    MoveDown,
    /// Move cursor to the start of the line
    MoveToLineStart,
    /// Move cursor to the end of the line
    MoveToLineEnd,
    Undo,
    Redo,
    Save,
    Quit,
}

/// Resolves a key event to a command.
///
/// This is a pure stateless function: (modifiers, key) → Option<Command>.
fn resolve_command(event: &KeyEvent) -> Option<Command> {
    let mods = &event.modifiers;

    match &event.key {
        // Ctrl chords
        Key::Char('z') if mods.control => Some(Command::Undo),
        Key::Char('y') if mods.control => Some(Command::Redo),
        Key::Char('s') if mods.control => Some(Command::Save),
        Key::Char('c') if mods.control => Some(Command::Quit),

        // Ctrl+A / Ctrl+E → line start / end (Emacs-style)
        Key::Char('a') if mods.control => Some(Command::MoveToLineStart),
        Key::Char('e') if mods.control => Some(Command::MoveToLineEnd),

        Key::Escape => Some(Command::Quit),

        // Printable characters (no Control/Alt modifier)
        Key::Char(ch) if !mods.control && !mods.alt => Some(Command::InsertChar(*ch)),

        // Return/Enter
        Key::Return if !mods.control => Some(Command::InsertChar('\n')),

        Key::Tab if !mods.control => Some(Command::InsertTab),

        Key::Backspace => Some(Command::DeleteBackward),

        // Arrow keys
        Key::Left => Some(Command::MoveLeft),
        Key::Right => Some(Command::MoveRight),
        Key::Up => Some(Command::MoveUp),
        Key::Down => Some(Command::MoveDown),

        Key::Home => Some(Command::MoveToLineStart),
        Key::End => Some(Command::MoveToLineEnd),

        // Unhandled
        _ => None,
    }
}

/// The focus target for the document buffer.
///
/// Handles editing keystrokes via stateless chord resolution.
#[derive(Debug, Default)]
pub struct BufferFocusTarget;

impl BufferFocusTarget {
    /// Creates a new BufferFocusTarget.
    pub fn new() -> Self {
        Self
    }

    /// Executes a command against the session.
    fn execute_command(&self, cmd: Command, session: &mut EditorSession) {
        match cmd {
            Command::InsertChar(ch) => insert(session, ch),
            Command::InsertTab => {
                let tab = session.config().tab_text();
                for ch in tab.chars() {
                    insert(session, ch);
                }
            }
            Command::DeleteBackward => {
                // At the start of the document there is nothing to delete
                // and nothing is recorded.
                if let Some(cmd) = session.buffer().delete_command() {
                    session.execute(cmd);
                }
            }
            Command::MoveLeft => session.buffer_mut().move_left(),
            Command::MoveRight => session.buffer_mut().move_right(),
            Command::MoveUp => session.buffer_mut().move_up(),
            Command::MoveDown => session.buffer_mut().move_down(),
            Command::MoveToLineStart => session.buffer_mut().move_to_line_start(),
            Command::MoveToLineEnd => session.buffer_mut().move_to_line_end(),
            Command::Undo => {
                session.undo();
            }
            Command::Redo => {
                session.redo();
            }
            Command::Save => {
                // The outcome is already reported in the status line.
                if let Err(err) = session.save() {
                    debug!("save did not complete: {err}");
                }
            }
            Command::Quit => session.quit(),
        }
    }
}

fn insert(session: &mut EditorSession, ch: char) {
    let cmd = session.buffer().insert_command(ch);
    session.execute(cmd);
}

impl FocusTarget for BufferFocusTarget {
    fn handle_key(&mut self, event: KeyEvent, session: &mut EditorSession) -> Handled {
        match resolve_command(&event) {
            Some(cmd) => {
                self.execute_command(cmd, session);
                Handled::Yes
            }
            None => Handled::No,
        }
    }
}
