// Chunk: docs/chunks/save_prompt - File name prompt for unnamed documents
//!
//! SavePrompt: single-line file name entry.
//!
//! When an unnamed document is saved, the session opens this prompt and
//! routes every key to it until the user commits or cancels. The prompt
//! keeps its own small [`GapBuffer`] and enforces a single-line invariant:
//!
//! - `Key::Return` commits the name instead of inserting a newline
//! - `Key::Up` / `Key::Down` are consumed as no-ops
//! - `Key::Escape` cancels without saving
//!
//! A committed name is resolved against the prompt's directory and the
//! document is saved there through [`EditorSession::save_as`].

use std::path::{Path, PathBuf};

use gap_edit_buffer::GapBuffer;
use tracing::debug;

use crate::focus::{FocusTarget, Handled};
use crate::input::{Key, KeyEvent};
use crate::session::EditorSession;

/// Capacity of the name buffer; it grows if a longer name is typed.
const NAME_CAPACITY: usize = 64;

/// A single-line prompt asking for the file name to save under.
#[derive(Debug)]
pub struct SavePrompt {
    input: GapBuffer,
    directory: PathBuf,
    finished: bool,
}

impl SavePrompt {
    /// Creates an empty prompt whose names are relative to `directory`.
    pub fn new(directory: PathBuf) -> Self {
        Self {
            input: GapBuffer::with_capacity(NAME_CAPACITY),
            directory,
            finished: false,
        }
    }

    /// The name typed so far.
    pub fn input(&self) -> String {
        self.input.linearize()
    }

    /// Cursor column within the name.
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns true once the prompt has been committed or cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn commit(&mut self, session: &mut EditorSession) {
        let name = self.input();
        let name = name.trim();
        if name.is_empty() {
            // Nothing to save under yet; keep asking.
            return;
        }

        self.finished = true;
        let path = self.directory.join(name);
        if let Err(err) = session.save_as(path) {
            debug!("save from prompt did not complete: {err}");
        }
    }
}

impl FocusTarget for SavePrompt {
    fn handle_key(&mut self, event: KeyEvent, session: &mut EditorSession) -> Handled {
        let mods = event.modifiers;
        match event.key {
            Key::Escape => {
                self.finished = true;
                session.set_status("Save cancelled");
            }
            Key::Return => self.commit(session),
            Key::Char(ch) if !mods.control && !mods.alt => self.input.insert(ch),
            Key::Backspace => {
                self.input.delete_backward();
            }
            Key::Left => self.input.move_cursor(-1),
            Key::Right => self.input.move_cursor(1),
            Key::Home => self.input.move_gap_to(0),
            Key::End => self.input.move_gap_to(self.input.len()),
            // Single-line: vertical movement does nothing.
            Key::Up | Key::Down => {}
            _ => return Handled::No,
        }
        Handled::Yes
    }
}
