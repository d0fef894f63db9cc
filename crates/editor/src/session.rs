// Chunk: docs/chunks/editing_session - Editing session over the text buffer
// Chunk: docs/chunks/save_prompt - File name prompt for unnamed documents
//!
//! The editing session: one document, its file, and the editor state around it.
//!
//! `EditorSession` owns the [`TextBuffer`] and everything a host needs to run
//! an editor over it: the associated file path, the dirty flag, a transient
//! status message, the running flag, and the save prompt when one is open.
//! Key events enter through [`EditorSession::handle_key`] and are routed to
//! the active focus target.

use std::env;
use std::path::{Path, PathBuf};

use gap_edit_buffer::{EditCommand, Position, TextBuffer};
use tracing::{debug, info, warn};

use crate::buffer_target::BufferFocusTarget;
use crate::config::EditorConfig;
use crate::focus::{FocusTarget, Handled};
use crate::input::KeyEvent;
use crate::persistence::{read_document, write_document, PersistenceError};
use crate::save_prompt::SavePrompt;

/// Name shown in the status line for a document without a file.
const NO_NAME: &str = "[No Name]";

/// A single-document editing session.
#[derive(Debug)]
pub struct EditorSession {
    buffer: TextBuffer,
    config: EditorConfig,
    file_path: Option<PathBuf>,
    /// Directory that names typed into the save prompt are relative to.
    working_dir: PathBuf,
    dirty: bool,
    status: String,
    running: bool,
    save_prompt: Option<SavePrompt>,
}

impl EditorSession {
    /// Creates a session with an empty, unnamed document.
    pub fn new(config: EditorConfig) -> Self {
        let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            buffer: TextBuffer::with_capacity(config.initial_capacity),
            config,
            file_path: None,
            working_dir,
            dirty: false,
            status: String::new(),
            running: true,
            save_prompt: None,
        }
    }

    /// Sets the directory that save prompt names are resolved against.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns true if the document has changed since it was opened or saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns false once the session has been asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The transient status message, empty when there is none.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Returns the open save prompt, if any.
    pub fn save_prompt(&self) -> Option<&SavePrompt> {
        self.save_prompt.as_ref()
    }

    /// Content of the document.
    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// Cursor as a 0-indexed (line, column) position.
    pub fn cursor_position(&self) -> Position {
        self.buffer.cursor_position()
    }

    // ==================== Input ====================

    /// Delivers a key event to the active focus target.
    ///
    /// Every key clears the previous status message first. While the save
    /// prompt is open it receives all keys; otherwise the buffer does.
    pub fn handle_key(&mut self, event: KeyEvent) -> Handled {
        self.clear_status();

        if let Some(mut prompt) = self.save_prompt.take() {
            let handled = prompt.handle_key(event, self);
            if !prompt.is_finished() && self.save_prompt.is_none() {
                self.save_prompt = Some(prompt);
            }
            return handled;
        }

        let handled = BufferFocusTarget::new().handle_key(event.clone(), self);
        if handled == Handled::No {
            debug!(key = %event, "unhandled key");
        }
        handled
    }

    // ==================== Editing ====================

    /// Executes an edit through the undo log and marks the document dirty.
    pub fn execute(&mut self, command: EditCommand) {
        self.buffer.execute(command);
        self.dirty = true;
    }

    /// Undoes the last edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.buffer.undo();
        if undone {
            self.dirty = true;
        }
        undone
    }

    /// Redoes the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.buffer.redo();
        if redone {
            self.dirty = true;
        }
        redone
    }

    /// Stops the session. The host's event loop ends after this.
    pub fn quit(&mut self) {
        info!("quit requested");
        self.running = false;
    }

    // ==================== Files ====================

    /// Replaces the document with the contents of `path`.
    ///
    /// A file that does not exist yet opens as an empty document that keeps
    /// the path, so the first save creates it. Any other read failure is
    /// returned and the session is left unchanged.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<(), PersistenceError> {
        let path = path.into();
        match read_document(&path)? {
            Some(text) => {
                self.buffer.load(&text);
                self.status = format!("Opened {}", path.display());
                info!(path = %path.display(), chars = self.buffer.len(), "opened document");
            }
            None => {
                self.buffer.load("");
                self.status = format!("New file: {}", path.display());
                info!(path = %path.display(), "new document");
            }
        }
        self.file_path = Some(path);
        self.dirty = false;
        self.save_prompt = None;
        Ok(())
    }

    /// Writes the document to its file.
    ///
    /// Without a file name this opens the save prompt and reports
    /// [`PersistenceError::NoFileName`]. Failures are also shown in the
    /// status line.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let Some(path) = self.file_path.clone() else {
            self.save_prompt = Some(SavePrompt::new(self.working_dir.clone()));
            self.status = "Cannot save: No filename specified.".to_string();
            return Err(PersistenceError::NoFileName);
        };

        match write_document(&path, &self.buffer.content()) {
            Ok(bytes) => {
                self.dirty = false;
                self.status = format!("Saved {} ({} bytes)", path.display(), bytes);
                info!(path = %path.display(), bytes, "saved document");
                Ok(())
            }
            Err(err) => {
                self.status = format!("Error saving file: {err}");
                warn!("{err}");
                Err(err)
            }
        }
    }

    /// Associates the document with `path` and saves it there.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), PersistenceError> {
        self.file_path = Some(path.into());
        self.save()
    }

    // ==================== Display ====================

    fn display_name(&self) -> String {
        match &self.file_path {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => NO_NAME.to_string(),
        }
    }

    /// Renders a status line exactly `width` characters wide.
    ///
    /// The file name and dirty marker sit on the left, the 1-based
    /// `line:column` on the right, and the status message (or the save
    /// prompt) in the middle, drawn over the other two when space is short.
    pub fn status_line(&self, width: usize) -> String {
        let mut line = vec![' '; width];

        let marker = if self.dirty { "*" } else { "" };
        let left = format!(" {}{}  ", self.display_name(), marker);
        let pos = self.buffer.cursor_position();
        let right = format!(" {}:{} ", pos.line + 1, pos.col + 1);
        let message = match &self.save_prompt {
            Some(prompt) => format!("Save as: {}", prompt.input()),
            None => self.status.clone(),
        };

        place(&mut line, 0, &left);
        place(&mut line, width.saturating_sub(right.chars().count()), &right);
        if !message.is_empty() {
            let start = width.saturating_sub(message.chars().count()) / 2;
            place(&mut line, start, &message);
        }

        line.into_iter().collect()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

/// Overwrites `line` with `text` starting at `start`, clipped to the line.
fn place(line: &mut [char], start: usize, text: &str) {
    for (slot, ch) in line.iter_mut().skip(start).zip(text.chars()) {
        *slot = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn type_text(session: &mut EditorSession, text: &str) {
        for ch in text.chars() {
            let cmd = session.buffer().insert_command(ch);
            session.execute(cmd);
        }
    }

    #[test]
    fn test_new_session_is_clean_and_running() {
        let session = EditorSession::default();
        assert!(session.is_running());
        assert!(!session.is_dirty());
        assert!(session.file_path().is_none());
        assert_eq!(session.content(), "");
    }

    #[test]
    fn test_execute_marks_dirty() {
        let mut session = EditorSession::default();
        type_text(&mut session, "a");
        assert!(session.is_dirty());
    }

    #[test]
    fn test_undo_on_empty_history_keeps_clean() {
        let mut session = EditorSession::default();
        assert!(!session.undo());
        assert!(!session.redo());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_open_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "one\ntwo").unwrap();

        let mut session = EditorSession::default();
        type_text(&mut session, "junk");
        session.open(&path).unwrap();

        assert_eq!(session.content(), "one\ntwo");
        assert_eq!(session.buffer().cursor(), 0);
        assert!(!session.is_dirty());
        assert!(!session.buffer().can_undo());
        assert_eq!(session.status(), format!("Opened {}", path.display()));
    }

    #[test]
    fn test_open_missing_file_starts_new_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.txt");

        let mut session = EditorSession::default();
        session.open(&path).unwrap();

        assert_eq!(session.content(), "");
        assert_eq!(session.file_path(), Some(path.as_path()));
        assert_eq!(session.status(), format!("New file: {}", path.display()));
    }

    #[test]
    fn test_save_writes_file_and_clears_dirty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut session = EditorSession::default();
        session.open(&path).unwrap();
        type_text(&mut session, "héllo");
        session.save().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "héllo");
        assert!(!session.is_dirty());
        assert_eq!(session.status(), format!("Saved {} (6 bytes)", path.display()));
    }

    #[test]
    fn test_save_without_name_opens_prompt() {
        let mut session = EditorSession::default();
        type_text(&mut session, "x");

        let err = session.save().unwrap_err();
        assert!(matches!(err, PersistenceError::NoFileName));
        assert!(session.save_prompt().is_some());
        assert!(session.is_dirty());
        assert_eq!(session.status(), "Cannot save: No filename specified.");
    }

    #[test]
    fn test_save_failure_sets_status() {
        let dir = TempDir::new().unwrap();
        let mut session = EditorSession::default();

        let result = session.save_as(dir.path().join("no/such/dir.txt"));
        assert!(matches!(result, Err(PersistenceError::Write { .. })));
        assert!(session.status().starts_with("Error saving file: "));
    }

    #[test]
    fn test_quit_stops_session() {
        let mut session = EditorSession::default();
        session.quit();
        assert!(!session.is_running());
    }

    #[test]
    fn test_status_line_layout() {
        let mut session = EditorSession::default();
        type_text(&mut session, "ab\nc");

        let line = session.status_line(30);
        assert_eq!(line.chars().count(), 30);
        assert!(line.starts_with(" [No Name]*  "));
        assert!(line.ends_with(" 2:2 "));
    }

    #[test]
    fn test_status_line_centres_message() {
        let mut session = EditorSession::default();
        session.set_status("hi");

        let line = session.status_line(20);
        assert_eq!(line.chars().nth(9), Some('h'));
        assert_eq!(line.chars().nth(10), Some('i'));
    }

    #[test]
    fn test_status_line_narrow_width() {
        let session = EditorSession::default();
        assert_eq!(session.status_line(0), "");
        assert_eq!(session.status_line(4).chars().count(), 4);
    }
}
