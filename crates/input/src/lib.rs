// Chunk: docs/chunks/key_dispatch - Logical key events and key notation
//!
//! Input event types for keyboard handling.
//!
//! These types abstract over whatever produces key presses (a terminal, a
//! test, or a key script) and give the editor a clean Rust-native interface.
//!
//! Key events can also be written in a compact text notation, which is what
//! the command-line host reads from key scripts:
//!
//! ```
//! use gap_edit_input::{parse_key_sequence, Key, KeyEvent, Modifiers};
//!
//! let keys = parse_key_sequence("hi<Left><C-z>").unwrap();
//! assert_eq!(keys[0], KeyEvent::char('h'));
//! assert_eq!(keys[2], KeyEvent::new(Key::Left, Modifiers::default()));
//! assert_eq!(keys[3], KeyEvent::ctrl('z'));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::default())
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// Creates a KeyEvent for a character with control held (`Ctrl+Z` etc).
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub control: bool,
    /// Alt / Option key
    pub alt: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
}

// =============================================================================
// Key notation
// =============================================================================

/// Errors from parsing the key notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("empty key")]
    Empty,
    #[error("unknown key name <{0}>")]
    UnknownKey(String),
    #[error("unknown modifier `{0}` in <{1}>")]
    UnknownModifier(char, String),
    #[error("unterminated key name starting at `{0}`")]
    Unterminated(String),
    #[error("`{0}` is more than one key; use parse_key_sequence")]
    TrailingInput(String),
}

fn named_key(name: &str) -> Option<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "enter" | "cr" | "return" => Key::Return,
        "bs" | "backspace" => Key::Backspace,
        "del" | "delete" => Key::Delete,
        "tab" => Key::Tab,
        "esc" | "escape" => Key::Escape,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "home" => Key::Home,
        "end" => Key::End,
        "space" => Key::Char(' '),
        "lt" => Key::Char('<'),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Char(ch),
                _ => return None,
            }
        }
    };
    Some(key)
}

/// Parses the inside of a `<...>` group, e.g. `C-z`, `Left`, `A-S-x`.
fn parse_bracketed(body: &str) -> Result<KeyEvent, ParseKeyError> {
    let mut modifiers = Modifiers::default();
    let mut rest = body;

    // Modifier prefixes are single letters followed by '-', but a lone
    // trailing "-" is the minus key itself.
    while rest.len() > 2 && rest.as_bytes()[1] == b'-' {
        match rest.as_bytes()[0].to_ascii_uppercase() {
            b'C' => modifiers.control = true,
            b'A' | b'M' => modifiers.alt = true,
            b'S' => modifiers.shift = true,
            other => {
                return Err(ParseKeyError::UnknownModifier(
                    other as char,
                    body.to_string(),
                ))
            }
        }
        rest = &rest[2..];
    }

    let key = named_key(rest).ok_or_else(|| ParseKeyError::UnknownKey(body.to_string()))?;
    Ok(KeyEvent::new(key, modifiers))
}

/// Parses one key from the front of `input`, returning it and the remainder.
fn parse_one(input: &str) -> Result<(KeyEvent, &str), ParseKeyError> {
    let mut chars = input.chars();
    match chars.next() {
        None => Err(ParseKeyError::Empty),
        Some('<') => {
            // A '<' with no closing '>' is an error rather than a literal.
            let close = input
                .find('>')
                .ok_or_else(|| ParseKeyError::Unterminated(input.to_string()))?;
            let event = parse_bracketed(&input[1..close])?;
            Ok((event, &input[close + 1..]))
        }
        Some(ch) => Ok((KeyEvent::char(ch), chars.as_str())),
    }
}

/// Parses a run of keys such as `abc<Enter><C-s>`.
///
/// Every character outside `<...>` is a key of its own, spaces included.
pub fn parse_key_sequence(input: &str) -> Result<Vec<KeyEvent>, ParseKeyError> {
    let mut events = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let (event, tail) = parse_one(rest)?;
        events.push(event);
        rest = tail;
    }
    Ok(events)
}

impl FromStr for KeyEvent {
    type Err = ParseKeyError;

    /// Parses exactly one key, e.g. `x`, `<BS>` or `<C-y>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (event, rest) = parse_one(s)?;
        if rest.is_empty() {
            Ok(event)
        } else {
            Err(ParseKeyError::TrailingInput(s.to_string()))
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.key {
            Key::Char('<') => "lt".to_string(),
            Key::Char(' ') => "Space".to_string(),
            Key::Char(ch) => ch.to_string(),
            Key::Backspace => "BS".to_string(),
            Key::Delete => "Del".to_string(),
            Key::Return => "Enter".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Escape => "Esc".to_string(),
            Key::Left => "Left".to_string(),
            Key::Right => "Right".to_string(),
            Key::Up => "Up".to_string(),
            Key::Down => "Down".to_string(),
            Key::Home => "Home".to_string(),
            Key::End => "End".to_string(),
        };

        let bare_char = matches!(self.key, Key::Char(ch) if ch != '<' && ch != ' ');
        if self.modifiers.is_empty() && bare_char {
            return write!(f, "{}", name);
        }

        write!(f, "<")?;
        if self.modifiers.control {
            write!(f, "C-")?;
        }
        if self.modifiers.alt {
            write!(f, "A-")?;
        }
        if self.modifiers.shift {
            write!(f, "S-")?;
        }
        write!(f, "{}>", name)
    }
}
