// Chunk: docs/chunks/headless_host - Command-line host driving a session from key scripts
//!
//! Command-line arguments for the `gap-edit` host.

use std::path::PathBuf;

use clap::Parser;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gap-edit")]
#[command(about = "A small gap buffer text editor with undo/redo")]
#[command(version)]
#[command(next_line_help = true)]
#[command(
    after_help = "Keys use angle-bracket notation: plain characters type themselves, \
                  <Enter> <Tab> <BS> <Left> <Right> <Up> <Down> <Home> <End> <Esc> are named keys, \
                  <C-s> is Ctrl+S and <lt> is a literal '<'."
)]
pub struct CliArgs {
    /// File to edit. A file that does not exist is created on the first save.
    #[arg(name = "file path")]
    pub file: Option<PathBuf>,

    /// Keys to send to the editor, e.g. "hello<Enter><C-s>".
    #[arg(long, short = 'k', value_name = "SEQ", conflicts_with = "keys_file")]
    pub keys: Option<String>,

    /// Read the keys to send from a file. Line breaks in the file are ignored;
    /// use <Enter> for a newline.
    #[arg(long, value_name = "PATH")]
    pub keys_file: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial buffer capacity, overriding the config file.
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Write the final document to stdout.
    #[arg(long, short = 'p')]
    pub print: bool,

    /// Log at debug level (overrides GAP_EDIT_LOG).
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let args = CliArgs::parse_from([
            "gap-edit",
            "notes.txt",
            "--keys",
            "hi<C-s>",
            "--capacity",
            "8",
            "--print",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.keys.as_deref(), Some("hi<C-s>"));
        assert_eq!(args.capacity, Some(8));
        assert!(args.print);
        assert!(!args.verbose);
    }

    #[test]
    fn test_keys_and_keys_file_conflict() {
        let result =
            CliArgs::try_parse_from(["gap-edit", "--keys", "a", "--keys-file", "script.keys"]);
        assert!(result.is_err());
    }
}
