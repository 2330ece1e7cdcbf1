//! Line input for interactive commands.

use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// The line is trimmed. Returns `Ok(None)` on EOF; read failures, including
/// input that is not UTF-8, are returned as errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use cardtable_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  bet 40 \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("bet 40".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None), // EOF
        _ => Ok(Some(line.trim().to_string())),
    }
}
