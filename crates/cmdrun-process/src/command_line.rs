//! Direct-mode command line tokenisation.
//!
//! The line is split on whitespace only. Quotes, backslashes and shell
//! metacharacters are ordinary characters and stay inside their token.

/// Characters that separate tokens: space, tab, newline, carriage return
/// and form feed.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\n', '\r', '\x0C'];

/// Splits a command line into program and argument tokens.
///
/// Runs of delimiters count as one separator and never yield empty tokens,
/// so a blank line produces an empty vector.
///
/// ```
/// use cmdrun_process::command_line::split;
///
/// assert_eq!(split("ls  -l\t/tmp"), vec!["ls", "-l", "/tmp"]);
/// assert!(split("   ").is_empty());
/// ```
pub fn split(line: &str) -> Vec<&str> {
    line.split(|c: char| DELIMITERS.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}
