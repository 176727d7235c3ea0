//! Newline handling at the text boundary.
//!
//! The differencer and the merge engine operate on sequences of lines with
//! no terminator characters stored. Callers split persisted or submitted
//! text with [`split_lines`] before diffing and join merged results back
//! with [`join_lines`] before writing.

/// Split text into terminator-free lines.
///
/// A trailing newline terminates the final line rather than opening an
/// empty one: `"a\n"` splits to `["a"]` and `"a\n\n"` to `["a", ""]`. The
/// empty string splits to no lines at all. Both `\n` and `\r\n` terminators
/// are recognized.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Join lines with a single `\n` after each, including the last.
///
/// The empty sequence joins to the empty string, so documents that end with
/// a newline round-trip through [`split_lines`] and back.
pub fn join_lines(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trailing_newline_terminates_last_line() {
        assert_eq!(split_lines("a\n"), lines(&["a"]));
        assert_eq!(split_lines("a\nb\n"), lines(&["a", "b"]));
    }

    #[test]
    fn blank_interior_line_is_kept() {
        assert_eq!(split_lines("a\n\nb\n"), lines(&["a", "", "b"]));
        assert_eq!(split_lines("a\n\n"), lines(&["a", ""]));
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert_eq!(split_lines(""), Vec::<String>::new());
    }

    #[test]
    fn missing_final_newline_still_splits() {
        assert_eq!(split_lines("a\nb"), lines(&["a", "b"]));
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        assert_eq!(split_lines("a\r\nb\r\n"), lines(&["a", "b"]));
    }

    #[test]
    fn join_terminates_every_line() {
        assert_eq!(join_lines(&lines(&["a", "b"])), "a\nb\n");
        assert_eq!(join_lines(&lines(&[""])), "\n");
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_lines(&[]), "");
    }

    #[test]
    fn terminated_text_round_trips() {
        let text = "first\n\nsecond\n";
        assert_eq!(join_lines(&split_lines(text)), text);
    }
}
