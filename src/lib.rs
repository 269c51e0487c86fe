#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Character offset into a named input.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding a character offset.
///
/// Returns the 1-based line number, the line's text and the offset within
/// the line. An offset at the very end of the content maps to the end of
/// the last line; anything past that is `None`.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), end - start));
        start = end;
        line_number += 1;
    }

    if pos == start {
        return Some(last.unwrap_or((1, String::new(), 0)));
    }

    None
}


/// Renders an error against the content it was found in.
pub fn render_error(error: &Error, content: &str) -> String {
    /*
        Error: InvalidUtf8 (Invalid UTF-8 sequence [ff], ...)
        -> final.k
           |
        20 | def a # b
           | --------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(content, position.0) else {
        out.push_str(&format!("   {}\n", error.get_error()));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    // Tabs print as one column each so the caret count stays aligned.
    let line_text = line_text.replace('\t', " ");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
