//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{render_error, Position};
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::Io {
            message: "broken pipe".to_string(),
        },
        Position(10, Rc::new("test.k".to_string())),
    );

    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::Io {
            message: "broken pipe".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_invalid_utf8_tip() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8 { bytes: vec![0xff] },
        Position(0, Rc::new("test.k".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidUtf8");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("ff")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::FileNotFound {
            path: "missing.k".to_string(),
        },
        Position(0, Rc::new("missing.k".to_string())),
    );

    assert_eq!(error.to_string(), "file \"missing.k\" not found at missing.k:0");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_render_error_points_at_column() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8 { bytes: vec![0xff] },
        Position(10, Rc::new("bad.k".to_string())),
    );
    let rendered = render_error(&error, "def x\n  y \u{fffd} z\n");
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("Error: InvalidUtf8 ("));
    assert_eq!(lines[1], "-> bad.k");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | y \u{fffd} z");
    assert_eq!(lines[4], "  | --^");
}

#[test]
fn test_render_error_without_content() {
    let error = Error::new(
        ErrorImpl::Io {
            message: "broken pipe".to_string(),
        },
        Position(3, Rc::new("pipe".to_string())),
    );
    let rendered = render_error(&error, "");

    assert_eq!(
        rendered,
        "Error: Io\n-> pipe\n   error reading input: broken pipe\n"
    );
}

#[test]
fn test_open_error_not_found() {
    let err = std::io::Error::from(std::io::ErrorKind::NotFound);
    let error = Error::from_open("missing.k", &err);

    assert_eq!(error.get_error_name(), "FileNotFound");
    assert_eq!(error.get_position().1.as_str(), "missing.k");
}

#[test]
fn test_open_error_permission_denied() {
    let err = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    let error = Error::from_open("locked.k", &err);

    assert_eq!(error.get_error_name(), "OpenFailed");
    assert!(matches!(
        error.get_error(),
        ErrorImpl::OpenFailed { path, .. } if path == "locked.k"
    ));
}

#[test]
fn test_render_error_tab_indented_line() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8 { bytes: vec![0xff] },
        Position(4, Rc::new("tabs.k".to_string())),
    );
    let rendered = render_error(&error, "\t\tz \u{fffd}");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | z \u{fffd}");
    assert_eq!(lines[4], "  | --^");
}

#[test]
fn test_render_error_tab_inside_line() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8 { bytes: vec![0xff] },
        Position(2, Rc::new("tabs.k".to_string())),
    );
    let rendered = render_error(&error, "a\t\u{fffd}");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | a \u{fffd}");
    assert_eq!(lines[4], "  | --^");
}
