//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Horizontal rule sized to `title`, used between hands.
pub fn write_header(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "== {} {}", title, "=".repeat(40usize.saturating_sub(title.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_errors_and_warnings() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\nWARNING: careful\n");
    }

    #[test]
    fn header_contains_title() {
        let mut buf = Vec::new();
        write_header(&mut buf, "Hand 3").unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("== Hand 3 ="));
    }
}
