//! Terminal output of rendered tables.
//!
//! - [`table`]: extension traits turning program data into [`tabby::Table`]s.
//! - [`write_lines`]: hands rendered lines to an output stream.

pub mod table;

use std::io::Write;

/// Writes every line followed by a newline, then flushes `writer`.
///
/// # Errors
///
/// Returns the first I/O error raised by `writer`.
pub fn write_lines<W, S>(mut writer: W, lines: &[S]) -> std::io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines_terminates_every_line() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["A   B", "1 ", "22"]).unwrap();
        assert_eq!(buf, b"A   B\n1 \n22\n");
    }

    #[test]
    fn test_write_no_lines() {
        let mut buf = Vec::new();
        write_lines::<_, String>(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
