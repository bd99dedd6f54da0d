//! Tab-separated row writer

use std::io::{self, Write};

pub struct TsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one row. Tabs and line breaks inside cells become spaces so every
    /// row stays on a single line with a fixed column count.
    pub fn write_row<S: AsRef<str>>(&mut self, cells: &[S]) -> io::Result<()> {
        let line = cells.iter().map(|c| sanitize_cell(c.as_ref())).collect::<Vec<_>>().join("\t");
        writeln!(self.inner, "{}", line)
    }

    /// Write a free-form line that is not part of the table.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

fn sanitize_cell(cell: &str) -> String {
    cell.replace("\r\n", " ").replace(['\t', '\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_tab_joined() {
        let mut w = TsvWriter::new(Vec::new());
        w.write_row(&["a", "b c", ""]).unwrap();
        w.write_row(&["Core"]).unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), "a\tb c\t\nCore\n");
    }

    #[test]
    fn control_characters_are_flattened() {
        let mut w = TsvWriter::new(Vec::new());
        w.write_row(&["multi\nline", "tab\there", "crlf\r\nend"]).unwrap();
        assert_eq!(
            String::from_utf8(w.into_inner()).unwrap(),
            "multi line\ttab here\tcrlf end\n"
        );
    }

    #[test]
    fn free_lines_are_written_verbatim() {
        let mut w = TsvWriter::new(Vec::new());
        w.write_line("JQL = project = X\tY").unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), "JQL = project = X\tY\n");
    }
}
