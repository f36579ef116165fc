//! Line-level reading of the strand file

use std::io::BufRead;

use crate::error::{ConvertError, Result};
use crate::hair::Vertex;

/// Parse `tag x y z [...]` into a vertex. The tag and anything after `z`
/// are ignored.
pub fn parse_vertex_line(line: &str, line_no: usize) -> Result<Vertex> {
    let mut fields = line.split_whitespace().skip(1);
    let mut coords = [0.0f32; 3];
    for (axis, slot) in coords.iter_mut().enumerate() {
        let token = fields.next().ok_or_else(|| {
            ConvertError::parse(line_no, format!("expected 3 coordinates, found {}", axis))
        })?;
        // exported values are doubles; narrow after parsing
        let value: f64 = token.parse().map_err(|_| {
            ConvertError::parse(line_no, format!("'{}' is not a number", token))
        })?;
        *slot = value as f32;
    }
    Ok(Vertex::new(coords[0], coords[1], coords[2]))
}

/// Sequential line reader that knows how many lines the layout requires.
pub(crate) struct LineReader<R> {
    reader: R,
    buf: String,
    lines_read: usize,
    lines_expected: usize,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R, lines_expected: usize) -> Self {
        LineReader {
            reader,
            buf: String::new(),
            lines_read: 0,
            lines_expected,
        }
    }

    pub(crate) fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Next line with its 1-based line number, trailing newline stripped
    pub(crate) fn next_line(&mut self) -> Result<(usize, &str)> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(ConvertError::TruncatedInput {
                lines_expected: self.lines_expected,
                lines_read: self.lines_read,
            });
        }
        self.lines_read += 1;
        Ok((self.lines_read, self.buf.trim_end()))
    }

    /// Consume `count` lines without looking at them
    pub(crate) fn skip_lines(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.next_line()?;
        }
        Ok(())
    }
}
