//! Line-offset queries over document text.
//!
//! The engine only ever asks three questions of the host's document model:
//! which line an offset falls on, and where that line starts and ends.
//! [`LineLookup`] is that capability; [`LineIndex`] answers it from a plain
//! text snapshot for hosts without a document model of their own.
//! All offsets are 0-based character offsets.

/// Line-offset queries the engine needs from a text source
pub trait LineLookup {
    /// The line number containing the given character offset
    fn line_of(&self, offset: usize) -> usize;
    /// The character offset at which a line starts
    fn line_start(&self, line: usize) -> usize;
    /// The character offset at which a line ends, exclusive of the terminator
    fn line_end(&self, line: usize) -> usize;
}

/// The character range of one line, end exclusive of the terminator
#[derive(Debug, Clone, Copy)]
struct LineSpan {
    start: usize,
    end: usize,
}

/// A [`LineLookup`] built in one pass over a text snapshot
#[derive(Debug)]
pub struct LineIndex {
    lines: Vec<LineSpan>,
    len: usize,
}

impl LineIndex {
    /// Index every line of the given text
    pub fn new(text: &str) -> Self {
        let mut lines = vec![];
        let mut start = 0;
        let mut previous = None;
        let mut count = 0;
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' {
                // Keep a trailing carriage return out of the line
                let end = if previous == Some('\r') { i - 1 } else { i };
                lines.push(LineSpan { start, end });
                start = i + 1;
            }
            previous = Some(ch);
            count = i + 1;
        }
        // The text after the last terminator still forms a line
        lines.push(LineSpan { start, end: count });
        Self { lines, len: count }
    }

    /// The number of lines in the indexed text
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The length of the indexed text in characters
    pub fn len(&self) -> usize {
        self.len
    }

    /// Determines if the indexed text was empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn get(&self, line: usize) -> LineSpan {
        let last = self.lines.len().saturating_sub(1);
        self.lines[line.min(last)]
    }
}

impl LineLookup for LineIndex {
    fn line_of(&self, offset: usize) -> usize {
        // An offset on a terminator belongs to the line it terminates
        let at = self.lines.partition_point(|l| l.start <= offset);
        at.saturating_sub(1)
    }

    fn line_start(&self, line: usize) -> usize {
        self.get(line).start
    }

    fn line_end(&self, line: usize) -> usize {
        self.get(line).end
    }
}
