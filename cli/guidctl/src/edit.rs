//! Multi-point text insertion.
//!
//! Each insertion point is either a caret (empty range, text is inserted)
//! or a selection (text replaces the range). Offsets are byte offsets into
//! the original buffer.

use std::fmt;
use std::str::FromStr;

use iguid_catalog::{Candidate, PLACEHOLDER};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

/// A byte range in a buffer. Empty ranges are carets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// An empty selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Parses a bare `OFFSET`, rejecting `START:END`.
    pub fn parse_caret(s: &str) -> Result<Self, CliError> {
        if s.contains(':') {
            return Err(CliError::selection(format!(
                "'{s}' is a range; use --select for START:END"
            )));
        }
        s.parse()
    }

    /// Parses `START:END`, rejecting a bare offset.
    pub fn parse_range(s: &str) -> Result<Self, CliError> {
        if !s.contains(':') {
            return Err(CliError::selection(format!(
                "'{s}' is an offset; use --at for OFFSET"
            )));
        }
        s.parse()
    }

    fn check(&self, buffer: &str) -> Result<(), CliError> {
        if self.start > self.end {
            return Err(CliError::selection(format!("{self} starts after it ends")));
        }
        if self.end > buffer.len() {
            return Err(CliError::selection(format!(
                "{self} is past the end of the buffer ({} bytes)",
                buffer.len()
            )));
        }
        if !buffer.is_char_boundary(self.start) || !buffer.is_char_boundary(self.end) {
            return Err(CliError::selection(format!(
                "{self} splits a multi-byte character"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for Selection {
    type Err = CliError;

    /// Parses `OFFSET` or `START:END`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let offset = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| CliError::selection(format!("'{s}' is not OFFSET or START:END")))
        };

        match s.split_once(':') {
            Some((start, end)) => Ok(Self {
                start: offset(start)?,
                end: offset(end)?,
            }),
            None => Ok(Self::caret(offset(s)?)),
        }
    }
}

/// The edited buffer and where things landed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    /// The buffer after all insertions.
    pub text: String,
    /// Range of each inserted text, in buffer order.
    pub inserted: Vec<Selection>,
    /// Range of each placeholder token, in buffer order.
    pub placeholders: Vec<Selection>,
}

/// Inserts `item`'s text at every point of `buffer`.
///
/// Points are visited in the order given. With `unique`, the item is
/// regenerated after each point so every point gets a distinct GUID.
/// Points must not overlap.
pub fn apply(
    buffer: &str,
    points: &[Selection],
    item: &mut Candidate<'_>,
    unique: bool,
) -> Result<EditOutcome, CliError> {
    for point in points {
        point.check(buffer)?;
    }

    // Buffer order, remembering which point was given first.
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&index| points[index]);
    for pair in order.windows(2) {
        let (prev, next) = (points[pair[0]], points[pair[1]]);
        if next.start < prev.end || next == prev {
            return Err(CliError::selection(format!("{prev} overlaps {next}")));
        }
    }

    let mut texts: Vec<(String, Vec<usize>)> = Vec::with_capacity(points.len());
    for _ in points {
        texts.push((item.text(), item.placeholder_offsets()));
        if unique {
            item.regenerate();
        }
    }

    let edits: Vec<(Selection, &str, &[usize])> = order
        .iter()
        .map(|&index| {
            let (text, offsets) = &texts[index];
            (points[index], text.as_str(), offsets.as_slice())
        })
        .collect();

    let mut out = String::with_capacity(
        buffer.len() + edits.iter().map(|(_, text, _)| text.len()).sum::<usize>(),
    );
    let mut inserted = Vec::with_capacity(edits.len());
    let mut placeholders = Vec::new();
    let mut cursor = 0;

    for &(point, text, offsets) in &edits {
        out.push_str(&buffer[cursor..point.start]);
        let start = out.len();
        out.push_str(text);
        inserted.push(Selection {
            start,
            end: out.len(),
        });
        placeholders.extend(offsets.iter().map(|offset| Selection {
            start: start + offset,
            end: start + offset + PLACEHOLDER.len(),
        }));
        cursor = point.end;
    }
    out.push_str(&buffer[cursor..]);

    debug!(
        points = edits.len(),
        unique,
        placeholders = placeholders.len(),
        "Applied insertions"
    );

    Ok(EditOutcome {
        text: out,
        inserted,
        placeholders,
    })
}
