//! Append-only semicolon-delimited ledger file.
//!
//! The file is the system's durable cache of previously seen orders: a
//! header row on first write, then one encoded line per (order, item). Lines
//! are only ever appended — never rewritten or compacted.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::row::{LedgerRow, HEADER};

/// Field delimiter. A semicolon tolerates locale-formatted values that
/// themselves contain commas.
pub const DELIMITER: char = ';';

/// Store over the ledger file.
///
/// Single-writer by design: the one process running syncs is the only thing
/// touching the file, so no locking protocol is needed.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Creates a store over `path`. The file is not touched until the first
    /// [`append`](Self::append).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the set of order ids already recorded.
    ///
    /// A missing file yields an empty set, not an error. The header row, if
    /// present, is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file exists but cannot be read.
    pub fn load(&self) -> Result<HashSet<String>, LedgerError> {
        let mut seen = HashSet::new();
        self.scan(|order_id| {
            seen.insert(order_id.to_owned());
            false
        })?;
        Ok(seen)
    }

    /// Whether `order_id` is already recorded (linear scan).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file exists but cannot be read.
    pub fn exists(&self, order_id: &str) -> Result<bool, LedgerError> {
        let mut found = false;
        self.scan(|candidate| {
            found = candidate == order_id;
            found
        })?;
        Ok(found)
    }

    /// Appends `rows`, writing the header first when the file is empty.
    ///
    /// Called once per sync run, after the whole fetch/transform loop has
    /// succeeded; the file is created on first use.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Io`] if the file cannot be opened or written.
    pub fn append(&self, rows: &[LedgerRow]) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut writer = BufWriter::new(file);
        if is_empty {
            writeln!(writer, "{}", encode_line(HEADER.iter().copied()))?;
        }
        for row in rows {
            let fields = row.fields();
            writeln!(writer, "{}", encode_line(fields.iter().map(String::as_str)))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Walks the order-id column of every data line, stopping when `visit`
    /// returns `true`.
    fn scan<F>(&self, mut visit: F) -> Result<(), LedgerError>
    where
        F: FnMut(&str) -> bool,
    {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(LedgerError::Io(e)),
        };

        let mut first = true;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if first {
                first = false;
                if is_header(&line) {
                    continue;
                }
            }
            if line.is_empty() {
                continue;
            }
            let Some(order_id) = decode_line(&line).into_iter().next() else {
                continue;
            };
            if visit(&order_id) {
                break;
            }
        }
        Ok(())
    }
}

/// Quotes a field when it contains the delimiter, a quote, or a line break;
/// embedded quotes are doubled.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Encodes one line in stable column order.
fn encode_line<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields
        .map(|f| escape_field(f).into_owned())
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Decodes one encoded line back into its fields, reversing the quoting
/// rules of [`encode_line`].
#[must_use]
pub fn decode_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}

fn is_header(line: &str) -> bool {
    decode_line(line).first().is_some_and(|f| f == HEADER[0])
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
