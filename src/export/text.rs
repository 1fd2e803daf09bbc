//! Plain-text bulk import format: one `question;answer` record per line.

use crate::error::{FlashcardError, Result};
use std::fs;
use std::path::Path;

pub const SEPARATOR: char = ';';

/// One parsed line, not yet validated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportRecord {
    /// 1-based line number in the source
    pub line: usize,
    pub question: String,
    pub answer: String,
}

/// Splits each line on the single separator.
/// Reading stops at the first empty line. Any other line without exactly one
/// separator, whitespace-only lines included, fails the whole parse.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<ImportRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            break;
        }

        let mut fields = line.split(SEPARATOR);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(question), Some(answer), None) => records.push(ImportRecord {
                line: index + 1,
                question: question.trim().to_string(),
                answer: answer.trim().to_string(),
            }),
            _ => {
                return Err(FlashcardError::MalformedRecord {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }
    Ok(records)
}

/// Reads a whole import file into memory
pub fn read_import_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    log::debug!("Read {} bytes from '{}'", contents.len(), path.display());
    Ok(contents)
}
