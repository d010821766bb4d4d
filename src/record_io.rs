/// Delimited text format for account records
///
/// One record per line: `name<d>id1<d>id2...`. Blank lines and `#` comments
/// are skipped, fields are trimmed and empty fields dropped.
use std::io::{BufRead, Write};

use crate::account::Account;
use crate::error::{MergeError, Result};

pub const DEFAULT_DELIMITER: char = '\t';

#[derive(Debug, Clone, Copy)]
pub struct RecordFormat {
    pub delimiter: char,
}

impl Default for RecordFormat {
    fn default() -> Self {
        RecordFormat {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl RecordFormat {
    pub fn new(delimiter: char) -> Self {
        RecordFormat { delimiter }
    }

    /// Parse one line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// `line_number` is 1-based and only used in errors.
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<Option<Account>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let fields: Vec<&str> = trimmed
            .split(self.delimiter)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() < 2 {
            return Err(MergeError::Parse {
                line: line_number,
                message: format!(
                    "expected a name and at least one identifier, got {} field(s)",
                    fields.len()
                ),
            });
        }

        Account::from_fields(fields, line_number.saturating_sub(1)).map(Some)
    }

    /// Read every record from `reader`
    pub fn read_accounts<R: BufRead>(&self, reader: R) -> Result<Vec<Account>> {
        let mut accounts = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(account) = self.parse_line(&line, i + 1)? {
                accounts.push(account);
            }
        }
        Ok(accounts)
    }

    /// Write one account per line
    pub fn write_accounts<W: Write>(&self, mut writer: W, accounts: &[Account]) -> Result<()> {
        for account in accounts {
            writeln!(writer, "{}", account.join(self.delimiter))?;
        }
        writer.flush()?;
        Ok(())
    }
}
