/// Account record: an owner name followed by one or more identifiers
///
/// Fields are private so every `Account` outside this crate comes through a
/// validating constructor and always holds at least one identifier.
use std::fmt;

use crate::error::{MergeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    pub(crate) name: String,
    pub(crate) identifiers: Vec<String>,
}

impl Account {
    /// Build an account from a name and identifiers. Fails when no identifier is given.
    pub fn new<N, I, S>(name: N, identifiers: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        if identifiers.is_empty() {
            return Err(MergeError::MissingIdentifiers { name });
        }
        Ok(Account { name, identifiers })
    }

    /// Build an account from `[name, id1, id2, ...]`.
    ///
    /// `index` is the record position reported on failure.
    pub fn from_fields<S: Into<String>>(fields: Vec<S>, index: usize) -> Result<Self> {
        if fields.len() < 2 {
            return Err(MergeError::InvalidRecord {
                index,
                fields: fields.len(),
            });
        }
        let mut fields = fields.into_iter().map(Into::into);
        // Length checked above
        let name = fields.next().unwrap_or_default();
        Ok(Account {
            name,
            identifiers: fields.collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Flatten back to `[name, id1, id2, ...]`
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.identifiers.len() + 1);
        fields.push(self.name.clone());
        fields.extend(self.identifiers.iter().cloned());
        fields
    }

    /// Join name and identifiers with a delimiter
    pub fn join(&self, delimiter: char) -> String {
        let mut line = self.name.clone();
        for id in &self.identifiers {
            line.push(delimiter);
            line.push_str(id);
        }
        line
    }
}

impl TryFrom<Vec<String>> for Account {
    type Error = MergeError;

    fn try_from(fields: Vec<String>) -> Result<Self> {
        Account::from_fields(fields, 0)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join('\t'))
    }
}
