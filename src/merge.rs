/// Account merging over a disjoint-set forest of identifiers
///
/// Every identifier in every record becomes a node. Identifiers that share a
/// record are unioned through the record's first identifier, and the final
/// sets become merged accounts.
///
/// Ownership is first-seen: an identifier belongs to the name of the first
/// record that mentions it, and later records never overwrite that. A merged
/// group is named after the owner of its earliest registered identifier.
use log::{debug, info};

use crate::account::Account;
use crate::error::{MergeError, Result};
use crate::forest::IdentifierForest;

#[derive(Debug, Clone)]
pub struct AccountMerger {
    accounts: Vec<Account>,
    forest: IdentifierForest,
    /// Owning record index per forest slot
    owners: Vec<usize>,
}

impl AccountMerger {
    /// Register every identifier from `records` (`[name, id1, ...]` each).
    ///
    /// All records are validated before any state is built.
    pub fn new<R, S>(records: R) -> Result<Self>
    where
        R: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        let accounts = records
            .into_iter()
            .enumerate()
            .map(|(index, fields)| Account::from_fields(fields, index))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_accounts(accounts))
    }

    /// Build from accounts; every `Account` already holds at least one identifier
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let mut forest = IdentifierForest::new();
        let mut owners = Vec::new();

        for (index, account) in accounts.iter().enumerate() {
            for id in &account.identifiers {
                let (_, is_new) = forest.insert(id);
                if is_new {
                    owners.push(index);
                }
            }
        }

        debug!(
            "Registered {} identifiers from {} records",
            forest.len(),
            accounts.len()
        );

        AccountMerger {
            accounts,
            forest,
            owners,
        }
    }

    pub fn records(&self) -> &[Account] {
        &self.accounts
    }

    pub fn record_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn identifier_count(&self) -> usize {
        self.forest.len()
    }

    /// Representative identifier of the set containing `identifier`
    pub fn find(&mut self, identifier: &str) -> Result<&str> {
        self.forest.find(identifier)
    }

    /// Merge the sets containing `a` and `b`. Returns false if already merged.
    pub fn union(&mut self, a: &str, b: &str) -> Result<bool> {
        self.forest.union(a, b)
    }

    pub fn connected(&mut self, a: &str, b: &str) -> Result<bool> {
        self.forest.connected(a, b)
    }

    pub fn set_size(&mut self, identifier: &str) -> Result<usize> {
        self.forest.set_size(identifier)
    }

    /// Name of the record that first introduced `identifier`
    pub fn owner(&self, identifier: &str) -> Result<&str> {
        let slot = self.forest.slot(identifier)?;
        Ok(self.owner_of_slot(slot))
    }

    fn owner_of_slot(&self, slot: usize) -> &str {
        &self.accounts[self.owners[slot]].name
    }

    /// Union each record's identifiers into its pivot, then emit one account per set.
    ///
    /// Output follows the first registered identifier of each group; the
    /// identifiers inside an account are sorted ascending. Calling this again
    /// returns the same accounts.
    pub fn merge_accounts(&mut self) -> Vec<Account> {
        let mut unions = 0usize;
        for account in &self.accounts {
            let Some((pivot, rest)) = account.identifiers.split_first() else {
                continue;
            };
            for id in rest {
                // Every identifier was registered during construction
                if let Ok(true) = self.forest.union(pivot, id) {
                    unions += 1;
                }
            }
        }

        let merged: Vec<Account> = self
            .forest
            .groups()
            .into_iter()
            .map(|slots| {
                // Slots come back in registration order, so slots[0] is the earliest
                let name = self.owner_of_slot(slots[0]).to_string();
                let mut identifiers: Vec<String> = slots
                    .iter()
                    .filter_map(|&slot| self.forest.identifier(slot))
                    .map(str::to_string)
                    .collect();
                identifiers.sort_unstable();
                Account { name, identifiers }
            })
            .collect();

        info!(
            "Merged {} records ({} identifiers, {} unions) into {} accounts",
            self.accounts.len(),
            self.forest.len(),
            unions,
            merged.len()
        );

        merged
    }

    /// Same as `merge_accounts`, flattened to `[name, id1, id2, ...]`
    pub fn merge_account_fields(&mut self) -> Vec<Vec<String>> {
        self.merge_accounts()
            .iter()
            .map(Account::to_fields)
            .collect()
    }
}

/// Construct a merger over `records` and merge it
pub fn merge_accounts<R, S>(records: R) -> Result<Vec<Account>>
where
    R: IntoIterator<Item = Vec<S>>,
    S: Into<String>,
{
    Ok(AccountMerger::new(records)?.merge_accounts())
}

impl TryFrom<Vec<Vec<String>>> for AccountMerger {
    type Error = MergeError;

    fn try_from(records: Vec<Vec<String>>) -> Result<Self> {
        AccountMerger::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(records: &[&[&str]]) -> Vec<Vec<String>> {
        records
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_first_seen_owner_wins() {
        let merger =
            AccountMerger::new(fields(&[&["Alice", "x1"], &["Bob", "x1", "x2"]])).unwrap();
        assert_eq!(merger.owner("x1").unwrap(), "Alice");
        assert_eq!(merger.owner("x2").unwrap(), "Bob");
        assert!(merger.owner("x3").is_err());
        assert_eq!(merger.identifier_count(), 2);
        assert_eq!(merger.record_count(), 2);
        assert_eq!(merger.records()[1].name(), "Bob");
    }

    #[test]
    fn test_invalid_record_rejected() {
        let err = AccountMerger::new(fields(&[&["John", "j1"], &["Mary"]])).unwrap_err();
        assert!(matches!(err, MergeError::InvalidRecord { index: 1, fields: 1 }));
    }

    #[test]
    fn test_group_named_after_earliest_identifier() {
        // Bob's record links x2 (owned by Bob) with x1 (owned by Alice)
        let mut merger =
            AccountMerger::new(fields(&[&["Alice", "x1"], &["Bob", "x2", "x1"]])).unwrap();
        let merged = merger.merge_accounts();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].to_fields(), vec!["Alice", "x1", "x2"]);
    }

    #[test]
    fn test_find_after_merge() {
        let mut merger =
            AccountMerger::new(fields(&[&["A", "a", "b"], &["A", "c", "b"], &["B", "d"]]))
                .unwrap();
        merger.merge_accounts();
        let root = merger.find("a").unwrap().to_string();
        assert_eq!(merger.find("c").unwrap(), root);
        assert_ne!(merger.find("d").unwrap(), root);
        assert_eq!(merger.set_size("b").unwrap(), 3);
        assert!(merger.connected("a", "c").unwrap());
        assert!(matches!(
            merger.find("nope"),
            Err(MergeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_from_accounts_never_sees_empty_account() {
        // The only way to get an Account from outside is through a validating constructor
        let ghost = Account::new("Ghost", Vec::<String>::new());
        assert!(matches!(ghost, Err(MergeError::MissingIdentifiers { .. })));

        let mut merger = AccountMerger::from_accounts(vec![
            Account::new("Solo", ["s2", "s1"]).unwrap(),
            Account::try_from(vec!["Pair".to_string(), "p1".to_string()]).unwrap(),
        ]);
        assert_eq!(
            merger.merge_account_fields(),
            vec![vec!["Solo", "s1", "s2"], vec!["Pair", "p1"]]
        );
    }

    #[test]
    fn test_empty_input() {
        let mut merger = AccountMerger::new(Vec::<Vec<String>>::new()).unwrap();
        assert!(merger.merge_accounts().is_empty());
    }
}
